//! Declaration parsing implementation
//!
//! This module handles the statement level of the grammar:
//!
//! - Variable declarations: `int x;` and `int x = 5;`
//! - Function definitions: `int main() { ... }`
//! - Expression statements: `printf(x);`
//! - Declaration lists (function bodies)
//!
//! # Grammar
//!
//! ```text
//! declaration_list ::= declaration*                  (until '}' or end of input)
//! declaration      ::= type identifier ";"
//!                    | type identifier "=" expression ";"
//!                    | type identifier "(" ")" "{" declaration_list "}"
//!                    | expression ";"
//! type             ::= "int" | "float" | "double" | "char"
//! ```
//!
//! A declaration that starts with a keyword is a variable or function
//! declaration; anything else is an expression statement.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse one declaration or expression statement
    pub(crate) fn parse_declaration(&mut self) -> Result<ParseNode, ParseError> {
        if !self.check_kind(TokenKind::Keyword) {
            return self.parse_expression_statement();
        }

        let location = self.current_location();
        let var_type = self.parse_type()?;
        let name = self.expect_kind(TokenKind::Identifier)?.text;

        if self.check_punct("(") {
            return self.parse_function_definition(var_type, name, location);
        }

        let initializer = if self.check_punct("=") {
            self.expect_token(TokenKind::Operator, "=")?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.expect_token(TokenKind::Delimiter, ";")?;

        Ok(ParseNode::VariableDeclaration {
            var_type,
            name,
            initializer,
            location,
        })
    }

    /// Parse the rest of a function definition once `type name` is consumed
    fn parse_function_definition(
        &mut self,
        return_type: TypeName,
        name: String,
        location: SourceLocation,
    ) -> Result<ParseNode, ParseError> {
        self.expect_token(TokenKind::Delimiter, "(")?;
        self.expect_token(TokenKind::Delimiter, ")")?;
        self.expect_token(TokenKind::Delimiter, "{")?;

        let body = self.parse_declaration_list()?;

        self.expect_token(TokenKind::Delimiter, "}")?;

        Ok(ParseNode::Function {
            return_type,
            name,
            body: Box::new(body),
            location,
        })
    }

    /// Parse declarations up to a closing brace or the end of input.
    ///
    /// The brace itself is left for the caller.
    pub(crate) fn parse_declaration_list(&mut self) -> Result<ParseNode, ParseError> {
        let location = self.current_location();
        let mut declarations = Vec::new();

        while !self.is_at_end() && !self.check_punct("}") {
            declarations.push(self.parse_declaration()?);
        }

        Ok(ParseNode::DeclarationList {
            declarations,
            location,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<ParseNode, ParseError> {
        let location = self.current_location();
        let expr = self.parse_expression()?;
        self.expect_token(TokenKind::Delimiter, ";")?;

        Ok(ParseNode::ExpressionStatement {
            expr: Box::new(expr),
            location,
        })
    }

    /// Parse type: one of the four type keywords
    fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        let token = self.expect_kind(TokenKind::Keyword)?;
        TypeName::from_keyword(&token.text).ok_or(ParseError::UnknownType { found: token })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse::{ParseError, Parser};

    fn declarations(source: &str) -> Vec<ParseNode> {
        match Parser::from_source(source).parse_program().unwrap() {
            ParseNode::Program { declarations } => declarations,
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_variable_declarations() {
        let decls = declarations("int a; float b = 1; double c = 2.5; char d = e;");
        assert_eq!(decls.len(), 4);

        assert!(matches!(
            &decls[0],
            ParseNode::VariableDeclaration { var_type: TypeName::Int, name, initializer: None, .. }
                if name == "a"
        ));
        assert!(matches!(
            &decls[2],
            ParseNode::VariableDeclaration { var_type: TypeName::Double, initializer: Some(init), .. }
                if matches!(init.as_ref(), ParseNode::Number(lit, _) if lit == "2.5")
        ));
        assert!(matches!(
            &decls[3],
            ParseNode::VariableDeclaration { var_type: TypeName::Char, initializer: Some(init), .. }
                if matches!(init.as_ref(), ParseNode::Identifier(id, _) if id == "e")
        ));
    }

    #[test]
    fn test_nested_function() {
        let decls = declarations("int outer() { char inner() { } }");
        match &decls[0] {
            ParseNode::Function { name, body, .. } => {
                assert_eq!(name, "outer");
                match body.as_ref() {
                    ParseNode::DeclarationList { declarations, .. } => {
                        assert!(matches!(
                            &declarations[0],
                            ParseNode::Function { return_type: TypeName::Char, name, .. }
                                if name == "inner"
                        ));
                    }
                    other => panic!("Expected declaration list, got {:?}", other),
                }
            }
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_function_body() {
        let err = Parser::from_source("int main() { int x;").parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEof {
                expected: "'}'".to_string()
            }
        );
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = Parser::from_source("int x; }").parse_program().unwrap_err();
        assert!(matches!(err, ParseError::ExpectedExpression { ref found } if found.text == "}"));
    }

    #[test]
    fn test_control_keywords_are_not_types() {
        let err = Parser::from_source("while (x) { }").parse_program().unwrap_err();
        assert!(matches!(err, ParseError::UnknownType { ref found } if found.text == "while"));
    }

    #[test]
    fn test_declared_name_must_be_identifier() {
        let err = Parser::from_source("int 9lives;").parse_program().unwrap_err();
        match err {
            ParseError::UnexpectedKind { expected, found } => {
                assert_eq!(expected, TokenKind::Identifier);
                assert_eq!(found.kind, TokenKind::InvalidIdentifier);
            }
            other => panic!("Expected kind mismatch, got {:?}", other),
        }
    }
}
