//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: variable and function declarations, declaration lists
//! - `expressions`: numbers, identifiers and function calls
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! Parsing fails fast: the first mismatch aborts with a [`ParseError`] and no
//! partial tree is returned.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended while `expected` was still required
    UnexpectedEof { expected: String },

    /// The current token has the wrong kind
    UnexpectedKind { expected: TokenKind, found: Token },

    /// The current token has the right shape but the wrong text
    UnexpectedValue { expected: String, found: Token },

    /// A keyword other than a type keyword where a type was required
    UnknownType { found: Token },

    /// A token that cannot start an expression
    ExpectedExpression { found: Token },
}

impl ParseError {
    /// Location of the offending token; `None` at end of input
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::UnexpectedEof { .. } => None,
            ParseError::UnexpectedKind { found, .. }
            | ParseError::UnexpectedValue { found, .. }
            | ParseError::UnknownType { found }
            | ParseError::ExpectedExpression { found } => Some(found.location),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            ParseError::UnexpectedKind { expected, found } => write!(
                f,
                "Expected {}, got {} at {}",
                expected, found, found.location
            ),
            ParseError::UnexpectedValue { expected, found } => write!(
                f,
                "Expected '{}', got {} at {}",
                expected, found, found.location
            ),
            ParseError::UnknownType { found } => {
                write!(f, "Unexpected type {} at {}", found.text, found.location)
            }
            ParseError::ExpectedExpression { found } => write!(
                f,
                "Unexpected token in expression: {} at {}",
                found, found.location
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for the C subset
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a parser over an already tokenized source
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Tokenize `source` and create a parser over the result
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source).tokenize())
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<ParseNode, ParseError> {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            declarations.push(self.parse_declaration()?);
        }

        Ok(ParseNode::Program { declarations })
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// True if the current token is the given operator or delimiter
    pub(crate) fn check_punct(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is_punct(text))
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Location of the current token, or of the last token at end of input
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.location)
            .unwrap_or_default()
    }

    /// Consume the current token if it has the expected kind
    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.peek().ok_or_else(|| ParseError::UnexpectedEof {
            expected: kind.to_string(),
        })?;

        if token.kind != kind {
            return Err(ParseError::UnexpectedKind {
                expected: kind,
                found: token.clone(),
            });
        }

        let token = token.clone();
        self.position += 1;
        Ok(token)
    }

    /// Consume the current token if it has the expected kind and text
    pub(crate) fn expect_token(&mut self, kind: TokenKind, text: &str) -> Result<Token, ParseError> {
        let token = self.peek().ok_or_else(|| ParseError::UnexpectedEof {
            expected: format!("'{}'", text),
        })?;

        if token.kind != kind {
            return Err(ParseError::UnexpectedKind {
                expected: kind,
                found: token.clone(),
            });
        }
        if token.text != text {
            return Err(ParseError::UnexpectedValue {
                expected: text.to_string(),
                found: token.clone(),
            });
        }

        let token = token.clone();
        self.position += 1;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<ParseNode, ParseError> {
        Parser::from_source(source).parse_program()
    }

    #[test]
    fn test_parse_simple_function() {
        let program = parse("int main() { int x = 5; printf(x); }").unwrap();

        let ParseNode::Program { declarations } = &program else {
            panic!("Expected program");
        };
        assert_eq!(declarations.len(), 1);
        match &declarations[0] {
            ParseNode::Function {
                return_type,
                name,
                body,
                ..
            } => {
                assert_eq!(*return_type, TypeName::Int);
                assert_eq!(name, "main");
                match body.as_ref() {
                    ParseNode::DeclarationList { declarations, .. } => {
                        assert_eq!(declarations.len(), 2);
                        assert!(matches!(
                            declarations[0],
                            ParseNode::VariableDeclaration { var_type: TypeName::Int, .. }
                        ));
                        assert!(matches!(
                            declarations[1],
                            ParseNode::ExpressionStatement { .. }
                        ));
                    }
                    _ => panic!("Expected declaration list"),
                }
            }
            _ => panic!("Expected function"),
        }
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse("").unwrap(), ParseNode::Program { declarations: vec![] });
    }

    #[test]
    fn test_missing_semicolon_at_end() {
        let err = parse("int x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
        assert_eq!(err.location(), None);
    }

    #[test]
    fn test_kind_mismatch() {
        // `int x 5;` - NUMBER where the closing DELIMITER belongs
        let err = parse("int x 5;").unwrap_err();
        match err {
            ParseError::UnexpectedKind { expected, found } => {
                assert_eq!(expected, TokenKind::Delimiter);
                assert_eq!(found.kind, TokenKind::Number);
                assert_eq!(found.location, SourceLocation::new(1, 7));
            }
            other => panic!("Expected kind mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = parse("return 0;").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected type return at line 1, column 1");

        let err = parse("int f( { }").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected ')', got DELIMITER '{' at line 1, column 8"
        );
    }
}
