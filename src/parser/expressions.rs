//! Expression parsing implementation
//!
//! Expressions are deliberately tiny: a number, an identifier, or a call.
//!
//! ```text
//! expression    ::= number | identifier | identifier "(" argument_list ")"
//! argument_list ::= (expression ("," expression)*)?
//! ```

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a single expression
    pub(crate) fn parse_expression(&mut self) -> Result<ParseNode, ParseError> {
        let token = self
            .peek()
            .ok_or_else(|| ParseError::UnexpectedEof {
                expected: "expression".to_string(),
            })?
            .clone();

        match token.kind {
            TokenKind::Number => {
                self.expect_kind(TokenKind::Number)?;
                Ok(ParseNode::Number(token.text, token.location))
            }
            TokenKind::Identifier => {
                self.expect_kind(TokenKind::Identifier)?;
                if self.check_punct("(") {
                    self.parse_function_call(token.text, token.location)
                } else {
                    Ok(ParseNode::Identifier(token.text, token.location))
                }
            }
            _ => Err(ParseError::ExpectedExpression { found: token }),
        }
    }

    /// Parse `( argument_list )` after a callee identifier
    fn parse_function_call(
        &mut self,
        callee: String,
        location: SourceLocation,
    ) -> Result<ParseNode, ParseError> {
        self.expect_token(TokenKind::Delimiter, "(")?;
        let arguments = self.parse_argument_list()?;
        self.expect_token(TokenKind::Delimiter, ")")?;

        Ok(ParseNode::FunctionCall {
            callee,
            arguments,
            location,
        })
    }

    fn parse_argument_list(&mut self) -> Result<Vec<ParseNode>, ParseError> {
        let mut args = Vec::new();

        if self.is_at_end() || self.check_punct(")") {
            return Ok(args);
        }

        args.push(self.parse_expression()?);
        while self.check_punct(",") {
            self.expect_token(TokenKind::Delimiter, ",")?;
            args.push(self.parse_expression()?);
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseError, Parser};

    fn expression(source: &str) -> Result<ParseNode, ParseError> {
        Parser::from_source(source).parse_expression()
    }

    #[test]
    fn test_primary_expressions() {
        assert!(matches!(expression("42"), Ok(ParseNode::Number(ref n, _)) if n == "42"));
        assert!(matches!(expression("x"), Ok(ParseNode::Identifier(ref id, _)) if id == "x"));
    }

    #[test]
    fn test_call_arguments() {
        match expression("printf(x, 1, getchar())").unwrap() {
            ParseNode::FunctionCall {
                callee, arguments, ..
            } => {
                assert_eq!(callee, "printf");
                assert_eq!(arguments.len(), 3);
                assert!(matches!(&arguments[0], ParseNode::Identifier(id, _) if id == "x"));
                assert!(matches!(&arguments[1], ParseNode::Number(n, _) if n == "1"));
                assert!(matches!(
                    &arguments[2],
                    ParseNode::FunctionCall { callee, arguments, .. }
                        if callee == "getchar" && arguments.is_empty()
                ));
            }
            other => panic!("Expected function call, got {:?}", other),
        }
    }

    #[test]
    fn test_operator_is_not_an_expression() {
        let err = expression("= 5").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedExpression { ref found } if found.text == "="));
    }

    #[test]
    fn test_unterminated_call() {
        let err = expression("puts(").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEof {
                expected: "')'".to_string()
            }
        );

        let err = expression("puts(1,").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { ref expected } if expected == "expression"));
    }
}
