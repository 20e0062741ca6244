//! Semantic error types
//!
//! This module defines [`SemanticError`], which represents every violation the
//! analyzer can report, and [`CheckError`], which wraps the errors of both
//! front-end stages for callers that run the whole pipeline.
//!
//! All semantic errors are fatal: analysis stops at the first one.

use crate::parser::ast::{SourceLocation, TypeName};
use crate::parser::parse::ParseError;
use std::fmt;

/// Where a failed lookup happened, used to prefix the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupContext {
    FunctionCall,
    Assignment,
}

impl fmt::Display for LookupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupContext::FunctionCall => f.write_str("Function call error"),
            LookupContext::Assignment => f.write_str("Assignment error"),
        }
    }
}

/// Semantic errors that can occur during analysis
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticError {
    /// Name declared twice in the same scope
    DuplicateSymbol {
        name: String,
        location: Option<SourceLocation>,
    },

    /// Name not found anywhere on the scope chain
    UndeclaredSymbol {
        name: String,
        context: Option<LookupContext>,
        location: Option<SourceLocation>,
    },

    /// Call target resolved to a variable
    NotAFunction {
        name: String,
        location: Option<SourceLocation>,
    },

    /// Value type not accepted by the declared type
    TypeMismatch {
        expected: TypeName,
        found: TypeName,
        context: Option<LookupContext>,
        location: Option<SourceLocation>,
    },

    /// Number literal that is neither an integer nor a float
    MalformedLiteral {
        literal: String,
        location: Option<SourceLocation>,
    },
}

impl SemanticError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            SemanticError::DuplicateSymbol { location, .. } => location.as_ref(),
            SemanticError::UndeclaredSymbol { location, .. } => location.as_ref(),
            SemanticError::NotAFunction { location, .. } => location.as_ref(),
            SemanticError::TypeMismatch { location, .. } => location.as_ref(),
            SemanticError::MalformedLiteral { location, .. } => location.as_ref(),
        }
    }

    /// The offending symbol, if the error is about a name
    pub fn name(&self) -> Option<&str> {
        match self {
            SemanticError::DuplicateSymbol { name, .. }
            | SemanticError::UndeclaredSymbol { name, .. }
            | SemanticError::NotAFunction { name, .. } => Some(name),
            SemanticError::TypeMismatch { .. } | SemanticError::MalformedLiteral { .. } => None,
        }
    }

    /// Attach a location unless one is already set
    pub fn at(mut self, loc: SourceLocation) -> Self {
        let slot = match &mut self {
            SemanticError::DuplicateSymbol { location, .. }
            | SemanticError::UndeclaredSymbol { location, .. }
            | SemanticError::NotAFunction { location, .. }
            | SemanticError::TypeMismatch { location, .. }
            | SemanticError::MalformedLiteral { location, .. } => location,
        };
        slot.get_or_insert(loc);
        self
    }

    /// Mark a lookup or mismatch error with the site it came from
    pub(crate) fn in_context(mut self, ctx: LookupContext) -> Self {
        if let SemanticError::UndeclaredSymbol { context, .. }
        | SemanticError::TypeMismatch { context, .. } = &mut self
        {
            context.get_or_insert(ctx);
        }
        self
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::DuplicateSymbol { name, .. } => {
                write!(f, "Symbol '{}' already declared in this scope", name)?;
            }
            SemanticError::UndeclaredSymbol { name, context, .. } => {
                if let Some(ctx) = context {
                    write!(f, "{}: ", ctx)?;
                }
                write!(f, "Undeclared symbol '{}'", name)?;
            }
            SemanticError::NotAFunction { name, .. } => {
                write!(
                    f,
                    "{}: '{}' is not a function",
                    LookupContext::FunctionCall,
                    name
                )?;
            }
            SemanticError::TypeMismatch {
                expected,
                found,
                context,
                ..
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: ", ctx)?;
                }
                write!(f, "Type mismatch: cannot assign {} to {}", found, expected)?;
            }
            SemanticError::MalformedLiteral { literal, .. } => {
                write!(f, "Invalid number: {}", literal)?;
            }
        }

        if let Some(location) = self.location() {
            write!(f, " at {}", location)?;
        }
        Ok(())
    }
}

impl std::error::Error for SemanticError {}

/// Error from either front-end stage
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError {
    Parse(ParseError),
    Semantic(SemanticError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Parse(err) => write!(f, "Parse error: {}", err),
            CheckError::Semantic(err) => write!(f, "Semantic error: {}", err),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Parse(err) => Some(err),
            CheckError::Semantic(err) => Some(err),
        }
    }
}

impl From<ParseError> for CheckError {
    fn from(err: ParseError) -> Self {
        CheckError::Parse(err)
    }
}

impl From<SemanticError> for CheckError {
    fn from(err: SemanticError) -> Self {
        CheckError::Semantic(err)
    }
}
