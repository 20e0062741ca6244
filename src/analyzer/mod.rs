//! Scoped semantic analysis
//!
//! This module checks a parse tree against the language's scoping and typing
//! rules:
//! - [`symbol_table`]: chained scopes mapping names to [`Symbol`]s
//! - [`engine`]: the [`SemanticAnalyzer`] tree walker
//! - [`builtins`]: predefined functions seeded into the global scope
//! - [`errors`]: [`SemanticError`] and the pipeline-wide [`CheckError`]
//!
//! [`check_source`] runs the whole front end (tokenize, parse, analyze) in
//! one call.

pub mod builtins;
pub mod engine;
pub mod errors;
pub mod symbol_table;

pub use engine::{ScopeRecord, SemanticAnalyzer};
pub use errors::{CheckError, LookupContext, SemanticError};
pub use symbol_table::{Symbol, SymbolTable};

use crate::parser::parse::Parser;

/// Tokenize, parse and analyze `source` with the default predefined
/// functions, returning the populated global scope.
pub fn check_source(source: &str) -> Result<SymbolTable<'static>, CheckError> {
    let tree = Parser::from_source(source).parse_program()?;

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&tree)?;
    Ok(analyzer.into_globals())
}
