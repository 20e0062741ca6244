//! # Introduction
//!
//! scopecheck is the front end of a small C-like language. It turns source
//! text into tokens, builds a parse tree by recursive descent, and checks the
//! tree against scoping and typing rules. An inspector built with
//! [ratatui](https://docs.rs/ratatui) shows the result of each stage.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Parse tree → SemanticAnalyzer → Global scope
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds a [`parser::ast::ParseNode`] tree.
//! 2. [`analyzer`] — walks the tree with chained [`analyzer::SymbolTable`] scopes
//!    and reports the first [`analyzer::SemanticError`].
//! 3. [`ui`] — ratatui-based inspector; not part of the stable library API.
//!
//! ## Supported subset
//!
//! Types: `int`, `float`, `double`, `char`.
//! Declarations: variables with an optional initializer, parameterless functions.
//! Expressions: a numeric literal, an identifier, or a function call.
//! Built-ins: `printf`, `puts`, `getchar`, `scanf`.
//!
//! ```
//! use scopecheck::analyzer::check_source;
//!
//! let globals = check_source("int main() { int x = 5; printf(x); }").unwrap();
//! assert!(globals.lookup("main").unwrap().is_function);
//! ```

pub mod analyzer;
pub mod parser;
pub mod ui;
