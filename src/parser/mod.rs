//! C subset source code parser
//!
//! This module transforms source text into a parse tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct and entry point (tokens → parse tree)
//! - [`ast`]: Parse tree node definitions
//!
//! # Supported Subset
//!
//! - Types: `int`, `float`, `double`, `char`
//! - Declarations: variables with an optional initializer, parameterless functions
//! - Expressions: a numeric literal, an identifier, or a function call
//! - Control-flow keywords are recognized by the lexer but rejected by the grammar
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
