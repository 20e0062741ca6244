//! Predefined functions available to every program

use crate::analyzer::symbol_table::Symbol;
use crate::parser::ast::TypeName;

/// Functions seeded into the global scope when no custom set is given
pub const DEFAULT_BUILTINS: &[(&str, Symbol)] = &[
    ("printf", Symbol { ty: TypeName::Int, is_function: true }),
    ("puts", Symbol { ty: TypeName::Int, is_function: true }),
    ("getchar", Symbol { ty: TypeName::Int, is_function: true }),
    ("scanf", Symbol { ty: TypeName::Int, is_function: true }),
];

pub fn is_default_builtin(name: &str) -> bool {
    DEFAULT_BUILTINS.iter().any(|(builtin, _)| *builtin == name)
}
