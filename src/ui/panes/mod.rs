//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tokens`]: The token stream, one token per row with its kind and location
//! - [`tree`]: The parse tree as an indented outline
//! - [`symbols`]: The global scope and every function scope popped during analysis
//! - [`status`]: Status bar with the analysis outcome and keybindings
//! - `utils`: Shared scrolling and border helpers
//!
//! Each pane module exports a primary `render_*` function. Scroll offsets are
//! owned by the [`App`](crate::ui::App) and clamped by the pane on every render.

mod utils;

pub mod status;
pub mod symbols;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use status::render_status_bar;
pub use symbols::{render_symbols_pane, symbol_rows, SymbolRow};
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;
