//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The inspector shows the three stages of one front-end run side by side:
//!
//! - **[`app`]** — the analyzed [`Session`], keyboard event loop and pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (tokens,
//!   parse tree, scopes, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] from a [`Session`] and call [`App::run`] to start the
//! event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Session};
