//! Parse tree pane rendering
//!
//! The tree is shown as the indented outline produced by
//! [`ParseNode::outline`]; leaf payloads such as `Type(int)` and
//! `Number(5)` are coloured by what they carry.

use super::utils::{pane_block, render_scrolled_list};
use crate::parser::ast::ParseNode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn outline_line(line: String) -> Line<'static> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();

    let color = if trimmed.starts_with("Type(") {
        DEFAULT_THEME.type_name
    } else if trimmed.starts_with("Number(") {
        DEFAULT_THEME.number
    } else if trimmed.starts_with("Identifier(") {
        DEFAULT_THEME.fg
    } else if trimmed.starts_with("Function") {
        DEFAULT_THEME.function
    } else {
        DEFAULT_THEME.primary
    };

    Line::from(vec![
        Span::raw(line[..indent].to_string()),
        Span::styled(trimmed.to_string(), Style::default().fg(color)),
    ])
}

/// Render the parse tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &ParseNode,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Parse Tree ", is_focused);
    let items: Vec<ListItem> = tree
        .outline()
        .into_iter()
        .map(|line| ListItem::new(outline_line(line)))
        .collect();

    render_scrolled_list(frame, area, block, items, "(empty program)", scroll_offset);
}
