//! Token stream pane rendering

use super::utils::{pane_block, render_scrolled_list};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default().fg(DEFAULT_THEME.keyword),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Operator | TokenKind::Delimiter => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::InvalidIdentifier => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
    }
}

fn token_line(token: &Token) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>3}:{:<3} ", token.location.line, token.location.column),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<18} ", token.kind), kind_style(token.kind)),
        Span::styled(token.text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the token stream pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);
    let items: Vec<ListItem> = tokens.iter().map(|t| ListItem::new(token_line(t))).collect();

    render_scrolled_list(frame, area, block, items, "(no tokens)", scroll_offset);
}
