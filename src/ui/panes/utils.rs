//! Shared helpers for list-style panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` so the last page stays full, and return it
pub(super) fn clamp_scroll(total_items: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
    visible_height
}

/// Render `items` inside `block`, or `placeholder` when there are none
pub(super) fn render_scrolled_list(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    items: Vec<ListItem<'_>>,
    placeholder: &str,
    scroll_offset: &mut usize,
) {
    if items.is_empty() {
        let paragraph = Paragraph::new(placeholder.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(items.len(), area, scroll_offset);

    // Take only visible items
    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let area = Rect::new(0, 0, 20, 12); // 10 visible rows

        let mut offset = 50;
        assert_eq!(clamp_scroll(25, area, &mut offset), 10);
        assert_eq!(offset, 15);

        let mut offset = 3;
        clamp_scroll(4, area, &mut offset);
        assert_eq!(offset, 0);
    }
}
