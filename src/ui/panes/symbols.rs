//! Scope pane rendering
//!
//! Shows the global scope first, then every function scope in the order the
//! analyzer popped it. Predefined functions are dimmed so the program's own
//! declarations stand out.

use super::utils::{pane_block, render_scrolled_list};
use crate::analyzer::builtins::is_default_builtin;
use crate::analyzer::{ScopeRecord, Symbol, SymbolTable};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

/// One row of the scope pane
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolRow {
    Header(String),
    Entry {
        name: String,
        symbol: Symbol,
        depth: usize,
        builtin: bool,
    },
}

/// Flatten the global scope and the closed function scopes into rows
pub fn symbol_rows(globals: &SymbolTable<'_>, closed_scopes: &[ScopeRecord]) -> Vec<SymbolRow> {
    let mut rows = vec![SymbolRow::Header(format!("global ({})", globals.len()))];

    rows.extend(globals.iter().map(|(name, symbol)| SymbolRow::Entry {
        name: name.to_string(),
        symbol: *symbol,
        depth: 0,
        builtin: is_default_builtin(name),
    }));

    for scope in closed_scopes {
        rows.push(SymbolRow::Header(format!(
            "{}() depth {} ({})",
            scope.owner,
            scope.depth,
            scope.symbols.len()
        )));
        rows.extend(scope.symbols.iter().map(|(name, symbol)| SymbolRow::Entry {
            name: name.clone(),
            symbol: *symbol,
            depth: scope.depth,
            builtin: false,
        }));
    }

    rows
}

fn row_line(row: &SymbolRow) -> Line<'static> {
    match row {
        SymbolRow::Header(title) => Line::from(Span::styled(
            title.clone(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        SymbolRow::Entry {
            name,
            symbol,
            depth,
            builtin,
        } => {
            let name_color = if *builtin {
                DEFAULT_THEME.comment
            } else if symbol.is_function {
                DEFAULT_THEME.function
            } else {
                DEFAULT_THEME.fg
            };
            let kind = if symbol.is_function { "fn " } else { "var" };

            Line::from(vec![
                Span::raw("  ".repeat(depth + 1)),
                Span::styled(format!("{} ", kind), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<6} ", symbol.ty), Style::default().fg(DEFAULT_THEME.type_name)),
                Span::styled(name.clone(), Style::default().fg(name_color)),
            ])
        }
    }
}

/// Render the scope pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[SymbolRow],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Scopes ", is_focused);
    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row_line(row))).collect();

    render_scrolled_list(frame, area, block, items, "(no symbols)", scroll_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::SemanticAnalyzer;
    use crate::parser::ast::TypeName;
    use crate::parser::parse::Parser;

    #[test]
    fn test_rows_list_globals_then_function_scopes() {
        let tree = Parser::from_source("int main() { char c; }")
            .parse_program()
            .unwrap();
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&tree).unwrap();

        let rows = symbol_rows(analyzer.globals(), analyzer.closed_scopes());

        assert_eq!(rows[0], SymbolRow::Header("global (5)".to_string()));
        assert!(matches!(&rows[1], SymbolRow::Entry { name, builtin: true, .. } if name == "printf"));
        assert!(matches!(
            &rows[5],
            SymbolRow::Entry { name, builtin: false, symbol, .. }
                if name == "main" && *symbol == Symbol::function(TypeName::Int)
        ));
        assert_eq!(rows[6], SymbolRow::Header("main() depth 1 (1)".to_string()));
        assert!(matches!(
            &rows[7],
            SymbolRow::Entry { name, depth: 1, .. } if name == "c"
        ));
        assert_eq!(rows.len(), 8);
    }
}
