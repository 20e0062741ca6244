//! Main TUI application state and logic

use crate::analyzer::{SemanticAnalyzer, SemanticError};
use crate::parser::ast::ParseNode;
use crate::parser::lexer::{Lexer, Token};
use crate::parser::parse::{ParseError, Parser};
use crate::ui::panes::{self, SymbolRow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const PAGE_SIZE: usize = 10;

/// Everything one front-end run produced
#[derive(Debug, Clone)]
pub struct Session {
    pub source: String,
    pub tokens: Vec<Token>,
    pub tree: ParseNode,
    pub analyzer: SemanticAnalyzer,

    /// First semantic error, if analysis failed
    pub error: Option<SemanticError>,
}

impl Session {
    /// Tokenize, parse and analyze `source`.
    ///
    /// A parse error aborts; a semantic error is kept in the session so the
    /// partial scopes can still be inspected.
    pub fn analyze(source: String) -> Result<Self, ParseError> {
        let tokens = Lexer::new(&source).tokenize();
        let tree = Parser::new(tokens.clone()).parse_program()?;

        let mut analyzer = SemanticAnalyzer::new();
        let error = analyzer.analyze(&tree).err();

        Ok(Session {
            source,
            tokens,
            tree,
            analyzer,
            error,
        })
    }

    /// Number of top-level declarations in the parse tree
    pub fn declaration_count(&self) -> usize {
        match &self.tree {
            ParseNode::Program { declarations } => declarations.len(),
            _ => 0,
        }
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Tree,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (left to right)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Tokens,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Symbols,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Symbols => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Scope pane rows, computed once from the session
    symbol_rows: Vec<SymbolRow>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub symbols_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for an analyzed session
    pub fn new(session: Session) -> Self {
        let symbol_rows =
            panes::symbol_rows(session.analyzer.globals(), session.analyzer.closed_scopes());
        let status_message = format!(
            "{} tokens, {} top-level declarations",
            session.tokens.len(),
            session.declaration_count()
        );

        App {
            session,
            symbol_rows,
            focused_pane: FocusedPane::Tokens,
            tokens_scroll: 0,
            tree_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Three panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(main_chunks[0]);

        panes::render_tokens_pane(
            frame,
            columns[0],
            &self.session.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_tree_pane(
            frame,
            columns[1],
            &self.session.tree,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_symbols_pane(
            frame,
            columns[2],
            &self.symbol_rows,
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.error.as_ref(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Symbols => &mut self.symbols_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against the content height on the next render
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_SIZE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_SIZE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_session_keeps_semantic_error() {
        let session = Session::analyze("int x; x();".to_string()).unwrap();
        assert!(matches!(session.error, Some(SemanticError::NotAFunction { .. })));
        assert_eq!(session.declaration_count(), 2);
        assert_eq!(session.tokens.len(), 7);
    }

    #[test]
    fn test_session_rejects_parse_errors() {
        assert!(Session::analyze("int = 5;".to_string()).is_err());
    }

    #[test]
    fn test_focus_and_scroll_keys() {
        let session = Session::analyze("int main() { }".to_string()).unwrap();
        let mut app = App::new(session);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.tokens_scroll, 2);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.tree_scroll, PAGE_SIZE);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.tree_scroll, PAGE_SIZE - 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.tree_scroll, 0);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Symbols);

        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_clamps_scroll_and_shows_panes() {
        let session = Session::analyze("int main() { int x = 5; printf(x); }".to_string()).unwrap();
        let mut app = App::new(session);
        app.tokens_scroll = usize::MAX;

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Tokens (16)"));
        assert!(text.contains("Parse Tree"));
        assert!(text.contains("Scopes"));
        assert!(text.contains("OK"));
        // 16 tokens fit in the pane, so the offset snaps back to the top
        assert_eq!(app.tokens_scroll, 0);
    }

    #[test]
    fn test_render_shows_semantic_error() {
        let session = Session::analyze("int x; int x;".to_string()).unwrap();
        let mut app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(160, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Symbol 'x' already declared"));
    }
}
