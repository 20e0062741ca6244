//! Lexer (tokenizer) for the C subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer never fails: runs of characters it cannot classify become
//! [`TokenKind::InvalidIdentifier`] tokens and are rejected later by the grammar.
//!
//! # Classification
//!
//! Source text is split at separator characters (whitespace and ASCII
//! punctuation). A maximal run of non-separator characters is classified as,
//! in order: keyword, number, identifier, invalid identifier. A separator is
//! classified on its own: operators and delimiters become tokens, everything
//! else only terminates the current run.

use super::ast::SourceLocation;
use std::fmt;

/// Reserved words. Only the type keywords reach the grammar.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "do", "break", "continue", "int", "double", "float", "return",
    "char", "case", "long", "short", "typedef", "switch", "unsigned", "void", "static",
    "struct", "sizeof", "volatile", "enum", "const", "union", "extern", "bool",
];

const OPERATOR_CHARS: &str = "+-*/><|&=";
const DELIMITER_CHARS: &str = "(){};,";

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    InvalidIdentifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::InvalidIdentifier => "INVALID_IDENTIFIER",
        };
        f.pad(name)
    }
}

/// A classified slice of source text.
///
/// Tokens compare equal when kind and text match; the location is only used
/// for diagnostics.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    /// True if this token is the given operator or delimiter
    pub fn is_punct(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Delimiter) && self.text == text
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Whitespace or ASCII punctuation; `_` belongs to identifiers.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || (ch.is_ascii_punctuation() && ch != '_')
}

pub fn is_keyword(run: &str) -> bool {
    KEYWORDS.contains(&run)
}

/// A run is numeric if it parses fully as an integer or a floating-point
/// value. This includes `inf`, `nan` and `infinity` in any case.
pub fn is_number(run: &str) -> bool {
    if run.is_empty() {
        return false;
    }
    run.chars().all(|c| c.is_ascii_digit()) || run.parse::<f64>().is_ok()
}

pub fn is_valid_identifier(run: &str) -> bool {
    match run.chars().next() {
        Some(first) => !first.is_ascii_digit() && !run.chars().any(is_separator),
        None => false,
    }
}

fn classify_run(run: &str) -> TokenKind {
    if is_keyword(run) {
        TokenKind::Keyword
    } else if is_number(run) {
        TokenKind::Number
    } else if is_valid_identifier(run) {
        TokenKind::Identifier
    } else {
        TokenKind::InvalidIdentifier
    }
}

/// Lexer for the C subset
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let loc = self.current_location();

            if !is_separator(ch) {
                let run = self.scan_run();
                tokens.push(Token::new(classify_run(&run), run, loc));
                continue;
            }

            self.advance();
            if OPERATOR_CHARS.contains(ch) {
                tokens.push(Token::new(TokenKind::Operator, ch, loc));
            } else if DELIMITER_CHARS.contains(ch) {
                tokens.push(Token::new(TokenKind::Delimiter, ch, loc));
            }
            // Any other separator just ends the run
        }

        tokens
    }

    /// Consume a maximal run of non-separator characters.
    ///
    /// A `.` between digits stays inside the run so that `2.5` is one literal.
    fn scan_run(&mut self) -> String {
        let mut run = String::new();

        while let Some(ch) = self.peek() {
            if !is_separator(ch) {
                run.push(ch);
                self.advance();
            } else if ch == '.'
                && !run.is_empty()
                && run.chars().all(|c| c.is_ascii_digit())
                && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit())
            {
                run.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        run
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` in one call
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
