//! Lexer for the Ray language
//!
//! Handles tokenization including:
//! - Reserved words (`let`, plus the reserved `fn`/`if`/`else`)
//! - Identifiers and number literals
//! - Single-character operators (`=`, `+`, `-`, `*`, `/`)
//! - Trivia: whitespace and `//` line comments are skipped and produce no token
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::iter::FusedIterator;
use std::ops::Range;

use crate::diagnostics::Diagnostic;
use crate::tree::Span;
use ray_core::lang::operators;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lazy lexer over Ray source code.
///
/// The lexer is an [`Iterator`] of [`Token`]s: each call to `next` scans exactly one token, and the sequence ends
/// with a single [`TokenKind::Eof`]. It is `Clone`, so a consumer can fork it to look ahead, and
/// [`Lexer::reset`] restarts it from the beginning of its range.
///
/// ## Notes
/// - Unrecognized characters become [`TokenKind::Error`] tokens; lexing continues after them.
/// - Spans are absolute byte offsets into `source`, also when lexing a sub-range.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    end: usize,
    pos: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self::with_range(source, 0..source.len())
    }

    /// Create a lexer that only scans `range` of `source`.
    ///
    /// ## Notes
    /// - The range is clamped to the source and widened to the nearest char boundaries, so any range is
    ///   accepted.
    pub fn with_range(source: &'src str, range: Range<usize>) -> Self {
        let end = ceil_char_boundary(source, range.end);
        let start = floor_char_boundary(source, range.start.min(end));
        Self {
            source,
            start,
            end,
            pos: start,
            finished: false,
        }
    }

    /// Restart lexing from the beginning of the range.
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.finished = false;
    }

    /// Byte offset of the next character to scan.
    pub fn offset(&self) -> usize {
        self.pos
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &'src str {
        &self.source[self.pos..self.end]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace and `//` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.advance_while(char::is_whitespace),
                Some('/') if self.rest().starts_with("//") => self.advance_while(|c| c != '\n'),
                _ => break,
            }
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token::new(kind, &self.source[start..self.pos], Span::new(start, self.pos))
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }

        self.skip_trivia();
        let start = self.pos;

        let Some(c) = self.advance() else {
            self.finished = true;
            return Some(self.token(TokenKind::Eof, start));
        };

        let kind = match c {
            '0'..='9' => {
                self.advance_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            _ if is_ident_start(c) => {
                self.advance_while(is_ident_continue);
                // Reserved words are classified here, not in the parser.
                match keyword_id(&self.source[start..self.pos]) {
                    Some(id) => TokenKind::Keyword(id),
                    None => TokenKind::Ident,
                }
            }
            _ => match operators::from_char(c) {
                Some(id) => TokenKind::Operator(id),
                None => TokenKind::Error,
            },
        };

        Some(self.token(kind, start))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.scan_token()
    }
}

impl FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(source: &str, mut index: usize) -> usize {
    index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Output of [`lex`]: the token sequence for the grammar plus lexical diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed<'src> {
    /// Tokens without [`TokenKind::Error`] entries, terminated by exactly one [`TokenKind::Eof`].
    pub tokens: Vec<Token<'src>>,
    /// One lexical diagnostic per error token, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lex a whole source string.
///
/// Error tokens are turned into lexical diagnostics and left out of the returned token sequence, so the grammar
/// sees only well-formed tokens.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed<'_> {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    for token in Lexer::new(source) {
        if token.kind == TokenKind::Error {
            tracing::debug!(offset = token.span.start, text = token.text, "unexpected character");
            diagnostics.push(
                Diagnostic::lexical(format!("unexpected character `{}`", token.text), token.span)
                    .with_hint("identifiers, numbers, `let`, and `=` are the only tokens Ray accepts"),
            );
        } else {
            tokens.push(token);
        }
    }

    tracing::trace!(token_count = tokens.len(), error_count = diagnostics.len(), "lexed");
    Lexed { tokens, diagnostics }
}

// ============================================================================
// TESTS
// ============================================================================
