//! Backtrackable cursor over a token sequence.
//!
//! The cursor is the only thing grammar rules use to read tokens. It supports arbitrary lookahead
//! ([`TokenCursor::peek`]), and [`TokenCursor::mark`]/[`TokenCursor::reset`] for backtracking: a rule takes a
//! mark before an attempt and resets to it when the attempt fails.
//!
//! ## Notes
//! - The cursor never moves past the end-of-input token, so `Eof` is never consumed twice.
//! - Rule nesting depth lives here too ([`Position::depth`]) so that a reset restores it along with the index.

use crate::lexer::{Token, TokenKind};
use crate::tree::Span;

/// A saved cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the current token.
    pub index: usize,
    /// Rule nesting depth.
    pub depth: usize,
}

/// Cursor over a token sequence.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t, 'src> {
    tokens: &'t [Token<'src>],
    index: usize,
    depth: usize,
}

impl<'t, 'src> TokenCursor<'t, 'src> {
    /// Create a cursor at the first token.
    ///
    /// ## Notes
    /// - `tokens` is expected to end with [`TokenKind::Eof`] (as produced by `lexer::lex`); if it does not, reads
    ///   past the end yield a synthetic `Eof` with an empty span where the last token ends.
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    /// Token at an absolute index. Past the end of the slice this is end of input.
    pub fn get(&self, index: usize) -> Token<'src> {
        if let Some(token) = self.tokens.get(index) {
            return *token;
        }
        let end = self.tokens.last().map_or(0, |token| token.span.end);
        Token::new(TokenKind::Eof, "", Span::empty(end))
    }

    /// Token `offset` positions ahead of the current one.
    pub fn peek(&self, offset: usize) -> Token<'src> {
        self.get(self.index.saturating_add(offset))
    }

    /// The current token.
    pub fn current(&self) -> Token<'src> {
        self.peek(0)
    }

    /// Return `true` if the current token is end of input.
    pub fn at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof || self.index >= self.tokens.len()
    }

    /// Consume the current token and return it. At end of input, returns `Eof` without moving.
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.current();
        if !self.at_end() {
            self.index += 1;
        }
        token
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn descend(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Save the current state.
    pub fn mark(&self) -> Position {
        Position {
            index: self.index,
            depth: self.depth,
        }
    }

    /// Restore a state saved with [`TokenCursor::mark`].
    pub fn reset(&mut self, position: Position) {
        self.index = position.index;
        self.depth = position.depth;
    }

    /// Return `true` if tokens were consumed since `position`.
    pub fn advanced_since(&self, position: Position) -> bool {
        self.index > position.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    #[test]
    fn test_peek_and_advance() {
        let lexed = lexer::lex("let x");
        let mut cursor = TokenCursor::new(&lexed.tokens);
        assert_eq!(cursor.peek(1).text, "x");
        assert_eq!(cursor.peek(5).kind, TokenKind::Eof);
        assert_eq!(cursor.advance().text, "let");
        assert_eq!(cursor.advance().text, "x");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_eof_is_never_consumed() {
        let lexed = lexer::lex("");
        let mut cursor = TokenCursor::new(&lexed.tokens);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_mark_and_reset() {
        let lexed = lexer::lex("let x = 1");
        let mut cursor = TokenCursor::new(&lexed.tokens);
        cursor.advance();
        let mark = cursor.mark();
        cursor.descend();
        cursor.advance();
        cursor.advance();
        assert!(cursor.advanced_since(mark));
        cursor.reset(mark);
        assert_eq!(cursor.mark(), mark);
        assert_eq!(cursor.current().text, "x");
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn test_empty_slice_yields_synthetic_eof() {
        let mut cursor = TokenCursor::new(&[]);
        assert!(cursor.at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.current().span, Span::empty(0));
    }

    #[test]
    fn test_read_past_unterminated_stream_is_eof_at_last_end() {
        let lexed = lexer::lex("let x =");
        let tokens = &lexed.tokens[..lexed.tokens.len() - 1];
        let mut cursor = TokenCursor::new(tokens);
        for _ in 0..3 {
            cursor.advance();
        }
        assert!(cursor.at_end());
        let token = cursor.current();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, Span::empty(7));
        assert_eq!(cursor.peek(4).span, Span::empty(7));
    }
}
