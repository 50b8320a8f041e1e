//! Token types for the Ray lexer.
//!
//! Vocabulary tokens carry **registry-backed IDs**:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//!
//! ## Notes
//! - Tokens borrow their text from the source; they are `Copy` and cheap to pass around.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::tree::Span;
use ray_core::lang::keywords::{self, KeywordId};
use ray_core::lang::operators::OperatorId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,

    // ========== Special ==========
    /// A character no token rule matches. Lexing continues after it.
    Error,
    /// End of input; always the last token, exactly once.
    Eof,
}

/// A token with its kind, source text, and span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
