//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to give diagnostics a single way to
//! describe a token.

use crate::lexer::{Token, TokenKind};
use ray_core::lang::keywords::{self, KeywordId};
use ray_core::lang::operators::{self, OperatorId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error)
    }
}

impl Token<'_> {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Human-readable description for “found …” diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(id)),
            TokenKind::Operator(id) => format!("`{}`", operators::as_str(id)),
            TokenKind::Ident => format!("identifier `{}`", self.text),
            TokenKind::Number => format!("number `{}`", self.text),
            TokenKind::Error => format!("`{}`", self.text),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
