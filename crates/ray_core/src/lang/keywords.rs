//! Define the reserved keyword vocabulary for the Ray language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, grammar usage, and example snippets.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Let` and `lets` are identifiers.
//! - Every entry is lexed as a keyword token, even when no production accepts it yet (see [`Stability::Reserved`]).
//!   This keeps future keywords from silently parsing as identifiers.
//!
//! ## Examples
//! ```rust
//! use ray_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::from_str("Let"), None);
//! assert!(keywords::is_grammar_keyword(KeywordId::Let));
//! assert!(!keywords::is_grammar_keyword(KeywordId::Fn));
//! ```

use super::registry::{Example, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Bindings
    Let,

    // Reserved for future productions
    Fn,
    If,
    Else,
}

/// Where a keyword may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    /// Introduces a statement (`let x = 1`).
    Statement,
    /// Reserved spelling with no production yet.
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub usage: KeywordUsage,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Let,
        canonical: "let",
        usage: KeywordUsage::Statement,
        stability: Stability::Stable,
        examples: &[Example {
            code: "let answer = 42",
        }],
    },
    reserved(KeywordId::Fn, "fn"),
    reserved(KeywordId::If, "if"),
    reserved(KeywordId::Else, "else"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Usage hint for `id`.
pub fn usage(id: KeywordId) -> KeywordUsage {
    info_for(id).usage
}

/// Return `true` if a grammar production currently accepts this keyword.
pub fn is_grammar_keyword(id: KeywordId) -> bool {
    usage(id) != KeywordUsage::Reserved
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn reserved(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        usage: KeywordUsage::Reserved,
        stability: Stability::Reserved,
        examples: &[],
    }
}
