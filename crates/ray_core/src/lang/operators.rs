//! Operator vocabulary.
//!
//! The lexer recognises every operator listed in [`OPERATORS`]; the grammar currently only consumes
//! [`OperatorId::Eq`] (the binding `=` of a `let` statement). The arithmetic operators are lexed so that
//! highlighting and diagnostics can name them instead of reporting bad characters.
//!
//! ## Examples
//! ```rust
//! use ray_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_char('='), Some(OperatorId::Eq));
//! assert_eq!(operators::as_str(OperatorId::Slash), "/");
//! ```

use super::registry::Stability;

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Binding
    Eq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
}

/// Metadata for an operator.
///
/// ## Notes
/// - Every operator is a single character; `symbol` is that character.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub symbol: char,
    pub canonical: &'static str,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Eq, '=', "=", Stability::Stable),
    op(OperatorId::Plus, '+', "+", Stability::Reserved),
    op(OperatorId::Minus, '-', "-", Stability::Reserved),
    op(OperatorId::Star, '*', "*", Stability::Reserved),
    op(OperatorId::Slash, '/', "/", Stability::Reserved),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by the operator's character.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.symbol == c).map(|o| o.id)
}

/// Lookup by spelling.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, symbol: char, canonical: &'static str, stability: Stability) -> OperatorInfo {
    OperatorInfo {
        id,
        symbol,
        canonical,
        stability,
    }
}
