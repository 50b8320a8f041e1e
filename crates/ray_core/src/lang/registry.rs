//! Shareable metadata for `ray_core::lang` registries.
//!
//! The types here are lightweight and `Copy` so that registries can live in `const` tables.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the lexer/parser.

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - `Reserved` items are lexed specially (e.g. as keywords) but no grammar production accepts them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
}

/// A canonical source snippet using a vocabulary item; diagnostics quote it in hints.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
}
