//! Ray language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`) and look up spellings and metadata via registry
//! tables, instead of comparing strings across the lexer and parser.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use ray_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

pub mod keywords;
pub mod operators;
pub mod registry;
