//! Canonical language vocabulary for the Ray syntax frontend.
//!
//! This crate is dependency-free. It contains the closed, compile-time registries of reserved words and operators
//! that the lexer classifies tokens against and that tooling (highlighters, diagnostics) can share.
//!
//! ## Notes
//!
//! - No IO, no global mutable state, no syntax-tree types.
//! - New vocabulary is added by extending the `const` tables in [`lang`]; nothing is registered at runtime.

pub mod lang;
