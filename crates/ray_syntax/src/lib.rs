//! Syntax frontend for the Ray language: lexer, token cursor, grammar rules, tree builder, syntax tree, diagnostics.
//!
//! The grammar is deliberately tiny:
//!
//! ```text
//! file      := statement*
//! statement := KEYWORD IDENTIFIER "=" expr
//! expr      := NUMBER | IDENTIFIER
//! ```
//!
//! ## Notes
//! - This crate is “syntax-only”: no name resolution, no type checking, no incremental re-parsing.
//! - Parsing never panics and never fails outright on malformed input; problems are collected as
//!   [`diagnostics::Diagnostic`]s next to a partial tree.
//! - Vocabulary identity (keywords/operators) comes from `ray_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ray_syntax::parser;
//!
//! let parse = parser::parse("let x = 42");
//! assert_eq!(parse.statements().count(), 1);
//! assert!(!parse.has_errors());
//!
//! let broken = parser::parse("let = 42");
//! assert_eq!(broken.diagnostics()[0].message, "expected identifier, found `=`");
//! ```

pub mod builder;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod tree;
pub mod visitor;

pub use config::ParserConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use parser::Parse;
pub use tree::{NodeKind, Span, SyntaxNode};
pub use visitor::{Visitor, walk};
