//! Parser for the Ray language
//!
//! Drives the grammar rules over a [`TokenCursor`] and builds the syntax tree with a [`TreeBuilder`]:
//!
//! ```text
//! file      := statement*
//! statement := KEYWORD IDENTIFIER "=" expr
//! expr      := NUMBER | IDENTIFIER
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use ray_syntax::parser;
//! use ray_syntax::tree::NodeKind;
//!
//! let parse = parser::parse("let x = 42 let y = z");
//! let kinds: Vec<_> = parse.statements().map(|s| s.expr().value_kind()).collect();
//! assert_eq!(kinds, vec![NodeKind::Number, NodeKind::Identifier]);
//! assert!(parse.diagnostics().is_empty());
//! ```

use std::fmt;

use crate::builder::{Marker, TreeBuilder};
use crate::config::ParserConfig;
use crate::cursor::{Position, TokenCursor};
use crate::diagnostics::{self, Diagnostic};
use crate::lexer::{self, Token, TokenKind};
use crate::tree::{File, NodeKind, Span, Statement, SyntaxNode};
use ray_core::lang::keywords::{self, KeywordId};
use ray_core::lang::operators::{self, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping the
// grammar rules apart from the bookkeeping around them.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/rules.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
