#![forbid(unsafe_code)]
//! Ray: a syntax frontend for the minimal `let NAME = VALUE` language.
//!
//! This crate is the entry point most callers want. It reads source text from a string, any
//! [`std::io::Read`], or a file, runs the lexer and the backtracking parser from [`ray_syntax`], and hands
//! back a [`Parse`]: the syntax tree plus every diagnostic recorded along the way.
//!
//! ## Error policy
//!
//! - **Malformed source** is never an error here. Bad characters and malformed statements become
//!   [`Diagnostic`]s next to a partial tree; [`parse`] on a `&str` cannot fail.
//! - **Unreadable input** (I/O failure, invalid UTF-8) is a [`RayError`].
//!
//! ## Examples
//! ```rust
//! let parse = ray::parse("let x = 42 let y = x");
//! assert_eq!(parse.statements().count(), 2);
//! assert!(!parse.has_errors());
//!
//! let broken = ray::parse("let x = ");
//! let rendered = ray::report::summary("input.ray", "let x = ", &broken);
//! assert_eq!(rendered, "input.ray:1:9: syntax error: expected number or identifier, found end of input\n");
//! ```

pub mod error;
pub mod report;

use std::io::Read;
use std::path::Path;

pub use error::RayError;
pub use ray_core::lang;
pub use ray_syntax::tree::{self, Expr, ExprValue, File, Identifier, Keyword, Number, Statement};
pub use ray_syntax::{
    Diagnostic, DiagnosticKind, NodeKind, Parse, ParserConfig, Span, SyntaxNode, Visitor, lexer, parser, walk,
};

/// Parse source text with the default configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parse {
    parser::parse(source)
}

/// Parse source text with an explicit [`ParserConfig`].
pub fn parse_with(source: &str, config: &ParserConfig) -> Parse {
    parser::parse_with(source, config)
}

/// Read all of `reader` and parse it.
///
/// ## Errors
/// - [`RayError::Io`] if reading fails.
/// - [`RayError::InvalidUtf8`] if the bytes are not UTF-8.
pub fn parse_reader(mut reader: impl Read) -> Result<Parse, RayError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let source = String::from_utf8(bytes)?;
    Ok(parse(&source))
}

/// Read the file at `path` and parse it.
///
/// ## Errors
/// Same as [`parse_reader`].
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Parse, RayError> {
    let source = String::from_utf8(std::fs::read(path.as_ref())?)?;
    tracing::debug!(len = source.len(), "read source file");
    Ok(parse(&source))
}
