//! Hard failures: input that cannot be turned into source text at all.
//!
//! Everything wrong *inside* the text (bad characters, malformed statements) is a
//! [`ray_syntax::Diagnostic`] on the [`crate::Parse`], never a `RayError`.

use thiserror::Error;

/// Errors from the reader and file entry points.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum RayError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(ray::io))]
    Io(#[from] std::io::Error),

    #[error("source is not valid UTF-8 (invalid byte at offset {offset})")]
    #[diagnostic(code(ray::invalid_utf8), help("Ray source must be UTF-8 encoded"))]
    InvalidUtf8 { offset: usize },
}

impl From<std::string::FromUtf8Error> for RayError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RayError::InvalidUtf8 {
            offset: err.utf8_error().valid_up_to(),
        }
    }
}
