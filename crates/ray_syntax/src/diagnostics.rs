//! Diagnostics produced while lexing and parsing.
//!
//! A [`Diagnostic`] is a recoverable problem: it is collected next to the (partial) syntax tree, never raised.
//! Diagnostics implement [`std::error::Error`] and [`miette::Diagnostic`], so callers can render them with source
//! context (see `ray::report`) or hand them to any miette report handler.

use std::fmt;

use miette::{LabeledSpan, Severity, SourceSpan};

use crate::tree::Span;

/// Which phase recorded a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A character no token rule matches.
    Lexical,
    /// A grammar rule failed at a required position.
    Syntax,
}

impl DiagnosticKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::Lexical => "ray::lexical",
            DiagnosticKind::Syntax => "ray::syntax",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A non-fatal error with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticKind::Lexical, message, span)
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticKind::Syntax, message, span)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from((span.start, span.len()))
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() && self.notes.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .hints
            .iter()
            .cloned()
            .chain(self.notes.iter().map(|note| format!("note: {note}")))
            .collect();
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Order diagnostics by source offset (stable for equal offsets) and cap them at `limit`.
pub(crate) fn finalize(diagnostics: &mut Vec<Diagnostic>, limit: usize) {
    diagnostics.sort_by_key(|d| d.span.start);
    diagnostics.truncate(limit);
}
