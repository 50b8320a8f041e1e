//! Diagnostic rendering with source context.
//!
//! Two formats:
//! - [`render`] / [`render_all`]: miette's graphical report (source excerpt, label, help), without colors so the
//!   output is stable in logs and snapshots.
//! - [`summary`] / [`summary_line`]: one `name:line:column: kind: message` line per diagnostic.

use std::fmt;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use ray_syntax::{Diagnostic, Parse};

/// 1-based line and column of a byte offset. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolve `offset` in `source` to a line and column.
///
/// Offsets past the end resolve to the end of the source; offsets inside a multi-byte character resolve to that
/// character.
pub fn location(source: &str, offset: usize) -> Location {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let column = source[line_start..]
        .char_indices()
        .take_while(|(i, _)| line_start + i < offset)
        .count()
        + 1;
    Location { line, column }
}

/// Render one diagnostic against `source` with miette's graphical handler.
///
/// ## Parameters
/// - `name`: Display name for the source (usually a file path).
/// - `source`: The text the diagnostic's span points into.
///
/// ## Notes
/// - If the span does not fit `source` (e.g. the diagnostic came from a different text), the graphical handler
///   fails and the [`summary_line`] form is returned instead.
pub fn render(name: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let report = Report::new(diagnostic.clone()).with_source_code(NamedSource::new(name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(100);

    let mut out = String::new();
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out,
        Err(fmt::Error) => {
            tracing::debug!(name, span = %diagnostic.span, "graphical rendering failed; using summary line");
            summary_line(name, source, diagnostic)
        }
    }
}

/// Render every diagnostic of `parse`, in offset order, separated by blank lines.
pub fn render_all(name: &str, source: &str, parse: &Parse) -> String {
    parse
        .diagnostics()
        .iter()
        .map(|diagnostic| render(name, source, diagnostic))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name:line:column: kind: message` for one diagnostic, newline-terminated.
pub fn summary_line(name: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let at = location(source, diagnostic.span.start);
    format!("{name}:{at}: {}: {}\n", diagnostic.kind, diagnostic.message)
}

/// One line per diagnostic: `name:line:column: kind: message`.
pub fn summary(name: &str, source: &str, parse: &Parse) -> String {
    parse
        .diagnostics()
        .iter()
        .map(|diagnostic| summary_line(name, source, diagnostic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_first_line() {
        assert_eq!(location("let x = 1", 4), Location { line: 1, column: 5 });
        assert_eq!(location("let x = 1", 0), Location { line: 1, column: 1 });
    }

    #[test]
    fn test_location_after_newline() {
        let source = "let a = 1\nlet = 2";
        assert_eq!(location(source, 14), Location { line: 2, column: 5 });
        assert_eq!(location(source, 10), Location { line: 2, column: 1 });
    }

    #[test]
    fn test_location_counts_characters() {
        // `π` is two bytes; the `@` after `π ` is the third character.
        assert_eq!(location("π @", 3), Location { line: 1, column: 3 });
    }

    #[test]
    fn test_location_clamps_past_end() {
        assert_eq!(location("ab", 99), Location { line: 1, column: 3 });
    }

    #[test]
    fn test_render_includes_message_code_and_name() {
        let source = "let = 5";
        let parse = ray_syntax::parser::parse(source);
        let rendered = render("demo.ray", source, &parse.diagnostics()[0]);
        assert!(rendered.contains("ray::syntax"), "{rendered}");
        assert!(rendered.contains("expected identifier, found `=`"), "{rendered}");
        assert!(rendered.contains("demo.ray"), "{rendered}");
        assert!(rendered.contains("let = 5"), "{rendered}");
    }

    #[test]
    fn test_render_against_mismatched_source_falls_back_to_summary_line() {
        let parse = ray_syntax::parser::parse("let x = 1 let = 2");
        let diagnostic = &parse.diagnostics()[0];
        let rendered = render("short.ray", "let", diagnostic);
        assert!(rendered.contains("expected identifier, found `=`"), "{rendered}");
        assert!(!rendered.is_empty());
    }

    #[test]
    fn test_summary_line_for_single_diagnostic() {
        let parse = ray_syntax::parser::parse("let = 5");
        assert_eq!(
            summary_line("demo.ray", "let = 5", &parse.diagnostics()[0]),
            "demo.ray:1:5: syntax error: expected identifier, found `=`\n"
        );
    }

    #[test]
    fn test_render_all_empty_for_clean_parse() {
        let parse = ray_syntax::parser::parse("let x = 1");
        assert_eq!(render_all("clean.ray", "let x = 1", &parse), "");
    }

    #[test]
    fn test_summary_lines() {
        let source = "let x = 1 @\nlet = 2";
        let parse = ray_syntax::parser::parse(source);
        assert_eq!(
            summary("demo.ray", source, &parse),
            "demo.ray:1:11: lexical error: unexpected character `@`\n\
             demo.ray:2:5: syntax error: expected identifier, found `=`\n"
        );
    }
}
