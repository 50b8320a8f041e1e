#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover the grammar rules, the rollback behavior of failed attempts, and the shape of the syntax
/// diagnostics produced for malformed input.
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    fn expr_kinds(parse: &Parse) -> Vec<NodeKind> {
        parse.statements().map(|s| s.expr().value_kind()).collect()
    }

    #[test]
    fn test_single_statement() {
        let source = "let x = 42";
        let parse = parse(source);
        assert!(parse.diagnostics().is_empty());

        let statements: Vec<_> = parse.statements().collect();
        assert_eq!(statements.len(), 1);
        let statement = statements[0];
        assert_eq!(statement.keyword().text(source), "let");
        assert_eq!(statement.identifier().name(source), "x");
        assert_eq!(statement.expr().value_kind(), NodeKind::Number);
        assert_eq!(statement.span(), Span::new(0, 10));
        assert_eq!(statement.syntax().children().len(), 3);
    }

    #[test]
    fn test_two_statements_number_then_identifier() {
        let parse = parse("let x = 42 let y = z");
        assert!(parse.diagnostics().is_empty());
        assert_eq!(expr_kinds(&parse), vec![NodeKind::Number, NodeKind::Identifier]);
    }

    #[test]
    fn test_root_covers_whole_source() {
        let source = "  let x = 1  // done\n";
        let parse = parse(source);
        assert_eq!(parse.root().kind(), NodeKind::File);
        assert_eq!(parse.root().span(), Span::new(0, source.len()));
    }

    #[test]
    fn test_empty_input() {
        let parse = parse("");
        assert_eq!(parse.statements().count(), 0);
        assert!(!parse.has_errors());
        assert_eq!(parse.root().span(), Span::empty(0));
    }

    #[test]
    fn test_only_trivia() {
        let parse = parse("  // nothing here\n\n");
        assert_eq!(parse.statements().count(), 0);
        assert!(!parse.has_errors());
    }

    #[test]
    fn test_missing_identifier_reports_at_equals() {
        let parse = parse("let = 5");
        assert_eq!(parse.statements().count(), 0);
        assert!(!parse.diagnostics().is_empty());

        let diag = &parse.diagnostics()[0];
        assert_eq!(diag.kind, DiagnosticKind::Syntax);
        assert_eq!(diag.span.start, 4);
        assert_eq!(diag.message, "expected identifier, found `=`");
    }

    #[test]
    fn test_failed_statement_leaves_cursor_at_start() {
        let lexed = lexer::lex("let = 5");
        let config = ParserConfig::default();
        let mut parser = Parser::new(&lexed.tokens, Vec::new(), &config);

        assert!(!parser.statement());
        assert_eq!(parser.cursor.index(), 0);
        assert_eq!(parser.cursor.depth(), 0);
        assert_eq!(parser.builder.open_frames(), 1);
    }

    #[test]
    fn test_failed_expr_consumes_nothing() {
        let lexed = lexer::lex("=");
        let config = ParserConfig::default();
        let mut parser = Parser::new(&lexed.tokens, Vec::new(), &config);

        assert!(!parser.expr());
        assert_eq!(parser.cursor.index(), 0);
        assert_eq!(
            parser.expected.items,
            vec![Expectation::Node(NodeKind::Number), Expectation::Node(NodeKind::Identifier)]
        );
    }

    #[test]
    fn test_missing_value_at_end_of_input() {
        let parse = parse("let x = ");
        assert_eq!(parse.statements().count(), 0);
        assert_eq!(parse.diagnostics().len(), 1);

        let diag = &parse.diagnostics()[0];
        assert_eq!(diag.span, Span::empty(8));
        assert_eq!(diag.message, "expected number or identifier, found end of input");
        assert!(diag.notes.iter().any(|n| n.contains("ended")));
    }

    #[test]
    fn test_missing_keyword() {
        let parse = parse("x = 5");
        assert_eq!(parse.statements().count(), 0);
        assert_eq!(parse.diagnostics().len(), 1);
        assert_eq!(parse.diagnostics()[0].message, "expected `let`, found identifier `x`");
        assert_eq!(parse.diagnostics()[0].hints, vec!["a statement looks like `let answer = 42`".to_string()]);
    }

    #[test]
    fn test_grammar_keyword_examples_parse_cleanly() {
        for info in keywords::KEYWORDS.iter().filter(|k| keywords::is_grammar_keyword(k.id)) {
            assert!(!info.examples.is_empty(), "`{}` has no example for hints", info.canonical);
            for example in info.examples {
                let parse = parse(example.code);
                assert!(!parse.has_errors(), "example {:?} does not parse: {:?}", example.code, parse.diagnostics());
                assert_eq!(parse.statements().count(), 1);
            }
        }
    }

    #[test]
    fn test_reserved_word_as_name_gets_hint() {
        let parse = parse("let fn = 1");
        assert_eq!(parse.diagnostics().len(), 1);
        let diag = &parse.diagnostics()[0];
        assert_eq!(diag.message, "expected identifier, found keyword `fn`");
        assert_eq!(diag.span, Span::new(4, 6));
        assert!(diag.hints.iter().any(|h| h.contains("`fn` is a reserved word")));
    }

    #[test]
    fn test_reserved_word_cannot_start_statement() {
        let parse = parse("if x = 1");
        assert_eq!(parse.statements().count(), 0);
        assert_eq!(parse.diagnostics()[0].message, "expected `let`, found keyword `if`");
    }

    #[test]
    fn test_stops_at_first_failure_and_keeps_prefix() {
        let source = "let a = 1 let b = let c = 3";
        let parse = parse(source);
        let names: Vec<_> = parse.statements().map(|s| s.identifier().name(source)).collect();
        assert_eq!(names, vec!["a"]);
        assert_eq!(parse.diagnostics().len(), 1);
        assert_eq!(parse.diagnostics()[0].message, "expected number or identifier, found keyword `let`");
        assert_eq!(parse.diagnostics()[0].span.start, 18);
    }

    #[test]
    fn test_stale_expectations_do_not_leak_into_later_errors() {
        // `z` first fails `number`, then matches `identifier`; that failure must not be reported.
        let parse = parse("let y = z +");
        assert_eq!(parse.statements().count(), 1);
        assert_eq!(parse.diagnostics().len(), 1);
        assert_eq!(parse.diagnostics()[0].message, "expected `let`, found `+`");
    }

    #[test]
    fn test_lexical_errors_do_not_stop_parsing() {
        let parse = parse("let x = 1 @ let y = 2");
        assert_eq!(parse.statements().count(), 2);
        assert_eq!(parse.diagnostics().len(), 1);
        assert_eq!(parse.diagnostics()[0].kind, DiagnosticKind::Lexical);
        assert_eq!(parse.diagnostics()[0].span, Span::new(10, 11));
    }

    #[test]
    fn test_diagnostics_are_sorted_by_offset() {
        let parse = parse("let = $");
        let offsets: Vec<_> = parse.diagnostics().iter().map(|d| d.span.start).collect();
        assert_eq!(offsets, vec![4, 6]);
        assert_eq!(parse.diagnostics()[0].kind, DiagnosticKind::Syntax);
        assert_eq!(parse.diagnostics()[1].kind, DiagnosticKind::Lexical);
    }

    #[test]
    fn test_max_diagnostics_caps_output() {
        let config = ParserConfig::default().with_max_diagnostics(2);
        let parse = parse_with("@ # $ %", &config);
        assert_eq!(parse.diagnostics().len(), 2);
        assert_eq!(parse.diagnostics()[0].span.start, 0);
        assert_eq!(parse.diagnostics()[1].span.start, 2);
    }

    #[test]
    fn test_recursion_limit_fails_rule_with_diagnostic() {
        // `file` runs at depth 0 and `statement` at depth 1, so `keyword` is the first rule over the limit.
        let config = ParserConfig::default().with_recursion_limit(2);
        let parse = parse_with("let x = 1", &config);
        assert_eq!(parse.statements().count(), 0);
        assert_eq!(parse.diagnostics().len(), 1);
        assert_eq!(parse.diagnostics()[0].message, "maximum nesting depth (2) reached in `keyword`");
    }

    #[test]
    fn test_recursion_limit_reported_once() {
        let config = ParserConfig::default().with_recursion_limit(1);
        let parse = parse_with("let x = 1 let y = 2", &config);
        assert_eq!(parse.diagnostics().len(), 1);
        assert!(parse.diagnostics()[0].message.contains("`statement`"));
    }

    #[test]
    fn test_default_recursion_limit_is_not_hit() {
        let source = "let a = b ".repeat(500);
        let parse = parse(&source);
        assert_eq!(parse.statements().count(), 500);
        assert!(!parse.has_errors());
    }

    #[test]
    fn test_progress_guard_stops_on_empty_match() {
        let lexed = lexer::lex("let x = 1");
        let config = ParserConfig::default();
        let mut parser = Parser::new(&lexed.tokens, Vec::new(), &config);

        let start = parser.cursor.mark();
        assert!(!parser.progress_guard("file", start));
        assert_eq!(parser.diagnostics.len(), 1);
        assert!(parser.diagnostics[0].message.contains("empty element"));

        parser.cursor.advance();
        assert!(parser.progress_guard("file", start));
    }

    #[test]
    fn test_parse_tokens_matches_parse() {
        let source = "let x = 1 // trailing\n";
        let lexed = lexer::lex(source);
        let from_tokens = parse_tokens_with(&lexed.tokens, lexed.diagnostics.clone(), &ParserConfig::default());
        assert_eq!(from_tokens, parse(source));
        assert_eq!(parse_tokens(&lexed.tokens).root(), parse(source).root());
    }

    #[test]
    fn test_parse_tokens_without_eof() {
        let lexed = lexer::lex("let x = 1");
        let without_eof = &lexed.tokens[..lexed.tokens.len() - 1];
        let parse = parse_tokens(without_eof);
        assert_eq!(parse.statements().count(), 1);
        assert!(!parse.has_errors());
    }

    #[test]
    fn test_parse_tokens_without_eof_reports_end_of_input() {
        let lexed = lexer::lex("let x = 1 let y =");
        let without_eof = &lexed.tokens[..lexed.tokens.len() - 1];
        let parse = parse_tokens(without_eof);
        assert_eq!(parse.statements().count(), 1);
        assert_eq!(parse.diagnostics().len(), 1);

        let diag = &parse.diagnostics()[0];
        assert_eq!(diag.message, "expected number or identifier, found end of input");
        assert_eq!(diag.span, Span::empty(17));
    }

    #[test]
    fn test_join_alternatives() {
        let items = [
            Expectation::Node(NodeKind::Number),
            Expectation::Node(NodeKind::Identifier),
            Expectation::Operator(OperatorId::Eq),
        ];
        assert_eq!(join_alternatives(&items[..1]), "number");
        assert_eq!(join_alternatives(&items[..2]), "number or identifier");
        assert_eq!(join_alternatives(&items), "number, identifier or `=`");
    }

    #[test]
    fn test_identifier_expr_tree() {
        let source = "let y = z";
        insta::assert_snapshot!(parse(source).root().dump(source), @r#"
        File@0..9
          Statement@0..9
            Keyword@0..3 "let"
            Identifier@4..5 "y"
            Expr@8..9
              Identifier@8..9 "z"
        "#);
    }

    #[test]
    fn test_into_parts() {
        let (root, diagnostics) = parse("let x =").into_parts();
        assert_eq!(root.kind(), NodeKind::File);
        assert_eq!(diagnostics.len(), 1);
    }
}
