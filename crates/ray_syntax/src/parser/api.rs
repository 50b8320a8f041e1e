/// Lex and parse a source string with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing. It never fails: malformed input yields a partial tree plus
/// diagnostics.
pub fn parse(source: &str) -> Parse {
    parse_with(source, &ParserConfig::default())
}

/// Lex and parse a source string.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with(source: &str, config: &ParserConfig) -> Parse {
    let lexed = lexer::lex(source);
    Parser::new(&lexed.tokens, lexed.diagnostics, config).run(source.len())
}

/// Parse an already-lexed token stream with the default [`ParserConfig`].
///
/// ## Parameters
/// - `tokens`: Token stream produced by `ray_syntax::lexer::lex`.
pub fn parse_tokens(tokens: &[Token<'_>]) -> Parse {
    parse_tokens_with(tokens, Vec::new(), &ParserConfig::default())
}

/// Parse an already-lexed token stream.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `ray_syntax::lexer::lex`.
/// - `diagnostics`: Diagnostics recorded while lexing; they are merged with syntax diagnostics in offset order.
///
/// ## Notes
/// - The root range ends where the last token ends. For a stream from `lex` that is the `Eof` token, which sits at
///   the end of the source.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens_with(tokens: &[Token<'_>], diagnostics: Vec<Diagnostic>, config: &ParserConfig) -> Parse {
    let source_len = tokens.last().map_or(0, |token| token.span.end);
    Parser::new(tokens, diagnostics, config).run(source_len)
}
