/// Grammar rules.
///
/// One method per production. Every rule returns `true` on success with the cursor advanced, or `false` with the
/// cursor and tree exactly as they were on entry.
///
/// ```text
/// file      := statement*
/// statement := KEYWORD IDENTIFIER "=" expr
/// expr      := NUMBER | IDENTIFIER
/// ```
impl<'t, 'src, 'c> Parser<'t, 'src, 'c> {
    // ========================================================================
    // Productions
    // ========================================================================

    /// `file := statement*`
    ///
    /// ## Notes
    /// - Always succeeds. The loop stops at end of input, at the first failed statement (reported as a syntax
    ///   diagnostic), or when a statement matches without consuming anything.
    fn file(&mut self) -> bool {
        self.rule("file", |p| {
            while !p.cursor.at_end() {
                let start = p.cursor.mark();
                if !p.statement() {
                    p.report_expected();
                    break;
                }
                // Failures inside a matched statement (e.g. `number` before `identifier`) are not errors.
                p.expected = Expected::default();
                if !p.progress_guard("file", start) {
                    break;
                }
            }
            true
        })
    }

    /// `statement := KEYWORD IDENTIFIER "=" expr`
    fn statement(&mut self) -> bool {
        self.rule("statement", |p| {
            let checkpoint = p.open(NodeKind::Statement);
            let matched = p.keyword() && p.identifier() && p.operator(OperatorId::Eq) && p.expr();
            p.commit(checkpoint, matched)
        })
    }

    /// `expr := NUMBER | IDENTIFIER`
    fn expr(&mut self) -> bool {
        self.rule("expr", |p| {
            let checkpoint = p.open(NodeKind::Expr);
            let matched = p.number() || p.identifier();
            p.commit(checkpoint, matched)
        })
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    fn identifier(&mut self) -> bool {
        self.rule("identifier", |p| {
            p.leaf(NodeKind::Identifier, Expectation::Node(NodeKind::Identifier), |kind| {
                kind == TokenKind::Ident
            })
        })
    }

    /// Only `let` starts a statement; the other reserved words are lexed as keywords but rejected here.
    fn keyword(&mut self) -> bool {
        self.rule("keyword", |p| {
            p.leaf(NodeKind::Keyword, Expectation::Keyword(KeywordId::Let), |kind| {
                kind.is_keyword(KeywordId::Let)
            })
        })
    }

    fn number(&mut self) -> bool {
        self.rule("number", |p| {
            p.leaf(NodeKind::Number, Expectation::Node(NodeKind::Number), |kind| {
                kind == TokenKind::Number
            })
        })
    }
}
