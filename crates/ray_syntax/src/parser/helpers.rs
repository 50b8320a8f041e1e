/// Rule bookkeeping: guards, checkpoints, terminals, and failure reporting.
///
/// This chunk contains the primitives every grammar rule is built from:
/// - Entering a rule under the recursion guard (`rule`)
/// - Opening a node and committing or rolling it back together with the cursor (`open`, `commit`)
/// - Matching terminals (`leaf`, `operator`)
/// - Tracking the farthest failure and turning it into a diagnostic (`expect`, `report_expected`)
impl<'t, 'src, 'c> Parser<'t, 'src, 'c> {
    // ========================================================================
    // Guards
    // ========================================================================

    /// Run `body` as rule `name`, one nesting level deeper.
    ///
    /// Fails without running `body` when the recursion limit is reached.
    fn rule(&mut self, name: &'static str, body: impl FnOnce(&mut Self) -> bool) -> bool {
        if !self.recursion_guard(name) {
            return false;
        }
        self.cursor.descend();
        let matched = body(self);
        self.cursor.ascend();
        if !matched {
            tracing::trace!(rule = name, index = self.cursor.index(), "rule did not match");
        }
        matched
    }

    fn recursion_guard(&mut self, rule: &'static str) -> bool {
        let limit = self.config.recursion_limit;
        if self.cursor.depth() < limit {
            return true;
        }
        if !self.recursion_reported {
            self.recursion_reported = true;
            tracing::warn!(rule, limit, "recursion limit reached");
            self.diagnostics.push(
                Diagnostic::syntax(
                    format!("maximum nesting depth ({limit}) reached in `{rule}`"),
                    self.cursor.current().span,
                )
                .with_note("the rule failed instead of recursing further"),
            );
        }
        false
    }

    /// Return `true` if a repetition consumed input since `start`; otherwise record a diagnostic.
    ///
    /// A repeated rule that matches without consuming would match again forever at the same position.
    fn progress_guard(&mut self, rule: &'static str, start: Position) -> bool {
        if self.cursor.advanced_since(start) {
            return true;
        }
        tracing::warn!(rule, index = start.index, "empty element parsed");
        self.diagnostics.push(Diagnostic::syntax(
            format!("`{rule}` matched an empty element"),
            self.cursor.current().span,
        ));
        false
    }

    // ========================================================================
    // Checkpoints
    // ========================================================================

    /// Save the cursor and open a node of `kind`.
    fn open(&mut self, kind: NodeKind) -> Checkpoint {
        let position = self.cursor.mark();
        let marker = self.builder.open(kind, self.cursor.current().span.start);
        Checkpoint { position, marker }
    }

    /// Close the node on success; restore cursor and tree on failure. Returns `matched`.
    fn commit(&mut self, checkpoint: Checkpoint, matched: bool) -> bool {
        if matched {
            self.builder.close(checkpoint.marker);
        } else {
            self.rollback(checkpoint);
        }
        matched
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        tracing::trace!(
            from = self.cursor.index(),
            to = checkpoint.position.index,
            "rolling back"
        );
        self.cursor.reset(checkpoint.position);
        self.builder.abandon(checkpoint.marker);
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    /// Consume the current token as a leaf of `kind` if `accepts` its token kind.
    fn leaf(&mut self, kind: NodeKind, expectation: Expectation, accepts: impl Fn(TokenKind) -> bool) -> bool {
        let token = self.cursor.current();
        if accepts(token.kind) {
            self.cursor.advance();
            self.builder.leaf(kind, token.span);
            true
        } else {
            self.expect(expectation);
            false
        }
    }

    /// Consume an anonymous operator token. It becomes part of the enclosing node's range, not a node.
    fn operator(&mut self, id: OperatorId) -> bool {
        if self.cursor.current().kind.is_operator(id) {
            self.cursor.advance();
            true
        } else {
            self.expect(Expectation::Operator(id));
            false
        }
    }

    // ========================================================================
    // Failure reporting
    // ========================================================================

    /// Record that `expectation` failed at the current token, keeping only the farthest failure.
    fn expect(&mut self, expectation: Expectation) {
        let index = self.cursor.index();
        if self.expected.items.is_empty() || index > self.expected.index {
            self.expected = Expected {
                index,
                items: vec![expectation],
            };
        } else if index == self.expected.index && !self.expected.items.contains(&expectation) {
            self.expected.items.push(expectation);
        }
    }

    /// Turn the farthest recorded failure into a syntax diagnostic and clear it.
    fn report_expected(&mut self) {
        let expected = std::mem::take(&mut self.expected);
        if expected.items.is_empty() {
            return;
        }

        let found = self.cursor.get(expected.index);
        let mut diagnostic = Diagnostic::syntax(
            format!(
                "expected {}, found {}",
                join_alternatives(&expected.items),
                found.describe()
            ),
            found.span,
        );

        let wants_name = expected.items.contains(&Expectation::Node(NodeKind::Identifier));
        match found.kind {
            TokenKind::Keyword(id) if wants_name => {
                diagnostic = diagnostic.with_hint(format!(
                    "`{}` is a reserved word and cannot be used as a name",
                    keywords::as_str(id)
                ));
            }
            TokenKind::Eof => {
                diagnostic = diagnostic.with_note("the input ended in the middle of a statement");
            }
            _ => {}
        }
        if let [Expectation::Keyword(id)] = expected.items.as_slice() {
            if let Some(example) = keywords::info_for(*id).examples.first() {
                diagnostic = diagnostic.with_hint(format!("a statement looks like `{}`", example.code));
            }
        }

        tracing::debug!(offset = found.span.start, message = %diagnostic.message, "syntax error");
        self.diagnostics.push(diagnostic);
    }
}

/// Render `a`, `a or b`, `a, b or c`.
fn join_alternatives(items: &[Expectation]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    match rendered.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    }
}
