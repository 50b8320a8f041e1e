/// Parser core types.
///
/// This chunk defines the [`Parse`] result, the internal [`Parser`] state, and the small bookkeeping types shared
/// by the other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Result of parsing one source text: the tree plus every diagnostic recorded along the way.
///
/// ## Notes
/// - The tree is always present. On malformed input it holds the statements matched before the first syntax
///   error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    root: SyntaxNode,
    diagnostics: Vec<Diagnostic>,
}

impl Parse {
    /// The synthetic `File` root.
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn file(&self) -> File<'_> {
        File(&self.root)
    }

    /// Statements in source order.
    pub fn statements(&self) -> impl Iterator<Item = Statement<'_>> {
        self.file().statements()
    }

    /// Lexical and syntax diagnostics, ordered by offset.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (SyntaxNode, Vec<Diagnostic>) {
        (self.root, self.diagnostics)
    }
}

/// Something a terminal match wanted to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Node(NodeKind),
    Keyword(KeywordId),
    Operator(OperatorId),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Node(NodeKind::Identifier) => write!(f, "identifier"),
            Expectation::Node(NodeKind::Number) => write!(f, "number"),
            Expectation::Node(kind) => write!(f, "{}", kind.name().to_lowercase()),
            Expectation::Keyword(id) => write!(f, "`{}`", keywords::as_str(*id)),
            Expectation::Operator(id) => write!(f, "`{}`", operators::as_str(*id)),
        }
    }
}

/// Farthest failure seen since the last report: the token index and what was expected there.
#[derive(Debug, Default)]
struct Expected {
    index: usize,
    items: Vec<Expectation>,
}

/// Cursor position and open tree node saved before an attempt; restored together on failure.
#[derive(Debug)]
struct Checkpoint {
    position: Position,
    marker: Marker,
}

/// Parser state.
///
/// ## Notes
/// - Single pass, no shared state: each parse owns its cursor, builder and diagnostics.
/// - Rules report failure by returning `false`; the only diagnostics they record directly are guard trips.
///   Expected-token diagnostics are assembled from [`Expected`] by the `file` rule.
struct Parser<'t, 'src, 'c> {
    cursor: TokenCursor<'t, 'src>,
    builder: TreeBuilder,
    config: &'c ParserConfig,
    diagnostics: Vec<Diagnostic>,
    expected: Expected,
    recursion_reported: bool,
}

impl<'t, 'src, 'c> Parser<'t, 'src, 'c> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `ray_syntax::lexer::lex`.
    /// - `diagnostics`: Diagnostics recorded before parsing (lexical errors).
    fn new(tokens: &'t [Token<'src>], diagnostics: Vec<Diagnostic>, config: &'c ParserConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            builder: TreeBuilder::new(NodeKind::File),
            config,
            diagnostics,
            expected: Expected::default(),
            recursion_reported: false,
        }
    }

    /// Run the `file` rule and assemble the result. `source_len` becomes the root's range end.
    fn run(mut self, source_len: usize) -> Parse {
        self.file();

        let root = self.builder.finish(Span::new(0, source_len));
        let mut diagnostics = self.diagnostics;
        diagnostics::finalize(&mut diagnostics, self.config.max_diagnostics);

        Parse { root, diagnostics }
    }
}
