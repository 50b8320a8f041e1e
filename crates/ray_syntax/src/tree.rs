//! Syntax tree definitions for Ray.
//!
//! The tree is explicitly owned: every [`SyntaxNode`] stores its children by value, in grammar order, and is
//! immutable once the parser hands it out. Typed views ([`File`], [`Statement`], [`Expr`], [`Identifier`],
//! [`Keyword`], [`Number`]) give positional accessors for the children a production guarantees.
//!
//! ## Notes
//! - Nodes can only be constructed by the tree builder, so the shape invariants (a `Statement` has exactly a
//!   keyword, an identifier, and an expression; an `Expr` has exactly one number or identifier) hold by
//!   construction.
//! - Nodes store byte ranges, not text. Pass the parsed source to [`SyntaxNode::text`] to get the matched text.

use std::fmt::{self, Write as _};
use std::ops::Range;

/// Source location span (byte offsets, half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-length span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ============================================================================
// Node kinds
// ============================================================================

/// Closed set of node kinds produced by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Synthetic root; children are statements.
    File,
    Statement,
    Expr,
    Identifier,
    Keyword,
    Number,
}

impl NodeKind {
    /// Leaf kinds carry a matched text range and never have children.
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Identifier | NodeKind::Keyword | NodeKind::Number)
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::File => "File",
            NodeKind::Statement => "Statement",
            NodeKind::Expr => "Expr",
            NodeKind::Identifier => "Identifier",
            NodeKind::Keyword => "Keyword",
            NodeKind::Number => "Number",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Untyped node
// ============================================================================

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    span: Span,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub(crate) fn leaf(kind: NodeKind, span: Span) -> Self {
        debug_assert!(kind.is_leaf(), "{kind} is not a leaf kind");
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub(crate) fn composite(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        debug_assert!(!kind.is_leaf(), "{kind} cannot have children");
        Self { kind, span, children }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// The source text this node covers.
    ///
    /// Returns an empty string if `source` is not the text this tree was parsed from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.range()).unwrap_or("")
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Leaf nodes of this subtree, in source order.
    pub fn leaves(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.descendants().filter(|node| node.kind.is_leaf())
    }

    /// Render an indented listing of kinds, ranges, and leaf text.
    ///
    /// ```text
    /// File@0..10
    ///   Statement@0..10
    ///     Keyword@0..3 "let"
    /// ```
    pub fn dump(&self, source: &str) -> String {
        let mut out = String::new();
        self.dump_into(source, 0, &mut out);
        out
    }

    fn dump_into(&self, source: &str, indent: usize, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{:indent$}{}@{}", "", self.kind, self.span, indent = indent * 2);
        if self.kind.is_leaf() {
            let _ = write!(out, " {:?}", self.text(source));
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(source, indent + 1, out);
        }
    }

    pub fn as_file(&self) -> Option<File<'_>> {
        File::cast(self)
    }

    pub fn as_statement(&self) -> Option<Statement<'_>> {
        Statement::cast(self)
    }

    pub fn as_expr(&self) -> Option<Expr<'_>> {
        Expr::cast(self)
    }
}

/// Pre-order traversal produced by [`SyntaxNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// ============================================================================
// Typed views
// ============================================================================

/// Root view: the ordered statements of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct File<'a>(pub(crate) &'a SyntaxNode);

impl<'a> File<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind == NodeKind::File).then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn statements(self) -> impl Iterator<Item = Statement<'a>> {
        self.0.children.iter().filter_map(Statement::cast)
    }
}

/// `let NAME = expr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a>(pub(crate) &'a SyntaxNode);

impl<'a> Statement<'a> {
    /// View `node` as a statement if it is one and has its three children in grammar order.
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        let well_formed = node.kind == NodeKind::Statement
            && matches!(
                node.children.as_slice(),
                [keyword, identifier, expr]
                    if keyword.kind == NodeKind::Keyword
                        && identifier.kind == NodeKind::Identifier
                        && expr.kind == NodeKind::Expr
            );
        well_formed.then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn span(&self) -> Span {
        self.0.span
    }

    pub fn keyword(&self) -> Keyword<'a> {
        Keyword(&self.0.children[0])
    }

    pub fn identifier(&self) -> Identifier<'a> {
        Identifier(&self.0.children[1])
    }

    pub fn expr(&self) -> Expr<'a> {
        Expr(&self.0.children[2])
    }
}

/// `NUMBER | IDENTIFIER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expr<'a>(pub(crate) &'a SyntaxNode);

/// The single alternative an [`Expr`] matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprValue<'a> {
    Number(Number<'a>),
    Identifier(Identifier<'a>),
}

impl<'a> Expr<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        let well_formed = node.kind == NodeKind::Expr
            && matches!(node.children.as_slice(), [child] if matches!(child.kind, NodeKind::Number | NodeKind::Identifier));
        well_formed.then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn span(&self) -> Span {
        self.0.span
    }

    pub fn value(&self) -> ExprValue<'a> {
        let child = &self.0.children[0];
        match child.kind {
            NodeKind::Number => ExprValue::Number(Number(child)),
            _ => ExprValue::Identifier(Identifier(child)),
        }
    }

    /// Kind of the matched alternative (`Number` or `Identifier`).
    pub fn value_kind(&self) -> NodeKind {
        self.0.children[0].kind
    }
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a>(pub(crate) &'a SyntaxNode);

impl<'a> Identifier<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind == NodeKind::Identifier).then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn span(&self) -> Span {
        self.0.span
    }

    pub fn name<'s>(&self, source: &'s str) -> &'s str {
        self.0.text(source)
    }
}

/// The `let` keyword of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword<'a>(pub(crate) &'a SyntaxNode);

impl<'a> Keyword<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind == NodeKind::Keyword).then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn span(&self) -> Span {
        self.0.span
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.0.text(source)
    }
}

/// `[0-9]+`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number<'a>(pub(crate) &'a SyntaxNode);

impl<'a> Number<'a> {
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind == NodeKind::Number).then_some(Self(node))
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.0
    }

    pub fn span(&self) -> Span {
        self.0.span
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.0.text(source)
    }

    /// Numeric value of the literal, or `None` if it does not fit in a `u64`.
    pub fn value(&self, source: &str) -> Option<u64> {
        self.text(source).parse().ok()
    }
}
