//! Visitor protocol over the syntax tree.
//!
//! Implement [`Visitor`] and override the per-kind methods you care about. Each per-kind method receives the typed
//! view for its node and by default forwards to [`Visitor::visit_node`], so a visitor that only needs a generic
//! hook overrides that one method.
//!
//! [`SyntaxNode::accept`] dispatches a single node; [`walk`] visits a whole subtree in pre-order.
//!
//! ## Examples
//! ```rust
//! use ray_syntax::parser;
//! use ray_syntax::tree::Identifier;
//! use ray_syntax::visitor::{Visitor, walk};
//!
//! struct Names<'s> {
//!     source: &'s str,
//!     names: Vec<&'s str>,
//! }
//!
//! impl Visitor for Names<'_> {
//!     fn visit_identifier(&mut self, identifier: Identifier<'_>) {
//!         self.names.push(identifier.name(self.source));
//!     }
//! }
//!
//! let source = "let x = y";
//! let parse = parser::parse(source);
//! let mut names = Names { source, names: Vec::new() };
//! walk(parse.root(), &mut names);
//! assert_eq!(names.names, vec!["x", "y"]);
//! ```

use crate::tree::{Expr, File, Identifier, Keyword, NodeKind, Number, Statement, SyntaxNode};

/// One method per node kind. All methods default to [`Visitor::visit_node`], which does nothing.
pub trait Visitor {
    /// Fallback for every node kind.
    fn visit_node(&mut self, _node: &SyntaxNode) {}

    fn visit_file(&mut self, file: File<'_>) {
        self.visit_node(file.syntax());
    }

    fn visit_statement(&mut self, statement: Statement<'_>) {
        self.visit_node(statement.syntax());
    }

    fn visit_expr(&mut self, expr: Expr<'_>) {
        self.visit_node(expr.syntax());
    }

    fn visit_identifier(&mut self, identifier: Identifier<'_>) {
        self.visit_node(identifier.syntax());
    }

    fn visit_keyword(&mut self, keyword: Keyword<'_>) {
        self.visit_node(keyword.syntax());
    }

    fn visit_number(&mut self, number: Number<'_>) {
        self.visit_node(number.syntax());
    }
}

impl SyntaxNode {
    /// Dispatch this node (not its children) to the matching `visit_*` method.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self.kind() {
            NodeKind::File => visitor.visit_file(File(self)),
            NodeKind::Statement => match Statement::cast(self) {
                Some(statement) => visitor.visit_statement(statement),
                None => visitor.visit_node(self),
            },
            NodeKind::Expr => match Expr::cast(self) {
                Some(expr) => visitor.visit_expr(expr),
                None => visitor.visit_node(self),
            },
            NodeKind::Identifier => visitor.visit_identifier(Identifier(self)),
            NodeKind::Keyword => visitor.visit_keyword(Keyword(self)),
            NodeKind::Number => visitor.visit_number(Number(self)),
        }
    }
}

/// Visit `node` and all of its descendants in pre-order.
pub fn walk<V: Visitor + ?Sized>(node: &SyntaxNode, visitor: &mut V) {
    for node in node.descendants() {
        node.accept(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[derive(Default)]
    struct KindRecorder {
        kinds: Vec<NodeKind>,
    }

    impl Visitor for KindRecorder {
        fn visit_node(&mut self, node: &SyntaxNode) {
            self.kinds.push(node.kind());
        }
    }

    #[derive(Default)]
    struct StatementCounter {
        statements: usize,
        other: usize,
    }

    impl Visitor for StatementCounter {
        fn visit_node(&mut self, _node: &SyntaxNode) {
            self.other += 1;
        }

        fn visit_statement(&mut self, _statement: Statement<'_>) {
            self.statements += 1;
        }
    }

    #[test]
    fn test_walk_is_pre_order() {
        let parse = parser::parse("let x = 1");
        let mut recorder = KindRecorder::default();
        walk(parse.root(), &mut recorder);
        assert_eq!(
            recorder.kinds,
            vec![
                NodeKind::File,
                NodeKind::Statement,
                NodeKind::Keyword,
                NodeKind::Identifier,
                NodeKind::Expr,
                NodeKind::Number,
            ]
        );
    }

    #[test]
    fn test_per_kind_override_replaces_fallback() {
        let parse = parser::parse("let a = 1 let b = c");
        let mut counter = StatementCounter::default();
        walk(parse.root(), &mut counter);
        assert_eq!(counter.statements, 2);
        // File + per statement: keyword, identifier, expr, value.
        assert_eq!(counter.other, 1 + 2 * 4);
    }

    #[test]
    fn test_accept_dispatches_single_node() {
        let parse = parser::parse("let a = 1");
        let mut recorder = KindRecorder::default();
        parse.root().accept(&mut recorder);
        assert_eq!(recorder.kinds, vec![NodeKind::File]);
    }

    #[test]
    fn test_walk_through_dyn_visitor() {
        let parse = parser::parse("let a = b");
        let mut recorder = KindRecorder::default();
        let visitor: &mut dyn Visitor = &mut recorder;
        walk(parse.root(), visitor);
        assert_eq!(recorder.kinds.len(), 6);
    }
}
