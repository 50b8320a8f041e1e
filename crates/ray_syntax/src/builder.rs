//! Tree builder driven by the grammar rules.
//!
//! A rule calls [`TreeBuilder::open`] before it attempts its children and gets a [`Marker`] back. On success it
//! calls [`TreeBuilder::close`], which turns the open frame into a [`SyntaxNode`] and attaches it to the enclosing
//! frame; on failure it calls [`TreeBuilder::abandon`], which drops the frame and everything accumulated in it.
//! Leaves are attached directly with [`TreeBuilder::leaf`].
//!
//! ## Notes
//! - Frames form a stack, so markers must be closed or abandoned innermost-first. Abandoning an outer marker also
//!   discards any frames still open above it.

use crate::tree::{NodeKind, Span, SyntaxNode};

#[derive(Debug)]
struct Frame {
    kind: NodeKind,
    start: usize,
    children: Vec<SyntaxNode>,
}

/// Handle to an open node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an opened node must be closed or abandoned"]
pub struct Marker {
    frame: usize,
}

/// Assembles matched productions into an owned syntax tree.
#[derive(Debug)]
pub struct TreeBuilder {
    frames: Vec<Frame>,
}

impl TreeBuilder {
    /// Start a tree whose root has kind `root`.
    pub fn new(root: NodeKind) -> Self {
        Self {
            frames: vec![Frame {
                kind: root,
                start: 0,
                children: Vec::new(),
            }],
        }
    }

    /// Open a node of `kind`. `start` is the offset used for its range if it ends up with no children.
    pub fn open(&mut self, kind: NodeKind, start: usize) -> Marker {
        self.frames.push(Frame {
            kind,
            start,
            children: Vec::new(),
        });
        Marker {
            frame: self.frames.len() - 1,
        }
    }

    /// Attach a leaf node to the innermost open node.
    pub fn leaf(&mut self, kind: NodeKind, span: Span) {
        self.top().children.push(SyntaxNode::leaf(kind, span));
    }

    /// Close the node opened with `marker` and attach it to its parent.
    ///
    /// The node's range is the union of its first and last child ranges.
    pub fn close(&mut self, marker: Marker) {
        debug_assert_eq!(marker.frame + 1, self.frames.len(), "closing a marker that is not innermost");
        if marker.frame == 0 || marker.frame >= self.frames.len() {
            return;
        }
        self.frames.truncate(marker.frame + 1);
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let span = match (frame.children.first(), frame.children.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::empty(frame.start),
        };
        let node = SyntaxNode::composite(frame.kind, span, frame.children);
        self.top().children.push(node);
    }

    /// Discard the node opened with `marker` together with all of its children.
    pub fn abandon(&mut self, marker: Marker) {
        if marker.frame == 0 {
            return;
        }
        self.frames.truncate(marker.frame);
    }

    /// Number of frames currently open, including the root.
    pub fn open_frames(&self) -> usize {
        self.frames.len()
    }

    /// Finish the tree. Frames still open are discarded; the root gets range `span`.
    pub fn finish(mut self, span: Span) -> SyntaxNode {
        debug_assert_eq!(self.frames.len(), 1, "unbalanced tree builder");
        self.frames.truncate(1);
        let root = self.frames.pop().map(|frame| (frame.kind, frame.children));
        match root {
            Some((kind, children)) => SyntaxNode::composite(kind, span, children),
            None => SyntaxNode::composite(NodeKind::File, span, Vec::new()),
        }
    }

    fn top(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame {
                kind: NodeKind::File,
                start: 0,
                children: Vec::new(),
            });
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}
