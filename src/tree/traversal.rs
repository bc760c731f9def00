//! Pull-based depth-first traversal.
//!
//! The walk keeps one [`Lookahead`] per open level instead of recursing, so
//! that between two calls to `advance` every level can still be asked whether
//! its current element has a following sibling. The renderer relies on that to
//! pick a glyph for each ancestor column.

use std::borrow::Cow;

use log::trace;

use super::config::TraversalMode;
use super::lookahead::Lookahead;
use super::node::{Children, TreeNode};

/// What a frame does on the next step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Promote the next sibling.
    Next,
    /// Decide whether the element just promoted is emitted and/or descended into.
    Test,
    /// Push a frame for the current element's children.
    Descend,
    /// Back from the current element's subtree.
    Ascend,
}

struct Frame<'a, N: ?Sized> {
    cursor: Lookahead<Children<'a, N>>,
    step: Step,
}

impl<'a, N: ?Sized> Frame<'a, N> {
    fn new(children: Children<'a, N>) -> Self {
        Self {
            cursor: Lookahead::new(children),
            step: Step::Next,
        }
    }
}

/// Progress of the optional root header around the frame stack.
enum RootPhase<'a, N: ?Sized> {
    Enter(&'a N),
    Leave(&'a N),
    Done,
}

/// Depth-first walk over a [`TreeNode`] with a stack of lookahead frames.
pub struct Traversal<'a, N: ?Sized> {
    stack: Vec<Frame<'a, N>>,
    mode: TraversalMode,
    max_depth: Option<usize>,
    root: Option<&'a N>,
    phase: RootPhase<'a, N>,
    on_root: bool,
}

impl<'a, N: TreeNode + ?Sized> Traversal<'a, N> {
    /// Walk `root` and its descendants; the root itself is visited as a
    /// header outside every level.
    pub fn new(root: &'a N, mode: TraversalMode, max_depth: Option<usize>) -> Self {
        Self {
            stack: Vec::new(),
            mode,
            max_depth,
            root: Some(root),
            phase: RootPhase::Enter(root),
            on_root: false,
        }
    }

    /// Walk only the descendants of `root`; its children form level 0.
    pub fn from_children(root: &'a N, mode: TraversalMode, max_depth: Option<usize>) -> Self {
        Self {
            stack: vec![Frame::new(root.children())],
            mode,
            max_depth,
            root: None,
            phase: RootPhase::Done,
            on_root: false,
        }
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Move to the next position that should be emitted. Returns `false` once
    /// the tree is exhausted.
    pub fn advance(&mut self) -> bool {
        self.on_root = false;
        loop {
            if self.stack.is_empty() {
                match self.phase {
                    RootPhase::Enter(root) => {
                        if root.has_children() {
                            trace!("descending into root");
                            self.stack.push(Frame::new(root.children()));
                            self.phase = RootPhase::Leave(root);
                            if self.mode == TraversalMode::SelfFirst {
                                self.on_root = true;
                                return true;
                            }
                        } else {
                            self.phase = RootPhase::Done;
                            self.on_root = true;
                            return true;
                        }
                    }
                    RootPhase::Leave(_) => {
                        self.phase = RootPhase::Done;
                        if self.mode == TraversalMode::ChildFirst {
                            self.on_root = true;
                            return true;
                        }
                    }
                    RootPhase::Done => return false,
                }
                continue;
            }

            let depth = self.stack.len() - 1;
            let mode = self.mode;
            let max_depth = self.max_depth;
            let Some(frame) = self.stack.last_mut() else {
                continue;
            };

            match frame.step {
                Step::Next => {
                    if frame.cursor.advance().is_err() {
                        trace!("level {} exhausted", depth);
                        self.stack.pop();
                        if let Some(parent) = self.stack.last_mut() {
                            parent.step = Step::Ascend;
                        }
                        continue;
                    }
                    frame.step = Step::Test;
                }
                Step::Test => {
                    let Some(node) = frame.cursor.current().map(|child| child.node) else {
                        frame.step = Step::Next;
                        continue;
                    };
                    let descend =
                        node.has_children() && max_depth.is_none_or(|max| depth < max);
                    if descend {
                        frame.step = Step::Descend;
                        if mode == TraversalMode::SelfFirst {
                            return true;
                        }
                    } else {
                        frame.step = Step::Next;
                        return true;
                    }
                }
                Step::Descend => {
                    frame.step = Step::Ascend;
                    if let Some(node) = frame.cursor.current().map(|child| child.node) {
                        trace!("descending to level {}", depth + 1);
                        self.stack.push(Frame::new(node.children()));
                    }
                }
                Step::Ascend => {
                    frame.step = Step::Next;
                    if mode == TraversalMode::ChildFirst {
                        return true;
                    }
                }
            }
        }
    }

    /// Whether the current position is the root header.
    pub fn is_root(&self) -> bool {
        self.on_root
    }

    /// Level of the current position; `None` on the root header.
    pub fn depth(&self) -> Option<usize> {
        if self.on_root {
            None
        } else {
            self.stack.len().checked_sub(1)
        }
    }

    /// Node at the current position.
    pub fn current(&self) -> Option<&'a N> {
        if self.on_root {
            return self.root;
        }
        self.stack
            .last()
            .and_then(|frame| frame.cursor.current())
            .map(|child| child.node)
    }

    /// Position key of the current node inside its parent; `None` on the
    /// root header.
    pub fn key(&self) -> Option<&Cow<'a, str>> {
        if self.on_root {
            return None;
        }
        self.stack
            .last()
            .and_then(|frame| frame.cursor.current())
            .map(|child| &child.key)
    }

    /// Whether the element current at `level` has a following sibling.
    pub fn has_next(&self, level: usize) -> bool {
        self.stack
            .get(level)
            .is_some_and(|frame| frame.cursor.has_next())
    }
}

impl<'a, N: TreeNode + ?Sized> Iterator for Traversal<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.current() } else { None }
    }
}
