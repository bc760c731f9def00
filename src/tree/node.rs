//! The node contract consumed by the traversal engine, plus a small owned
//! tree type for callers that just want to build a tree in memory.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// A child as seen from its parent: the node plus its position key.
///
/// The key is whatever identifies the child inside its parent: an object key,
/// a file name, or the sibling index when the source has nothing better.
#[derive(Debug)]
pub struct Child<'a, N: ?Sized> {
    pub key: Cow<'a, str>,
    pub node: &'a N,
}

impl<N: ?Sized> Clone for Child<'_, N> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            node: self.node,
        }
    }
}

/// Boxed iterator over the children of a node.
pub type Children<'a, N> = Box<dyn Iterator<Item = Child<'a, N>> + 'a>;

/// Anything that can be drawn as a tree.
///
/// The walk only borrows nodes; a source must stay unchanged while a
/// renderer over it is alive, which the borrow checker already enforces.
pub trait TreeNode {
    /// Ordered, finite sequence of children.
    fn children(&self) -> Children<'_, Self>;

    fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Whether the node is a container, even an empty one such as an empty
    /// directory. Sinks use it for highlighting.
    fn is_branch(&self) -> bool {
        self.has_children()
    }

    /// Display text for this node. `None` means the text could not be
    /// produced; the renderer then shows an empty entry.
    fn label(&self) -> Option<Cow<'_, str>>;
}

/// Key children by their position among their siblings.
pub fn indexed<'a, N, I>(nodes: I) -> Children<'a, N>
where
    N: ?Sized + 'a,
    I: IntoIterator<Item = &'a N>,
    I::IntoIter: 'a,
{
    Box::new(nodes.into_iter().enumerate().map(|(index, node)| Child {
        key: Cow::Owned(index.to_string()),
        node,
    }))
}

/// Format a `Display` value without panicking when its implementation fails.
pub fn display_label<T: fmt::Display + ?Sized>(value: &T) -> Option<String> {
    let mut text = String::new();
    write!(text, "{}", value).ok()?;
    Some(text)
}

/// Owned tree of `Display` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(value: T, children: Vec<Node<T>>) -> Self {
        Self { value, children }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Total number of nodes, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }
}

impl<T: fmt::Display> TreeNode for Node<T> {
    fn children(&self) -> Children<'_, Self> {
        indexed(&self.children)
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn label(&self) -> Option<Cow<'_, str>> {
        display_label(&self.value).map(Cow::Owned)
    }
}
