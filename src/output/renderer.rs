//! Decorated tree lines on top of [`Traversal`].
//!
//! `TreeRenderer` owns a traversal and a [`PrefixTable`] and turns every
//! visited position into a line of the form `prefix + entry + postfix`, or
//! hands back the raw node/key when the corresponding [`Bypass`] flag is set.

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::error::Result;
use crate::tree::{Bypass, RenderOptions, Traversal, TreeNode};

use super::prefix::PrefixTable;

/// Value produced for one position.
#[derive(Debug)]
pub enum Rendered<'a, N: ?Sized> {
    /// Prefix, entry and postfix joined.
    Line(String),
    /// The node itself, undecorated.
    Raw(&'a N),
}

impl<N: ?Sized> Clone for Rendered<'_, N> {
    fn clone(&self) -> Self {
        match self {
            Rendered::Line(line) => Rendered::Line(line.clone()),
            Rendered::Raw(node) => Rendered::Raw(*node),
        }
    }
}

impl<N: TreeNode + ?Sized> fmt::Display for Rendered<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Line(line) => f.write_str(line),
            Rendered::Raw(node) => f.write_str(&node.label().unwrap_or_default()),
        }
    }
}

/// Everything the renderer knows about one emitted position.
#[derive(Debug, Clone)]
pub struct TreeLine<'a, N: ?Sized> {
    /// Level of the entry; `None` for the root header.
    pub depth: Option<usize>,
    /// No sibling follows this entry.
    pub is_last: bool,
    pub has_children: bool,
    /// The node is a container, even if it has no children to show.
    pub is_branch: bool,
    pub prefix: String,
    pub entry: String,
    /// Decorated key, or the raw key when keys are bypassed.
    pub key: String,
    pub value: Rendered<'a, N>,
}

/// Iterator of decorated lines over a tree.
pub struct TreeRenderer<'a, N: ?Sized> {
    traversal: Traversal<'a, N>,
    prefix: PrefixTable,
    bypass: Bypass,
}

impl<'a, N: TreeNode + ?Sized> TreeRenderer<'a, N> {
    /// Render `root` as an undecorated header followed by its descendants.
    pub fn new(root: &'a N, options: RenderOptions) -> Self {
        Self::with_traversal(Traversal::new(root, options.mode, options.max_depth), options)
    }

    /// Render only the descendants of `root`; its children sit at depth 0.
    pub fn from_children(root: &'a N, options: RenderOptions) -> Self {
        Self::with_traversal(
            Traversal::from_children(root, options.mode, options.max_depth),
            options,
        )
    }

    fn with_traversal(traversal: Traversal<'a, N>, options: RenderOptions) -> Self {
        Self {
            traversal,
            prefix: PrefixTable::default(),
            bypass: options.bypass,
        }
    }

    pub fn with_prefix(mut self, prefix: PrefixTable) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn prefix_table(&self) -> &PrefixTable {
        &self.prefix
    }

    /// Replace one glyph by role index; see [`PrefixTable::set_prefix_part`].
    pub fn set_prefix_part(&mut self, part: usize, value: impl fmt::Display) -> Result<()> {
        self.prefix.set_prefix_part(part, value)
    }

    /// Move to the next emitted position.
    pub fn advance(&mut self) -> bool {
        self.traversal.advance()
    }

    pub fn depth(&self) -> Option<usize> {
        self.traversal.depth()
    }

    pub fn current_node(&self) -> Option<&'a N> {
        self.traversal.current()
    }

    /// Glyphs in front of the current entry. Empty on the root header.
    pub fn prefix(&self) -> String {
        match self.traversal.depth() {
            Some(depth) => self
                .prefix
                .prefix(depth, |level| self.traversal.has_next(level)),
            None => String::new(),
        }
    }

    /// Text of the current node. A node whose label cannot be produced shows
    /// as an empty entry.
    pub fn entry(&self) -> String {
        let Some(node) = self.traversal.current() else {
            return String::new();
        };
        match node.label() {
            Some(label) => label.into_owned(),
            None => {
                debug!("label unavailable at depth {:?}", self.traversal.depth());
                String::new()
            }
        }
    }

    pub fn postfix(&self) -> &'static str {
        ""
    }

    /// Decorated line for the current position, or the node itself with
    /// `bypass.current`.
    pub fn current(&self) -> Option<Rendered<'a, N>> {
        let node = self.traversal.current()?;
        if self.bypass.current {
            return Some(Rendered::Raw(node));
        }
        Some(Rendered::Line(self.decorate(&self.entry())))
    }

    /// Decorated key for the current position, or the raw key with
    /// `bypass.key`. The root header has an empty key.
    pub fn key(&self) -> Option<String> {
        self.traversal.current()?;
        let key = self.raw_key();
        if self.bypass.key {
            return Some(key.into_owned());
        }
        Some(self.decorate(&key))
    }

    fn raw_key(&self) -> Cow<'a, str> {
        self.traversal.key().cloned().unwrap_or_default()
    }

    fn decorate(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix(), text, self.postfix())
    }

    fn is_last(&self) -> bool {
        self.traversal
            .depth()
            .is_none_or(|depth| !self.traversal.has_next(depth))
    }

    fn snapshot(&self) -> Option<TreeLine<'a, N>> {
        let node = self.traversal.current()?;
        Some(TreeLine {
            depth: self.traversal.depth(),
            is_last: self.is_last(),
            has_children: node.has_children(),
            is_branch: node.is_branch(),
            prefix: self.prefix(),
            entry: self.entry(),
            key: self.key()?,
            value: self.current()?,
        })
    }
}

impl<'a, N: TreeNode + ?Sized> Iterator for TreeRenderer<'a, N> {
    type Item = TreeLine<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.traversal.advance() {
            return None;
        }
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PrefixPart;
    use crate::tree::{Node, TraversalMode};
    use pretty_assertions::assert_eq;

    fn sample() -> Node<&'static str> {
        Node::new(
            "A",
            vec![
                Node::leaf("B"),
                Node::new("C", vec![Node::leaf("D"), Node::leaf("E")]),
            ],
        )
    }

    fn lines<N: TreeNode>(renderer: TreeRenderer<'_, N>) -> Vec<String> {
        renderer.map(|line| line.value.to_string()).collect()
    }

    #[test]
    fn test_self_first_example() {
        let tree = sample();
        let renderer = TreeRenderer::new(&tree, RenderOptions::default());
        assert_eq!(
            lines(renderer).join("\n"),
            "A\n|-B\n\\-C\n  |-D\n  \\-E"
        );
    }

    #[test]
    fn test_leaves_only_example() {
        let tree = sample();
        let renderer =
            TreeRenderer::new(&tree, RenderOptions::with_mode(TraversalMode::LeavesOnly));
        assert_eq!(lines(renderer), vec!["|-B", "  |-D", "  \\-E"]);
    }

    #[test]
    fn test_child_first_example() {
        let tree = sample();
        let renderer =
            TreeRenderer::new(&tree, RenderOptions::with_mode(TraversalMode::ChildFirst));
        assert_eq!(lines(renderer), vec!["|-B", "  |-D", "  \\-E", "\\-C", "A"]);
    }

    #[test]
    fn test_from_children_has_no_header() {
        let tree = sample();
        let renderer = TreeRenderer::from_children(&tree, RenderOptions::default());
        assert_eq!(lines(renderer), vec!["|-B", "\\-C", "  |-D", "  \\-E"]);
    }

    #[test]
    fn test_bypass_current_yields_raw_nodes() {
        let tree = sample();
        let options = RenderOptions {
            bypass: Bypass::CURRENT,
            ..Default::default()
        };
        let raw: Vec<_> = TreeRenderer::new(&tree, options)
            .map(|line| match line.value {
                Rendered::Raw(node) => node.value,
                Rendered::Line(line) => panic!("expected raw node, got {line:?}"),
            })
            .collect();
        assert_eq!(raw, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_keys_are_raw_by_default_and_decorated_on_request() {
        let tree = sample();
        let raw: Vec<_> = TreeRenderer::new(&tree, RenderOptions::default())
            .map(|line| line.key)
            .collect();
        assert_eq!(raw, vec!["", "0", "1", "0", "1"]);

        let options = RenderOptions {
            bypass: Bypass::NONE,
            ..Default::default()
        };
        let decorated: Vec<_> = TreeRenderer::new(&tree, options)
            .map(|line| line.key)
            .collect();
        assert_eq!(decorated, vec!["", "|-0", "\\-1", "  |-0", "  \\-1"]);
    }

    #[test]
    fn test_line_counts_match_tree_shape() {
        let tree = Node::new(
            1,
            vec![
                Node::new(2, vec![Node::leaf(3), Node::new(4, vec![Node::leaf(5)])]),
                Node::leaf(6),
                Node::new(7, vec![Node::leaf(8), Node::leaf(9), Node::leaf(10)]),
            ],
        );
        for mode in [TraversalMode::SelfFirst, TraversalMode::ChildFirst] {
            let count = TreeRenderer::new(&tree, RenderOptions::with_mode(mode)).count();
            assert_eq!(count, tree.count());
        }
        let leaves =
            TreeRenderer::new(&tree, RenderOptions::with_mode(TraversalMode::LeavesOnly)).count();
        assert_eq!(leaves, tree.leaf_count());
    }

    #[test]
    fn test_prefix_has_one_glyph_per_level() {
        let tree = Node::new(
            "r",
            vec![
                Node::new("a", vec![Node::new("b", vec![Node::leaf("c")])]),
                Node::leaf("d"),
            ],
        );
        let mut table = PrefixTable::default();
        table.set_part(crate::output::PrefixPart::MidHasNext, "M");
        table.set_part(crate::output::PrefixPart::MidLast, "m");
        table.set_part(crate::output::PrefixPart::EndHasNext, "E");
        table.set_part(crate::output::PrefixPart::EndLast, "e");

        for line in TreeRenderer::new(&tree, RenderOptions::default()).with_prefix(table) {
            let Some(depth) = line.depth else {
                assert_eq!(line.prefix, "");
                continue;
            };
            let mids = line.prefix.chars().filter(|c| matches!(c, 'M' | 'm')).count();
            let ends = line.prefix.chars().filter(|c| matches!(c, 'E' | 'e')).count();
            assert_eq!(mids, depth);
            assert_eq!(ends, 1);
            assert_eq!(line.prefix.ends_with('e'), line.is_last);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let tree = sample();
        let first = lines(TreeRenderer::new(&tree, RenderOptions::default()));
        let second = lines(TreeRenderer::new(&tree, RenderOptions::default()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unavailable_label_renders_empty_entry() {
        struct Opaque;
        impl fmt::Display for Opaque {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let tree = Node::new(Opaque, vec![Node::leaf(Opaque), Node::leaf(Opaque)]);
        let rendered = lines(TreeRenderer::new(&tree, RenderOptions::default()));
        assert_eq!(rendered, vec!["", "|-", "\\-"]);
    }

    #[test]
    fn test_set_prefix_part_through_renderer() {
        let tree = sample();
        let mut renderer = TreeRenderer::new(&tree, RenderOptions::default());
        renderer.set_prefix_part(4, "`-").unwrap();
        assert!(renderer.set_prefix_part(6, "?").is_err());
        assert_eq!(renderer.prefix_table().get(PrefixPart::EndLast), "`-");
        assert_eq!(renderer.prefix_table().get(PrefixPart::EndHasNext), "|-");
        let rendered = lines(renderer);
        assert_eq!(rendered[2], "`-C");
        assert_eq!(rendered[4], "  `-E");
    }

    #[test]
    fn test_manual_stepping() {
        let tree = sample();
        let mut renderer = TreeRenderer::from_children(&tree, RenderOptions::default());
        assert!(renderer.current().is_none());
        assert!(renderer.advance());
        assert_eq!(renderer.depth(), Some(0));
        assert_eq!(renderer.current_node().map(|n| n.value), Some("B"));
        assert_eq!(renderer.prefix(), "|-");
        assert_eq!(renderer.entry(), "B");
        assert_eq!(renderer.postfix(), "");
    }
}
