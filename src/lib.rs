//! Treeline - render any tree as ASCII art, one decorated line at a time

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{
    OutputConfig, PrefixPart, PrefixTable, Rendered, TreeFormatter, TreeLine, TreeRenderer,
    print_json, render_to_string, write_json,
};
pub use tree::{
    Bypass, FsNode, Lookahead, Node, RenderOptions, Traversal, TraversalMode, TreeNode,
    TreeWalker, WalkerConfig, read_json,
};
