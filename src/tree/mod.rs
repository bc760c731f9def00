//! Tree sources and the traversal that walks them
//!
//! - `TreeNode`: the contract every source implements
//! - `Lookahead` / `Traversal`: the depth-first walk with per-level lookahead
//! - `Node`, `serde_json::Value`, `FsNode`: ready-made sources

mod config;
mod json;
mod lookahead;
mod node;
mod traversal;
mod walker;

// Re-export public types
pub use config::{Bypass, RenderOptions, TraversalMode, WalkerConfig};
pub use json::read_json;
pub use lookahead::Lookahead;
pub use node::{Child, Children, Node, TreeNode, display_label, indexed};
pub use traversal::Traversal;
pub use walker::{FsNode, TreeWalker};
