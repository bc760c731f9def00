//! Tree rendering and display
//!
//! # Module Structure
//!
//! - `prefix` - The six glyphs drawn in front of each entry
//! - `renderer` - `TreeRenderer`, decorated lines over a traversal
//! - `tree` - Formatter for console and string output
//! - `json` - JSON output
//! - `config` - Output configuration types
//! - `utils` - Line splitting and colored writing shared by the formatters

mod config;
mod json;
mod prefix;
mod renderer;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{JsonLine, print_json, to_json, write_json};
pub use prefix::{PrefixPart, PrefixTable};
pub use renderer::{Rendered, TreeLine, TreeRenderer};
pub use tree::TreeFormatter;
pub use utils::{split_line, write_rendered_line};

use crate::tree::{RenderOptions, TreeNode};

/// Render `root` with default glyphs into a newline-terminated string.
pub fn render_to_string<N: TreeNode + ?Sized>(root: &N, options: RenderOptions) -> String {
    TreeFormatter::new(OutputConfig::plain()).format(TreeRenderer::new(root, options))
}
