//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::{Result, TreeError};
use crate::tree::TreeNode;

use super::renderer::{TreeLine, TreeRenderer};
use super::utils::split_line;

/// One rendered line in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonLine {
    /// Absent for the root header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    pub key: String,
    pub line: String,
    pub is_last: bool,
    pub has_children: bool,
}

impl<N: TreeNode + ?Sized> From<&TreeLine<'_, N>> for JsonLine {
    fn from(line: &TreeLine<'_, N>) -> Self {
        let (glyphs, text) = split_line(line);
        Self {
            depth: line.depth,
            key: line.key.clone(),
            line: format!("{}{}", glyphs, text),
            is_last: line.is_last,
            has_children: line.has_children,
        }
    }
}

/// Render every line and serialize them as a pretty-printed JSON array.
pub fn to_json<N: TreeNode + ?Sized>(renderer: TreeRenderer<'_, N>) -> Result<String> {
    let lines: Vec<JsonLine> = renderer.map(|line| JsonLine::from(&line)).collect();
    Ok(serde_json::to_string_pretty(&lines)?)
}

/// Write rendered lines as pretty-printed JSON followed by a newline.
pub fn write_json<N, W>(renderer: TreeRenderer<'_, N>, out: &mut W) -> Result<()>
where
    N: TreeNode + ?Sized,
    W: Write,
{
    let json = to_json(renderer)?;
    writeln!(out, "{}", json).map_err(|source| TreeError::Io {
        context: "error writing output".to_string(),
        source,
    })
}

/// Print rendered lines as pretty-printed JSON to stdout.
pub fn print_json<N: TreeNode + ?Sized>(renderer: TreeRenderer<'_, N>) -> Result<()> {
    write_json(renderer, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, RenderOptions};
    use serde_json::json;

    #[test]
    fn test_to_json_shape() {
        let tree = Node::new("A", vec![Node::leaf("B"), Node::leaf("C")]);
        let json = to_json(TreeRenderer::new(&tree, RenderOptions::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!([
                {"key": "", "line": "A", "is_last": true, "has_children": true},
                {"depth": 0, "key": "0", "line": "|-B", "is_last": false, "has_children": false},
                {"depth": 0, "key": "1", "line": "\\-C", "is_last": true, "has_children": false},
            ])
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_json_reports_closed_output() {
        let tree = Node::leaf("A");
        let renderer = TreeRenderer::new(&tree, RenderOptions::default());
        let err = write_json(renderer, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, TreeError::Io { .. }), "got: {:?}", err);
    }

    #[test]
    fn test_write_json_ends_with_newline() {
        let tree = Node::leaf("A");
        let mut out = Vec::new();
        write_json(TreeRenderer::new(&tree, RenderOptions::default()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("]\n"), "got: {}", text);
    }
}
