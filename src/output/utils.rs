//! Shared utility functions for output formatting

use std::borrow::Cow;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::TreeNode;

use super::renderer::{Rendered, TreeLine};

/// Split a rendered line into its glyphs and the text that follows them.
///
/// When the node itself was handed back instead of a line, the text is
/// `key: label`, keeping whatever glyphs were put in front of the key.
pub fn split_line<'l, N: TreeNode + ?Sized>(line: &'l TreeLine<'_, N>) -> (&'l str, Cow<'l, str>) {
    match &line.value {
        Rendered::Line(_) => (line.prefix.as_str(), Cow::Borrowed(line.entry.as_str())),
        Rendered::Raw(node) => {
            let label = node.label().unwrap_or_default();
            let (glyphs, key) = match line.key.strip_prefix(line.prefix.as_str()) {
                Some(key) => (line.prefix.as_str(), key),
                None => ("", line.key.as_str()),
            };
            let text = if key.is_empty() {
                label.into_owned()
            } else {
                format!("{}: {}", key, label)
            };
            (glyphs, Cow::Owned(text))
        }
    }
}

/// Write one line, dimming the glyphs and highlighting branches such as
/// directories.
pub fn write_rendered_line<W, N>(out: &mut W, line: &TreeLine<'_, N>) -> io::Result<()>
where
    W: WriteColor,
    N: TreeNode + ?Sized,
{
    let (glyphs, text) = split_line(line);
    if !glyphs.is_empty() {
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(out, "{}", glyphs)?;
        out.reset()?;
    }
    if line.is_branch {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    }
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::output::TreeRenderer;
    use crate::tree::{Bypass, FsNode, Node, RenderOptions};

    fn sample() -> Node<&'static str> {
        Node::new("A", vec![Node::leaf("B"), Node::leaf("C")])
    }

    #[test]
    fn test_split_decorated_line() {
        let tree = sample();
        let lines: Vec<_> = TreeRenderer::new(&tree, RenderOptions::default()).collect();
        let (glyphs, text) = split_line(&lines[1]);
        assert_eq!(glyphs, "|-");
        assert_eq!(text, "B");
    }

    #[test]
    fn test_split_raw_value_with_decorated_key() {
        let tree = sample();
        let options = RenderOptions {
            bypass: Bypass::CURRENT,
            ..Default::default()
        };
        let lines: Vec<_> = TreeRenderer::new(&tree, options).collect();

        let (glyphs, text) = split_line(&lines[0]);
        assert_eq!((glyphs, &*text), ("", "A"));

        let (glyphs, text) = split_line(&lines[2]);
        assert_eq!((glyphs, &*text), ("\\-", "1: C"));
    }

    #[test]
    fn test_split_raw_value_with_raw_key() {
        let tree = sample();
        let options = RenderOptions {
            bypass: Bypass {
                current: true,
                key: true,
            },
            ..Default::default()
        };
        let lines: Vec<_> = TreeRenderer::new(&tree, options).collect();
        let (glyphs, text) = split_line(&lines[1]);
        assert_eq!((glyphs, &*text), ("", "0: B"));
    }

    #[test]
    fn test_write_rendered_line_without_color() {
        let tree = sample();
        let mut out = termcolor::NoColor::new(Vec::new());
        for line in TreeRenderer::new(&tree, RenderOptions::default()) {
            write_rendered_line(&mut out, &line).unwrap();
        }
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "A\n|-B\n\\-C\n");
    }

    #[test]
    fn test_empty_directory_is_highlighted() {
        let entry = |name: &str, is_dir: bool| FsNode {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_dir,
            children: Vec::new(),
        };
        let tree = FsNode {
            children: vec![entry("a.txt", false), entry("empty", true)],
            ..entry(".", true)
        };

        let mut out = termcolor::Buffer::ansi();
        for line in TreeRenderer::new(&tree, RenderOptions::default()) {
            write_rendered_line(&mut out, &line).unwrap();
        }
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1B[34mempty"), "got: {:?}", text);
        assert!(!text.contains("\x1B[34ma.txt"), "got: {:?}", text);
    }
}
