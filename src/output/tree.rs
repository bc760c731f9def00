//! Tree formatter for console and string output
//!
//! `TreeFormatter` drains a [`TreeRenderer`] into a `String`, any
//! `WriteColor` sink, or stdout.

use std::io;
use termcolor::{ColorChoice, NoColor, StandardStream};

use crate::error::{Result, TreeError};
use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::renderer::TreeRenderer;
use super::utils::write_rendered_line;

/// Formatter for rendered tree lines.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Collect every line into a string, without color.
    pub fn format<N: TreeNode + ?Sized>(&self, renderer: TreeRenderer<'_, N>) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.write_to(renderer, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write every line to `out`, returning how many were written.
    pub fn write_to<N, W>(&self, renderer: TreeRenderer<'_, N>, out: &mut W) -> io::Result<usize>
    where
        N: TreeNode + ?Sized,
        W: termcolor::WriteColor,
    {
        let mut count = 0;
        for line in renderer {
            write_rendered_line(out, &line)?;
            count += 1;
        }
        Ok(count)
    }

    /// Print every line to stdout, colored when the config asks for it.
    pub fn print<N: TreeNode + ?Sized>(&self, renderer: TreeRenderer<'_, N>) -> Result<usize> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(renderer, &mut stdout)
            .map_err(|source| TreeError::Io {
                context: "error writing output".to_string(),
                source,
            })
    }
}
