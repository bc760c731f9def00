//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print a "N directories, M files" footer after directory trees
    pub summary: bool,
}

impl OutputConfig {
    /// No color, no footer.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            summary: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            summary: true,
        }
    }
}
