//! Configuration types for traversal and directory walking

/// Order in which a node is emitted relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Only nodes without children produce a line.
    LeavesOnly,
    /// Parent line before its children.
    #[default]
    SelfFirst,
    /// Parent line after its children.
    ChildFirst,
}

/// Which parts of a rendered entry skip prefix/postfix decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bypass {
    /// Yield the node itself instead of a decorated line.
    pub current: bool,
    /// Yield the raw position key instead of a decorated key.
    pub key: bool,
}

impl Bypass {
    pub const NONE: Bypass = Bypass {
        current: false,
        key: false,
    };
    pub const CURRENT: Bypass = Bypass {
        current: true,
        key: false,
    };
    pub const KEY: Bypass = Bypass {
        current: false,
        key: true,
    };
}

/// Fixed settings for one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: TraversalMode,
    pub bypass: Bypass,
    /// Deepest level visited; depth 0 holds the root's children.
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: TraversalMode::SelfFirst,
            bypass: Bypass::KEY,
            max_depth: None,
        }
    }
}

impl RenderOptions {
    pub fn with_mode(mode: TraversalMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// Configuration for building a directory tree.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Show everything, including files matched by .gitignore and hidden files
    pub show_all: bool,
    /// Levels below the root to read; `Some(1)` lists only the root's entries
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    pub ignore_patterns: Vec<String>,
}
