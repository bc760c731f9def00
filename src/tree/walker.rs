//! TreeWalker - reads a directory into an in-memory tree of `FsNode`s

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;
use log::{debug, warn};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::node::{Child, Children, TreeNode};

/// A file or directory read by [`TreeWalker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<FsNode>,
}

impl FsNode {
    fn new(name: String, path: PathBuf, is_dir: bool) -> Self {
        Self {
            name,
            path,
            is_dir,
            children: Vec::new(),
        }
    }

    /// Count (directories, files) below this node, excluding itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.counts();
            if child.is_dir {
                (dirs + d + 1, files + f)
            } else {
                (dirs + d, files + f + 1)
            }
        })
    }
}

impl TreeNode for FsNode {
    fn children(&self) -> Children<'_, Self> {
        Box::new(self.children.iter().map(|node| Child {
            key: Cow::Borrowed(node.name.as_str()),
            node,
        }))
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn is_branch(&self) -> bool {
        self.is_dir
    }

    fn label(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.name))
    }
}

/// Builds an [`FsNode`] tree, honouring .gitignore unless `show_all` is set.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: &Path) -> Result<FsNode> {
        if !root.exists() {
            return Err(TreeError::NotFound {
                path: root.to_path_buf(),
            });
        }

        let patterns = compile_patterns(&self.config.ignore_patterns);
        let dirs_only = self.config.dirs_only;
        let respect_ignore = !self.config.show_all;

        let walker = WalkBuilder::new(root)
            .hidden(respect_ignore)
            .ignore(respect_ignore)
            .git_ignore(respect_ignore)
            .git_global(respect_ignore)
            .git_exclude(respect_ignore)
            .require_git(false)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                if dirs_only && !is_dir {
                    return false;
                }
                let name = entry.file_name().to_string_lossy();
                !should_ignore_name(&name, &patterns)
            })
            .build();

        // Entries arrive depth-first; `open` holds the chain of directories
        // that are still receiving children.
        let mut open: Vec<FsNode> = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };
            let depth = entry.depth();
            close_to_depth(&mut open, depth);

            let name = if depth == 0 {
                root.display().to_string()
            } else {
                entry.file_name().to_string_lossy().into_owned()
            };
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            open.push(FsNode::new(name, entry.path().to_path_buf(), is_dir));
        }
        close_to_depth(&mut open, 1);

        let tree = open.pop().ok_or_else(|| TreeError::NotFound {
            path: root.to_path_buf(),
        })?;
        let (dirs, files) = tree.counts();
        debug!("walked {}: {} directories, {} files", root.display(), dirs, files);
        Ok(tree)
    }
}

/// Attach finished nodes to their parents until only `depth` levels stay open.
fn close_to_depth(open: &mut Vec<FsNode>, depth: usize) {
    while open.len() > depth.max(1) {
        let Some(done) = open.pop() else { break };
        if let Some(parent) = open.last_mut() {
            parent.children.push(done);
        }
    }
}

fn compile_patterns(patterns: &[String]) -> Vec<(String, Option<Pattern>)> {
    patterns
        .iter()
        .map(|raw| {
            let compiled = Pattern::new(raw)
                .inspect_err(|err| warn!("ignoring invalid pattern '{}': {}", raw, err))
                .ok();
            (raw.clone(), compiled)
        })
        .collect()
}

/// Check if a name should be skipped: `.git` always, then exact or glob
/// matches against the ignore patterns.
fn should_ignore_name(name: &str, patterns: &[(String, Option<Pattern>)]) -> bool {
    if name == ".git" {
        return true;
    }
    patterns.iter().any(|(raw, compiled)| {
        name == raw || compiled.as_ref().is_some_and(|p| p.matches(name))
    })
}
