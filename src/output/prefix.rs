//! Glyphs placed in front of each rendered entry.

use std::fmt;

use crate::error::{Result, TreeError};

/// Role of one glyph in the prefix of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixPart {
    /// Start of every line.
    Left = 0,
    /// Ancestor column whose node still has a following sibling.
    MidHasNext = 1,
    /// Ancestor column whose node was the last sibling.
    MidLast = 2,
    /// The entry's own column when a sibling follows.
    EndHasNext = 3,
    /// The entry's own column when it is the last sibling.
    EndLast = 4,
    /// Right before the entry.
    Right = 5,
}

impl PrefixPart {
    pub const ALL: [PrefixPart; 6] = [
        PrefixPart::Left,
        PrefixPart::MidHasNext,
        PrefixPart::MidLast,
        PrefixPart::EndHasNext,
        PrefixPart::EndLast,
        PrefixPart::Right,
    ];
}

impl TryFrom<usize> for PrefixPart {
    type Error = TreeError;

    fn try_from(part: usize) -> Result<Self> {
        Self::ALL
            .get(part)
            .copied()
            .ok_or(TreeError::OutOfRange { part })
    }
}

/// The six prefix glyphs, indexed by [`PrefixPart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    parts: [String; 6],
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::ascii()
    }
}

impl PrefixTable {
    /// `|-` and `\-` branches.
    pub fn ascii() -> Self {
        Self::from_parts(["", "| ", "  ", "|-", "\\-", ""])
    }

    /// Box-drawing branches, as drawn by `tree`.
    pub fn unicode() -> Self {
        Self::from_parts(["", "│ ", "  ", "├─", "└─", ""])
    }

    fn from_parts(parts: [&str; 6]) -> Self {
        Self {
            parts: parts.map(str::to_string),
        }
    }

    pub fn get(&self, part: PrefixPart) -> &str {
        &self.parts[part as usize]
    }

    pub fn set_part(&mut self, part: PrefixPart, value: impl Into<String>) {
        self.parts[part as usize] = value.into();
    }

    /// Replace the glyph at a numeric role index.
    ///
    /// Fails with [`TreeError::OutOfRange`] unless `part` is in `0..=5`, in
    /// which case the table is left untouched.
    pub fn set_prefix_part(&mut self, part: usize, value: impl fmt::Display) -> Result<()> {
        let part = PrefixPart::try_from(part)?;
        self.set_part(part, value.to_string());
        Ok(())
    }

    /// Build the prefix for an entry at `depth`, asking `has_next` about every
    /// level from 0 to `depth` inclusive.
    pub fn prefix(&self, depth: usize, has_next: impl Fn(usize) -> bool) -> String {
        let mut prefix = String::from(self.get(PrefixPart::Left));
        for level in 0..depth {
            prefix.push_str(if has_next(level) {
                self.get(PrefixPart::MidHasNext)
            } else {
                self.get(PrefixPart::MidLast)
            });
        }
        prefix.push_str(if has_next(depth) {
            self.get(PrefixPart::EndHasNext)
        } else {
            self.get(PrefixPart::EndLast)
        });
        prefix.push_str(self.get(PrefixPart::Right));
        prefix
    }
}
