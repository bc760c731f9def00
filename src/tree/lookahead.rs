//! One-element lookahead over a child sequence.
//!
//! The renderer needs to know, for every open level, whether the element it
//! is sitting on has a following sibling. `Lookahead` answers that in O(1) by
//! always keeping the next element fetched ahead of the consumer.

use crate::error::{Result, TreeError};

/// Iterator adapter that keeps one element buffered ahead of `current`.
#[derive(Debug)]
pub struct Lookahead<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    next: Option<I::Item>,
}

impl<I: Iterator> Lookahead<I> {
    /// Wrap `iter`, eagerly fetching its first element so `has_next` is
    /// meaningful before the first `advance`.
    pub fn new(mut iter: I) -> Self {
        let next = iter.next();
        Self {
            iter,
            current: None,
            next,
        }
    }

    /// Promote the buffered element to `current` and fetch the one after it.
    ///
    /// Fails with [`TreeError::Exhausted`] once the sequence has run out.
    pub fn advance(&mut self) -> Result<()> {
        let promoted = self.next.take().ok_or(TreeError::Exhausted)?;
        self.current = Some(promoted);
        self.next = self.iter.next();
        Ok(())
    }

    /// The element last promoted by `advance`, if any.
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Whether another element follows `current`.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<I> Iterator for Lookahead<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()?;
        self.current.clone()
    }
}
