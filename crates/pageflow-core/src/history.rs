//! Bounded navigation history.

use heapless::Vec;

use crate::{NavError, NavResult, page::PageId};

/// Visited page IDs, oldest first. The last entry is the page that is visible
/// or currently transitioning in.
#[derive(Clone, Debug, Default)]
pub struct History<const N: usize> {
    entries: Vec<PageId, N>,
}

impl<const N: usize> History<N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.entries
    }

    pub fn top(&self) -> Option<PageId> {
        self.entries.last().copied()
    }

    /// Entry just below the top.
    pub fn below_top(&self) -> Option<PageId> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        self.entries.get(len - 2).copied()
    }

    pub fn push(&mut self, id: PageId) -> NavResult {
        self.entries.push(id).map_err(|_| NavError::HistoryFull)
    }

    /// Overwrites the top entry, or pushes when empty.
    pub fn replace_top(&mut self, id: PageId) -> NavResult {
        match self.entries.last_mut() {
            Some(top) => {
                *top = id;
                Ok(())
            }
            None => self.push(id),
        }
    }

    pub fn pop(&mut self) -> Option<PageId> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
