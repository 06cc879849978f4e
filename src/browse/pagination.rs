//! Pagination state over the active match set.
//!
//! Rendering is cumulative: every "show more" appends one more page-size batch
//! to what is already on screen, and the list only starts over when the match
//! set is replaced.

use crate::domain::Book;

/// Page cursor and active match set.
///
/// # Invariants
///
/// - `page_cursor` is 0 immediately after [`reset_with`](Self::reset_with)
/// - `page_cursor` only grows while [`remaining_count`](Self::remaining_count) is positive
/// - `page_size` is positive and fixed for the lifetime of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_cursor: usize,
    active_matches: Vec<Book>,
    page_size: usize,
}

impl PaginationState {
    /// Creates a state over `matches` with the cursor at the first page.
    ///
    /// A zero `page_size` is raised to 1.
    #[must_use]
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            page_cursor: 0,
            active_matches: matches,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the match set and rewinds the cursor to 0.
    pub fn reset_with(&mut self, matches: Vec<Book>) {
        tracing::debug!(
            previous_count = self.active_matches.len(),
            new_count = matches.len(),
            "match set replaced"
        );
        self.active_matches = matches;
        self.page_cursor = 0;
    }

    /// Moves to the next page if any books remain.
    ///
    /// Returns `false` and leaves the state untouched when the visible window
    /// already covers every match.
    pub fn advance(&mut self) -> bool {
        if self.remaining_count() == 0 {
            tracing::debug!(page_cursor = self.page_cursor, "advance ignored, no remaining books");
            return false;
        }
        self.page_cursor += 1;
        tracing::debug!(page_cursor = self.page_cursor, "advanced page cursor");
        true
    }

    /// Number of matches not yet revealed, never negative.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.active_matches.len().saturating_sub(self.window_end_unclamped())
    }

    /// Every match revealed so far: `matches[0 .. (cursor + 1) * page_size]`.
    #[must_use]
    pub fn visible_window(&self) -> &[Book] {
        &self.active_matches[..self.window_end()]
    }

    /// The batch revealed by the current page: `matches[cursor * page_size .. (cursor + 1) * page_size]`.
    #[must_use]
    pub fn current_batch(&self) -> &[Book] {
        let start = (self.page_cursor * self.page_size).min(self.active_matches.len());
        &self.active_matches[start..self.window_end()]
    }

    #[must_use]
    pub const fn page_cursor(&self) -> usize {
        self.page_cursor
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn active_matches(&self) -> &[Book] {
        &self.active_matches
    }

    fn window_end_unclamped(&self) -> usize {
        (self.page_cursor + 1).saturating_mul(self.page_size)
    }

    fn window_end(&self) -> usize {
        self.window_end_unclamped().min(self.active_matches.len())
    }
}
