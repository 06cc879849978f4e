//! Render coordinator.
//!
//! Turns the pagination state into a [`RenderFrame`]: the summaries to append
//! to the visible list, the "show more" affordance, and the empty-results flag.
//! The presentation layer performs the actual drawing.

use super::pagination::PaginationState;
use crate::domain::{Book, NameIndex};

/// Label of the "show more" control.
pub const SHOW_MORE_LABEL: &str = "Show more";

/// What caused a frame to be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTrigger {
    /// Initial render of the unfiltered catalog.
    Startup,
    /// A search submission replaced the match set.
    Search,
    /// The page cursor advanced.
    ShowMore,
}

impl RenderTrigger {
    /// Whether the list must be cleared before appending the batch.
    #[must_use]
    pub const fn is_reset(self) -> bool {
        matches!(self, Self::Startup | Self::Search)
    }
}

/// One row of the book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

impl BookSummary {
    /// Builds a summary, resolving the author's display name.
    #[must_use]
    pub fn from_book(book: &Book, authors: &NameIndex) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: authors.get(&book.author).unwrap_or_default().to_string(),
            image: book.image.clone(),
        }
    }
}

/// State of the "show more" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreAffordance {
    pub enabled: bool,
    pub label: &'static str,
    /// Books still hidden, clamped at zero.
    pub remaining: usize,
}

impl ShowMoreAffordance {
    /// Affordance for `remaining` hidden books.
    #[must_use]
    pub const fn new(remaining: usize) -> Self {
        Self {
            enabled: remaining > 0,
            label: SHOW_MORE_LABEL,
            remaining,
        }
    }
}

impl Default for ShowMoreAffordance {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Render instructions for one state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Newly revealed summaries, in match order.
    pub batch: Vec<BookSummary>,
    /// Clear the list before appending `batch`.
    pub is_reset: bool,
    pub show_more: ShowMoreAffordance,
    /// Set only when an explicit search produced no matches.
    pub empty_results: bool,
}

/// Computes the frame for the current pagination state.
///
/// The batch is the page the cursor points at: the whole first page after a
/// reset, or the newly revealed page after an advance.
#[must_use]
pub fn coordinate(state: &PaginationState, authors: &NameIndex, trigger: RenderTrigger) -> RenderFrame {
    let batch: Vec<BookSummary> = state
        .current_batch()
        .iter()
        .map(|book| BookSummary::from_book(book, authors))
        .collect();

    let frame = RenderFrame {
        batch,
        is_reset: trigger.is_reset(),
        show_more: ShowMoreAffordance::new(state.remaining_count()),
        empty_results: trigger == RenderTrigger::Search && state.active_matches().is_empty(),
    };

    tracing::debug!(
        trigger = ?trigger,
        batch_len = frame.batch.len(),
        remaining = frame.show_more.remaining,
        empty_results = frame.empty_results,
        "render frame computed"
    );

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book {
                id: format!("b{i}"),
                title: format!("Book {i}"),
                author: if i % 2 == 0 { "a1" } else { "a2" }.to_string(),
                image: format!("img{i}"),
                published: "2000-01-01T00:00:00Z".parse().unwrap(),
                description: String::new(),
                genres: vec!["g1".to_string()],
            })
            .collect()
    }

    fn authors() -> NameIndex {
        [("a1", "Ann"), ("a2", "Bob")].into_iter().collect()
    }

    #[test]
    fn startup_frame_resets_and_enables_more() {
        let state = PaginationState::new(books(25), 10);
        let frame = coordinate(&state, &authors(), RenderTrigger::Startup);

        assert!(frame.is_reset);
        assert_eq!(frame.batch.len(), 10);
        assert_eq!(frame.batch[1].author_name, "Bob");
        assert_eq!(frame.show_more, ShowMoreAffordance { enabled: true, label: "Show more", remaining: 15 });
        assert!(!frame.empty_results);
    }

    #[test]
    fn show_more_frame_appends_next_batch() {
        let mut state = PaginationState::new(books(25), 10);
        state.advance();
        state.advance();
        let frame = coordinate(&state, &authors(), RenderTrigger::ShowMore);

        assert!(!frame.is_reset);
        let ids: Vec<&str> = frame.batch.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b20", "b21", "b22", "b23", "b24"]);
        assert!(!frame.show_more.enabled);
        assert_eq!(frame.show_more.remaining, 0);
    }

    #[test]
    fn empty_flag_only_for_searches() {
        let state = PaginationState::new(Vec::new(), 10);

        let search = coordinate(&state, &authors(), RenderTrigger::Search);
        assert!(search.empty_results);
        assert!(search.batch.is_empty());
        assert!(!search.show_more.enabled);

        let startup = coordinate(&state, &authors(), RenderTrigger::Startup);
        assert!(!startup.empty_results);
    }

    #[test]
    fn unknown_author_renders_blank_name() {
        let summary = BookSummary::from_book(&books(1)[0], &NameIndex::default());
        assert_eq!(summary.author_name, "");
    }
}
