//! Browsing core: filtering, pagination, render coordination and selection.
//!
//! [`Browser`] is the single component that owns browsing state. Every
//! transition runs synchronously and returns the render instructions the
//! presentation layer needs:
//!
//! ```text
//! Search(criteria) → filter → reset_with → RenderFrame (reset)
//! ShowMore         → advance            → RenderFrame (append) | nothing
//! SelectItem(id)   → resolve            → Book | NotFound
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Pure catalog filter
//! - [`pagination`]: Page cursor and active match set
//! - [`render`]: Render frame computation
//! - [`selection`]: Identifier lookup and detail payload
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bookconnect::browse::Browser;
//! use bookconnect::domain::{Catalog, FilterCriteria};
//!
//! let catalog = Arc::new(Catalog::demo()?);
//! let mut browser = Browser::new(Arc::clone(&catalog));
//!
//! let first = browser.start();
//! assert!(first.is_reset);
//!
//! let more = browser.show_more();
//! assert!(more.is_some());
//!
//! let frame = browser.search(FilterCriteria::any());
//! assert_eq!(browser.pagination().page_cursor(), 0);
//! # let _ = frame;
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

pub mod filter;
pub mod pagination;
pub mod render;
pub mod selection;

pub use filter::filter;
pub use pagination::PaginationState;
pub use render::{coordinate, BookSummary, RenderFrame, RenderTrigger, ShowMoreAffordance, SHOW_MORE_LABEL};
pub use selection::{resolve, DetailView};

use crate::domain::{Book, Catalog, FilterCriteria, Result};
use std::sync::Arc;

/// Owns the browsing state over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Arc<Catalog>,
    pagination: PaginationState,
}

impl Browser {
    /// Creates a browser positioned on the first page of the full catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let pagination = PaginationState::new(catalog.books().to_vec(), catalog.page_size());
        Self { catalog, pagination }
    }

    /// Frame for the initial, unfiltered state.
    #[must_use]
    pub fn start(&self) -> RenderFrame {
        coordinate(&self.pagination, self.catalog.authors(), RenderTrigger::Startup)
    }

    /// Applies a search: replaces the match set and rewinds to the first page.
    pub fn search(&mut self, criteria: FilterCriteria) -> RenderFrame {
        let _span = tracing::debug_span!("browser_search").entered();

        let matches = filter(self.catalog.books(), &criteria);
        self.pagination.reset_with(matches);
        coordinate(&self.pagination, self.catalog.authors(), RenderTrigger::Search)
    }

    /// Reveals the next page.
    ///
    /// Returns `None` without changing state when every match is already visible.
    pub fn show_more(&mut self) -> Option<RenderFrame> {
        self.pagination
            .advance()
            .then(|| coordinate(&self.pagination, self.catalog.authors(), RenderTrigger::ShowMore))
    }

    /// Looks up a book by identifier across the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::NotFound`](crate::BookConnectError::NotFound)
    /// if the identifier is unknown.
    pub fn select(&self, id: &str) -> Result<&Book> {
        resolve(self.catalog.books(), id)
    }

    /// Detail payload for a resolved book.
    #[must_use]
    pub fn detail(&self, book: &Book) -> DetailView {
        DetailView::new(book, &self.catalog)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NameIndex, Selector};
    use crate::BookConnectError;

    fn catalog_of(count: usize, page_size: usize) -> Arc<Catalog> {
        let books = (0..count)
            .map(|i| Book {
                id: format!("book-{i}"),
                title: format!("Volume {i}"),
                author: format!("a{}", i % 3),
                image: format!("https://example.com/{i}.png"),
                published: "2010-06-01T00:00:00Z".parse().unwrap(),
                description: format!("Description {i}"),
                genres: vec![format!("g{}", i % 5)],
            })
            .collect();
        let authors: NameIndex = (0..3).map(|i| (format!("a{i}"), format!("Author {i}"))).collect();
        let genres: NameIndex = (0..5).map(|i| (format!("g{i}"), format!("Genre {i}"))).collect();
        Arc::new(Catalog::new(books, authors, genres, page_size).unwrap())
    }

    fn rendered_ids(frames: &[RenderFrame]) -> Vec<String> {
        let mut list = Vec::new();
        for frame in frames {
            if frame.is_reset {
                list.clear();
            }
            list.extend(frame.batch.iter().map(|s| s.id.clone()));
        }
        list
    }

    #[test]
    fn scenario_initial_window() {
        let browser = Browser::new(catalog_of(25, 10));
        let frame = browser.start();

        assert_eq!(frame.batch.len(), 10);
        assert!(frame.show_more.enabled);
        assert_eq!(frame.show_more.remaining, 15);
        assert!(!frame.empty_results);
    }

    #[test]
    fn scenario_paging_to_the_end() {
        let mut browser = Browser::new(catalog_of(25, 10));
        let mut frames = vec![browser.start()];

        let second = browser.show_more().unwrap();
        assert_eq!(second.show_more.remaining, 5);
        assert!(second.show_more.enabled);
        frames.push(second);
        assert_eq!(rendered_ids(&frames).len(), 20);

        let third = browser.show_more().unwrap();
        assert_eq!(third.show_more.remaining, 0);
        assert!(!third.show_more.enabled);
        frames.push(third);
        assert_eq!(rendered_ids(&frames).len(), 25);

        assert!(browser.show_more().is_none());
        assert_eq!(browser.pagination().visible_window().len(), 25);
    }

    #[test]
    fn scenario_search_without_matches() {
        let mut browser = Browser::new(catalog_of(25, 10));
        let frame = browser.search(FilterCriteria {
            title: String::new(),
            author: Selector::Any,
            genre: Selector::Only("g7".to_string()),
        });

        assert!(frame.empty_results);
        assert!(frame.batch.is_empty());
        assert!(!frame.show_more.enabled);
        assert_eq!(frame.show_more.remaining, 0);
        assert!(browser.pagination().active_matches().is_empty());
    }

    #[test]
    fn scenario_unknown_selection() {
        let browser = Browser::new(catalog_of(25, 10));
        assert!(matches!(
            browser.select("id-not-present"),
            Err(BookConnectError::NotFound { .. })
        ));
    }

    #[test]
    fn search_resets_cursor_and_list() {
        let mut browser = Browser::new(catalog_of(25, 4));
        let mut frames = vec![browser.start()];
        frames.push(browser.show_more().unwrap());

        let criteria = FilterCriteria {
            author: Selector::Only("a1".to_string()),
            ..FilterCriteria::any()
        };
        frames.push(browser.search(criteria));

        assert_eq!(browser.pagination().page_cursor(), 0);
        let ids = rendered_ids(&frames);
        assert_eq!(ids, vec!["book-1", "book-4", "book-7", "book-10"]);
    }

    #[test]
    fn selection_survives_narrowed_filter() {
        let mut browser = Browser::new(catalog_of(25, 10));
        browser.search(FilterCriteria {
            genre: Selector::Only("g0".to_string()),
            ..FilterCriteria::any()
        });

        let book = browser.select("book-3").unwrap();
        assert_eq!(book.genres, vec!["g3"]);
        assert_eq!(browser.detail(book).subtitle, "Author 0 (2010)");
    }
}
