//! Selection resolver.
//!
//! Maps a clicked item identifier back to its full book record. Lookups always
//! go against the whole catalog so that an item rendered under an older filter
//! still opens.

use crate::domain::{Book, BookConnectError, Catalog, Result};

/// Finds the book with identifier `id` in `catalog`.
///
/// # Errors
///
/// Returns [`BookConnectError::NotFound`] if no book carries that identifier.
pub fn resolve<'a>(catalog: &'a [Book], id: &str) -> Result<&'a Book> {
    catalog.iter().find(|book| book.id == id).ok_or_else(|| {
        tracing::debug!(id = %id, "selection did not resolve");
        BookConnectError::NotFound { id: id.to_string() }
    })
}

/// Payload of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    /// `"<author name> (<publication year>)"`.
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

impl DetailView {
    /// Builds the detail payload for `book`.
    #[must_use]
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", catalog.author_name(&book.author), book.published_year()),
            description: book.description.clone(),
            image: book.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::filter;
    use crate::domain::{FilterCriteria, Selector};

    #[test]
    fn resolves_from_full_catalog_even_when_filtered_out() {
        let catalog = Catalog::demo().unwrap();
        let criteria = FilterCriteria {
            author: Selector::Only("a-austen".to_string()),
            ..FilterCriteria::any()
        };
        let matches = filter(catalog.books(), &criteria);
        assert!(matches.iter().all(|b| b.id != "b-dracula"));

        let book = resolve(catalog.books(), "b-dracula").unwrap();
        assert_eq!(book.title, "Dracula");
    }

    #[test]
    fn missing_id_is_not_found() {
        let catalog = Catalog::demo().unwrap();
        let err = resolve(catalog.books(), "id-not-present").unwrap_err();
        assert!(matches!(err, BookConnectError::NotFound { ref id } if id == "id-not-present"));
    }

    #[test]
    fn detail_subtitle_has_author_and_year() {
        let catalog = Catalog::demo().unwrap();
        let book = resolve(catalog.books(), "b-moby").unwrap();
        let detail = DetailView::new(book, &catalog);

        assert_eq!(detail.subtitle, "Herman Melville (1851)");
        assert_eq!(detail.title, "Moby-Dick");
        assert_eq!(detail.image, book.image);
    }
}
