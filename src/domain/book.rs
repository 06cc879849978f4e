//! Book record domain model.
//!
//! A [`Book`] is an immutable catalog entry. Authors and genres are referenced
//! by identifier and resolved through the catalog's name mappings.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Identifier, unique across the catalog
/// - `title`: Display title
/// - `author`: Author identifier (key into the author mapping)
/// - `image`: Cover image URI
/// - `published`: Publication timestamp (RFC 3339 in JSON)
/// - `description`: Long-form description shown in the detail view
/// - `genres`: Genre identifiers (keys into the genre mapping), never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub published: DateTime<Utc>,
    pub description: String,
    pub genres: Vec<String>,
}

impl Book {
    /// Returns the calendar year of publication.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookconnect::Book;
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Dune".to_string(),
    ///     author: "a1".to_string(),
    ///     image: "https://example.com/dune.jpg".to_string(),
    ///     published: "1965-08-01T00:00:00Z".parse().unwrap(),
    ///     description: String::new(),
    ///     genres: vec!["g1".to_string()],
    /// };
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if the book is tagged with the given genre.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frankenstein() -> Book {
        Book {
            id: "b-frank".to_string(),
            title: "Frankenstein".to_string(),
            author: "a-shelley".to_string(),
            image: String::new(),
            published: "1818-01-01T00:00:00Z".parse().unwrap(),
            description: String::new(),
            genres: vec!["g-horror".to_string(), "g-scifi".to_string()],
        }
    }

    #[test]
    fn has_genre_checks_every_tag() {
        let book = frankenstein();
        assert!(book.has_genre("g-horror"));
        assert!(book.has_genre("g-scifi"));
        assert!(!book.has_genre("g-romance"));
        assert!(!book.has_genre("g-sci"));
    }

    #[test]
    fn published_year_uses_utc_date() {
        assert_eq!(frankenstein().published_year(), 1818);
    }
}
