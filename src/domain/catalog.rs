//! Catalog data provider.
//!
//! The catalog bundles the three immutable collections the browser works
//! from (books, author names, genre names) together with the page size. It is
//! loaded once from a JSON document, validated, and then shared read-only.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "books_per_page": 36,
//!   "authors": { "a1": "Frank Herbert" },
//!   "genres": { "g1": "Science Fiction" },
//!   "books": [
//!     {
//!       "id": "b1",
//!       "title": "Dune",
//!       "author": "a1",
//!       "image": "https://example.com/dune.jpg",
//!       "published": "1965-08-01T00:00:00Z",
//!       "description": "...",
//!       "genres": ["g1"]
//!     }
//!   ]
//! }
//! ```

use crate::domain::book::Book;
use crate::domain::error::{BookConnectError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Page size used when the document does not specify `books_per_page`.
pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

/// Bundled sample catalog used when no catalog file is configured.
const DEMO_CATALOG: &str = include_str!("../../data/demo-catalog.json");

/// Identifier to display-name mapping that remembers document order.
///
/// Lookups go through a hash index; iteration follows the order in which
/// entries appeared in the source document, which is the order the search
/// form presents them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl NameIndex {
    /// Returns the display name for an identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.entries[i].1.as_str())
    }

    /// Returns `true` if the identifier is known.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates `(id, name)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, id: String, name: String) {
        if let Some(&i) = self.index.get(&id) {
            self.entries[i].1 = name;
        } else {
            self.index.insert(id.clone(), self.entries.len());
            self.entries.push((id, name));
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut names = Self::default();
        for (id, name) in iter {
            names.insert(id.into(), name.into());
        }
        names
    }
}

impl Serialize for NameIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NameIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NameIndexVisitor;

        impl<'de> Visitor<'de> for NameIndexVisitor {
            type Value = NameIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of identifiers to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<NameIndex, A::Error> {
                let mut names = NameIndex::default();
                while let Some((id, name)) = access.next_entry::<String, String>()? {
                    names.insert(id, name);
                }
                Ok(names)
            }
        }

        deserializer.deserialize_map(NameIndexVisitor)
    }
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default = "default_books_per_page")]
    books_per_page: usize,
    #[serde(default)]
    authors: NameIndex,
    #[serde(default)]
    genres: NameIndex,
    #[serde(default)]
    books: Vec<Book>,
}

const fn default_books_per_page() -> usize {
    DEFAULT_BOOKS_PER_PAGE
}

/// The validated, immutable book catalog.
///
/// Construct through [`Catalog::new`] or one of the loaders; every
/// constructor enforces the catalog invariants:
///
/// - book identifiers are unique
/// - every book's author resolves in the author mapping
/// - every book has at least one genre and each genre resolves
/// - the page size is positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameIndex,
    genres: NameIndex,
    page_size: usize,
}

impl Catalog {
    /// Builds a catalog, validating all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Catalog`] describing the first violated invariant.
    pub fn new(books: Vec<Book>, authors: NameIndex, genres: NameIndex, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BookConnectError::Catalog("books_per_page must be positive".to_string()));
        }

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(BookConnectError::Catalog(format!("duplicate book id: {}", book.id)));
            }
            if !authors.contains(&book.author) {
                return Err(BookConnectError::Catalog(format!(
                    "book {} references unknown author {}",
                    book.id, book.author
                )));
            }
            if book.genres.is_empty() {
                return Err(BookConnectError::Catalog(format!("book {} has no genres", book.id)));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains(g)) {
                return Err(BookConnectError::Catalog(format!(
                    "book {} references unknown genre {genre}",
                    book.id
                )));
            }
        }

        tracing::debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            page_size = page_size,
            "catalog validated"
        );

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    /// Creates a catalog with no books.
    ///
    /// Used by the plugin when the configured catalog cannot be loaded.
    #[must_use]
    pub fn empty(page_size: usize) -> Self {
        Self {
            books: Vec::new(),
            authors: NameIndex::default(),
            genres: NameIndex::default(),
            page_size: page_size.max(1),
        }
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Catalog`] if the JSON is malformed or the
    /// document violates a catalog invariant.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| BookConnectError::Catalog(format!("failed to parse JSON: {e}")))?;

        Self::new(document.books, document.authors, document.genres, document.books_per_page)
    }

    /// Reads and validates a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Io`] if the file cannot be read, or
    /// [`BookConnectError::Catalog`] if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_from_file", path = ?path.as_ref()).entered();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads the bundled sample catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document is invalid.
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_CATALOG)
    }

    /// Returns a copy of this catalog with a different page size.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Catalog`] if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BookConnectError::Catalog("books_per_page must be positive".to_string()));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// All books in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub const fn authors(&self) -> &NameIndex {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &NameIndex {
        &self.genres
    }

    /// Number of books revealed per "show more" step.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Display name of an author, or an empty string if unknown.
    #[must_use]
    pub fn author_name(&self, id: &str) -> &str {
        self.authors.get(id).unwrap_or_default()
    }
}
