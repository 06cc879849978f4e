//! Error types for the BookConnect plugin.
//!
//! This module defines the centralized error type [`BookConnectError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these conditions are fatal inside the browsing core: a missing book
//! declines the detail view, and loading failures fall back to defaults at the
//! plugin boundary.

use thiserror::Error;

/// The main error type for BookConnect operations.
///
/// # Examples
///
/// ```
/// use bookconnect::BookConnectError;
///
/// fn lookup() -> Result<(), BookConnectError> {
///     Err(BookConnectError::NotFound { id: "missing".to_string() })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookConnectError {
    /// No book in the catalog carries the requested identifier.
    ///
    /// Raised by the selection resolver. The presentation layer recovers by
    /// not opening the detail view.
    #[error("book not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve.
        id: String,
    },

    /// The catalog document is malformed or violates a catalog invariant.
    ///
    /// Covers JSON syntax errors, duplicate book identifiers, dangling author or
    /// genre keys, books without genres, and a zero page size.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the offending key and value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for BookConnect operations.
pub type Result<T> = std::result::Result<T, BookConnectError>;
