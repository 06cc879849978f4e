//! Domain layer for the BookConnect plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record model
//! - [`catalog`]: Validated catalog (books, author and genre names, page size)
//! - [`criteria`]: Search filter criteria
//!
//! # Examples
//!
//! ```
//! use bookconnect::domain::{Catalog, Result};
//!
//! fn load() -> Result<Catalog> {
//!     Catalog::demo()
//! }
//!
//! assert!(load().is_ok());
//! ```

pub mod book;
pub mod catalog;
pub mod criteria;
pub mod error;

pub use book::Book;
pub use catalog::{Catalog, NameIndex, DEFAULT_BOOKS_PER_PAGE};
pub use criteria::{FilterCriteria, Selector, ANY};
pub use error::{BookConnectError, Result};
