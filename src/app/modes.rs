//! Input mode state types for the application.
//!
//! The plugin is always in exactly one input mode, which decides how keys are
//! interpreted and which overlay is drawn on top of the book list:
//! - **Browse**: Navigating the list, paging, opening details
//! - **Search**: Editing the search form, with one focused field
//! - **Settings**: Choosing the display mode
//! - **Detail**: Reading a single book
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::modes::{InputMode, SearchField};
//!
//! let mode = InputMode::Search(SearchField::Title);
//! assert_eq!(SearchField::Title.next(), SearchField::Author);
//! # let _ = mode;
//! ```

/// Field focused within the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title query. Accepts character input and backspace.
    Title,
    /// Author selector. Cycled with left/right.
    Author,
    /// Genre selector. Cycled with left/right.
    Genre,
}

impl SearchField {
    /// Next field, wrapping from Genre back to Title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// Previous field, wrapping from Title to Genre.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default list navigation.
    ///
    /// Available keybindings: j/k (navigate), enter (details), m (show more),
    /// / (search), s (settings), q (quit).
    #[default]
    Browse,

    /// Search form open with the given field focused.
    Search(SearchField),

    /// Settings overlay open (day/night selection).
    Settings,

    /// Detail overlay open for the book in `AppState::detail`.
    Detail,
}
