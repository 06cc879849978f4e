//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, ShowMoreInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         title: "Dracula".to_string(),
//!         author: "Bram Stoker".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 3)],
//!     }],
//!     header: HeaderInfo { title: " Books (1 of 1) ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     show_more: ShowMoreInfo { text: "Show more (0)".to_string(), enabled: false },
//!     empty_state: None,
//!     overlay: None,
//! };
//! # let _ = vm;
//! ```

use crate::app::modes::SearchField;
use crate::ui::theme::ThemeMode;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows of the book list within the visible viewport.
    pub display_items: Vec<DisplayItem>,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// The "show more" control under the list.
    pub show_more: ShowMoreInfo,

    /// Message drawn in place of the list after a search without results.
    pub empty_state: Option<EmptyState>,

    /// Overlay drawn above the list, if any.
    pub overlay: Option<OverlayInfo>,
}

/// Display information for a single book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Whether this row holds the list cursor.
    pub is_selected: bool,

    /// Character ranges of the title matching the active title query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// "Show more" control display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    /// Label with remaining count, e.g. "Show more (15)".
    pub text: String,
    pub enabled: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Overlay drawn over the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayInfo {
    Search(SearchFormInfo),
    Settings(SettingsInfo),
    Detail(DetailInfo),
}

/// Search form display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormInfo {
    pub title: String,
    /// Label of the selected author option.
    pub author: String,
    /// Label of the selected genre option.
    pub genre: String,
    pub focus: SearchField,
}

/// Settings overlay display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsInfo {
    /// Mode that will be applied on confirm.
    pub pending: ThemeMode,
}

/// Detail overlay display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}
