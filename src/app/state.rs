//! Application state management and view model computation.
//!
//! [`AppState`] pairs the browsing core ([`Browser`]) with the presentation
//! state that render instructions are applied to: the accumulated book list,
//! the list cursor, the "show more" control, the empty message, overlays, and
//! the active palette.
//!
//! # State Components
//!
//! - **Browser**: Catalog, match set and page cursor (the only business state)
//! - **Items**: Book rows rendered so far, appended batch by batch
//! - **Selection**: List cursor within the rendered rows
//! - **Input Mode**: Which overlay (if any) receives keys
//! - **Theme**: Day/night palettes and the active mode
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bookconnect::app::AppState;
//! use bookconnect::domain::Catalog;
//! use bookconnect::ui::theme::{ThemeMode, ThemeSet};
//!
//! let catalog = Arc::new(Catalog::demo()?);
//! let state = AppState::new(catalog, ThemeSet::default(), ThemeMode::Day);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(!viewmodel.display_items.is_empty());
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use super::actions::Action;
use super::form::SearchForm;
use super::modes::{InputMode, SearchField};
use crate::browse::{BookSummary, Browser, DetailView, ShowMoreAffordance};
use crate::domain::Catalog;
use crate::ui::theme::{Theme, ThemeMode, ThemeSet};
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, OverlayInfo, SearchFormInfo,
    SettingsInfo, ShowMoreInfo, UIViewModel,
};
use std::sync::Arc;

/// Rows used by header, borders, column headers, the show-more line and footer.
const CHROME_ROWS: usize = 8;

/// Width of the title column, including its trailing gap.
pub const TITLE_COLUMN_WIDTH: usize = 48;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Browsing core: catalog, match set, page cursor.
    pub browser: Browser,

    /// Rows rendered so far. Cleared on reset frames, appended otherwise.
    pub items: Vec<BookSummary>,

    /// Zero-based list cursor within `items`.
    pub selected_index: usize,

    /// Last "show more" affordance received.
    pub show_more: ShowMoreAffordance,

    /// Whether the "no results" message is visible.
    pub empty_message_visible: bool,

    pub input_mode: InputMode,

    /// Search form contents, kept between openings.
    pub search_form: SearchForm,

    /// Title query of the last submitted search, used for highlighting.
    pub active_title_query: String,

    /// Book shown in the detail overlay.
    pub detail: Option<DetailView>,

    pub themes: ThemeSet,

    /// Palette currently applied.
    pub theme_mode: ThemeMode,

    /// Mode selected in the settings overlay, applied on confirm.
    pub pending_theme_mode: ThemeMode,
}

impl AppState {
    /// Creates the state and applies the startup frame (first page of the full catalog).
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, themes: ThemeSet, theme_mode: ThemeMode) -> Self {
        let search_form = SearchForm::new(&catalog);
        let browser = Browser::new(catalog);
        let startup = browser.start();

        let mut state = Self {
            browser,
            items: Vec::new(),
            selected_index: 0,
            show_more: ShowMoreAffordance::default(),
            empty_message_visible: false,
            input_mode: InputMode::Browse,
            search_form,
            active_title_query: String::new(),
            detail: None,
            themes,
            theme_mode,
            pending_theme_mode: theme_mode,
        };

        for action in Action::from_frame(startup) {
            state.apply(&action);
        }

        state
    }

    /// Palette for the active mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    /// Applies a render instruction to the presentation state.
    ///
    /// `CloseFocus` is a runtime concern and is ignored here.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::RenderBatch { summaries, is_reset } => {
                if *is_reset {
                    self.items.clear();
                    self.selected_index = 0;
                }
                self.items.extend(summaries.iter().cloned());
                tracing::debug!(appended = summaries.len(), total = self.items.len(), "list updated");
            }
            Action::UpdateShowMore(affordance) => {
                self.show_more = affordance.clone();
            }
            Action::SetEmptyMessageVisible(visible) => {
                self.empty_message_visible = *visible;
            }
            Action::OpenDetail(detail) => {
                self.detail = Some(detail.clone());
                self.input_mode = InputMode::Detail;
            }
            Action::DeclineDetail => {
                tracing::debug!("detail view declined");
            }
            Action::ApplyTheme(mode) => {
                self.theme_mode = *mode;
                self.pending_theme_mode = *mode;
            }
            Action::CloseFocus => {}
        }
    }

    /// Moves the list cursor down, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Moves the list cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Row under the list cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&BookSummary> {
        self.items.get(self.selected_index)
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// The visible slice of the list is centred on the cursor and shifted so
    /// that it stays full near the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let empty_state = self.compute_empty_state();
        let display_items = if empty_state.is_some() {
            vec![]
        } else {
            self.compute_display_items(rows)
        };

        UIViewModel {
            display_items,
            header: self.compute_header(),
            footer: self.compute_footer(),
            show_more: self.compute_show_more(),
            empty_state,
            overlay: self.compute_overlay(cols),
        }
    }

    fn compute_display_items(&self, rows: usize) -> Vec<DisplayItem> {
        if self.items.is_empty() {
            return vec![];
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.items.len());
        if visible_end - visible_start < available_rows && self.items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let needle = self.active_title_query.trim().to_lowercase();

        self.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| DisplayItem {
                title: truncate(&item.title, TITLE_COLUMN_WIDTH - 2),
                author: item.author_name.clone(),
                is_selected: visible_start + relative_idx == self.selected_index,
                highlight_ranges: highlight_range(&item.title, &needle).into_iter().collect(),
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.browser.pagination().active_matches().len();
        HeaderInfo {
            title: format!(" Books ({} of {total}) ", self.items.len()),
        }
    }

    fn compute_show_more(&self) -> ShowMoreInfo {
        ShowMoreInfo {
            text: format!("{} ({})", self.show_more.label, self.show_more.remaining),
            enabled: self.show_more.enabled,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.empty_message_visible {
            return Some(EmptyState {
                message: "No results found. Your filters might be too narrow.".to_string(),
                subtitle: "Press / to change the search".to_string(),
            });
        }

        self.browser.catalog().books().is_empty().then(|| EmptyState {
            message: "The catalog is empty.".to_string(),
            subtitle: "Check the catalog_file setting and the trace log".to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            InputMode::Search(SearchField::Title) => {
                "Type to edit title  Tab: next field  Enter: search  Esc: cancel"
            }
            InputMode::Search(_) => "←/→: change option  Tab: next field  Enter: search  Esc: cancel",
            InputMode::Settings => "←/→: day/night  Enter: save  Esc: cancel",
            InputMode::Detail => "Esc/Enter: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self, cols: usize) -> Option<OverlayInfo> {
        match self.input_mode {
            InputMode::Browse => None,
            InputMode::Search(focus) => Some(OverlayInfo::Search(SearchFormInfo {
                title: self.search_form.title.clone(),
                author: self.search_form.author().map(|o| o.label.clone()).unwrap_or_default(),
                genre: self.search_form.genre().map(|o| o.label.clone()).unwrap_or_default(),
                focus,
            })),
            InputMode::Settings => Some(OverlayInfo::Settings(SettingsInfo {
                pending: self.pending_theme_mode,
            })),
            InputMode::Detail => self.detail.as_ref().map(|detail| {
                OverlayInfo::Detail(DetailInfo {
                    title: truncate(&detail.title, cols.saturating_sub(14)),
                    subtitle: detail.subtitle.clone(),
                    description: detail.description.clone(),
                    image: detail.image.clone(),
                })
            }),
        }
    }
}

/// Shortens `text` to at most `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Character range of the first case-insensitive occurrence of `needle` in `text`.
///
/// `needle` must already be lower-cased.
fn highlight_range(text: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let pattern: Vec<char> = needle.chars().collect();
    if haystack.len() != text.chars().count() {
        // Lower-casing changed the length; character offsets would not line up.
        return None;
    }

    haystack
        .windows(pattern.len())
        .position(|window| window == pattern.as_slice())
        .map(|start| (start, start + pattern.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn demo_state() -> AppState {
        AppState::new(Arc::new(Catalog::demo().unwrap()), ThemeSet::default(), ThemeMode::Day)
    }

    #[test]
    fn startup_renders_first_page() {
        let state = demo_state();
        assert_eq!(state.items.len(), 6);
        assert!(state.show_more.enabled);
        assert_eq!(state.show_more.remaining, 10);
        assert!(!state.empty_message_visible);
    }

    #[test]
    fn batches_append_until_reset() {
        let mut state = demo_state();
        let extra = BookSummary {
            id: "x".to_string(),
            title: "Extra".to_string(),
            author_name: "Nobody".to_string(),
            image: String::new(),
        };

        state.selected_index = 3;
        state.apply(&Action::RenderBatch { summaries: vec![extra.clone()], is_reset: false });
        assert_eq!(state.items.len(), 7);
        assert_eq!(state.selected_index, 3);

        state.apply(&Action::RenderBatch { summaries: vec![extra], is_reset: true });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_wraps() {
        let mut state = demo_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 5);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_reports_counts_and_affordance() {
        let state = demo_state();
        let vm = state.compute_viewmodel(40, 100);

        assert_eq!(vm.header.title, " Books (6 of 16) ");
        assert_eq!(vm.show_more.text, "Show more (10)");
        assert!(vm.show_more.enabled);
        assert!(vm.display_items[0].is_selected);
        assert!(vm.overlay.is_none());
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = demo_state();
        state.selected_index = 5;
        let vm = state.compute_viewmodel(CHROME_ROWS + 3, 100);

        assert_eq!(vm.display_items.len(), 3);
        assert!(vm.display_items[2].is_selected);
    }

    #[test]
    fn empty_message_replaces_list() {
        let mut state = demo_state();
        state.apply(&Action::SetEmptyMessageVisible(true));
        let vm = state.compute_viewmodel(40, 100);

        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn highlight_is_case_insensitive() {
        assert_eq!(highlight_range("The Time Machine", "time"), Some((4, 8)));
        assert_eq!(highlight_range("Emma", "zz"), None);
        assert_eq!(highlight_range("Emma", ""), None);
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate("Alice's Adventures", 10), "Alice's...");
        assert_eq!(truncate("Émile", 10), "Émile");
    }
}
