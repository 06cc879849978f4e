//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! translates it into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime (mapped from key presses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Presentation events mutate input state directly or are lowered to
//!    semantic events
//! 4. Semantic events drive the [`Browser`](crate::browse::Browser) and
//!    return render instructions for the runtime to execute
//!
//! # Event Types
//!
//! - **Semantic**: `SearchSubmit`, `ShowMore`, `ItemClick`, `ThemeChange`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Overlays**: `OpenSearch`, `OpenSettings`, `Confirm`, `Escape`
//! - **Form input**: `Char`, `Backspace`, `NextField`, `PrevField`,
//!   `NextOption`, `PrevOption`
//! - **System**: `CloseFocus`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use bookconnect::app::{handle_event, AppState, Event};
//! use bookconnect::domain::Catalog;
//! use bookconnect::ui::theme::{ThemeMode, ThemeSet};
//!
//! let mut state = AppState::new(Arc::new(Catalog::demo()?), ThemeSet::default(), ThemeMode::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::ShowMore)?;
//! assert!(should_render);
//! for action in &actions {
//!     state.apply(action);
//! }
//! assert_eq!(state.items.len(), 12);
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use super::modes::{InputMode, SearchField};
use crate::app::{Action, AppState};
use crate::domain::error::{BookConnectError, Result};
use crate::domain::FilterCriteria;
use crate::ui::theme::ThemeMode;

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the match set with the catalog filtered by the criteria.
    SearchSubmit(FilterCriteria),
    /// Appends the next page of matches.
    ShowMore,
    /// Requests the detail view of the book with this id.
    ItemClick(String),
    /// Switches the display palette.
    ThemeChange(ThemeMode),

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Opens the search form with the title field focused.
    OpenSearch,
    /// Opens the settings overlay.
    OpenSettings,
    /// Appends a character to the title input.
    Char(char),
    /// Removes the last character from the title input.
    Backspace,
    /// Focuses the next search form field.
    NextField,
    /// Focuses the previous search form field.
    PrevField,
    /// Cycles the focused selector forward.
    NextOption,
    /// Cycles the focused selector backward.
    PrevOption,
    /// Activates the current context: open details, submit search, or save settings.
    Confirm,
    /// Closes the open overlay without applying it.
    Escape,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Reports the outcome of the permission request.
    PermissionsResult { granted: bool },
}

/// Processes an event and returns whether to re-render plus the actions to run.
///
/// # Errors
///
/// Only internal inconsistencies are reported as errors. A click on an
/// unknown id is not one; it yields [`Action::DeclineDetail`].
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchSubmit(criteria) => {
            tracing::debug!(
                title = %criteria.title,
                author = ?criteria.author,
                genre = ?criteria.genre,
                "search submitted"
            );
            state.active_title_query.clone_from(&criteria.title);
            let frame = state.browser.search(criteria.clone());
            Ok((true, Action::from_frame(frame)))
        }
        Event::ShowMore => {
            let Some(frame) = state.browser.show_more() else {
                tracing::debug!("show more ignored, matches exhausted");
                return Ok((false, vec![]));
            };
            Ok((true, Action::from_frame(frame)))
        }
        Event::ItemClick(id) => match state.browser.select(id) {
            Ok(book) => {
                tracing::debug!(book_id = %id, title = %book.title, "opening detail");
                let detail = state.browser.detail(book);
                Ok((true, vec![Action::OpenDetail(detail)]))
            }
            Err(BookConnectError::NotFound { .. }) => {
                tracing::debug!(book_id = %id, "clicked book not found");
                Ok((false, vec![Action::DeclineDetail]))
            }
            Err(e) => Err(e),
        },
        Event::ThemeChange(mode) => {
            tracing::debug!(theme = %mode, "theme changed");
            if state.input_mode == InputMode::Settings {
                state.input_mode = InputMode::Browse;
            }
            Ok((true, vec![Action::ApplyTheme(*mode)]))
        }

        Event::KeyDown => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::OpenSearch => {
            tracing::debug!("opening search form");
            state.input_mode = InputMode::Search(SearchField::Title);
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            state.pending_theme_mode = state.theme_mode;
            state.input_mode = InputMode::Settings;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchField::Title) {
                return Ok((false, vec![]));
            }
            state.search_form.title.push(*c);
            tracing::trace!(title = %state.search_form.title, "title input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchField::Title) {
                return Ok((false, vec![]));
            }
            state.search_form.title.pop();
            Ok((true, vec![]))
        }
        Event::NextField | Event::PrevField => {
            let InputMode::Search(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let field = if *event == Event::NextField { field.next() } else { field.prev() };
            state.input_mode = InputMode::Search(field);
            Ok((true, vec![]))
        }
        Event::NextOption | Event::PrevOption => {
            let step = if *event == Event::NextOption { 1 } else { -1 };
            match state.input_mode {
                InputMode::Search(SearchField::Author) => state.search_form.cycle_author(step),
                InputMode::Search(SearchField::Genre) => state.search_form.cycle_genre(step),
                InputMode::Settings => state.pending_theme_mode = state.pending_theme_mode.toggled(),
                _ => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Confirm => match state.input_mode {
            InputMode::Browse => {
                let Some(item) = state.selected_item() else {
                    tracing::debug!("no book selected");
                    return Ok((false, vec![]));
                };
                let id = item.id.clone();
                handle_event(state, &Event::ItemClick(id))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Browse;
                let criteria = state.search_form.criteria();
                let (_, actions) = handle_event(state, &Event::SearchSubmit(criteria))?;
                Ok((true, actions))
            }
            InputMode::Settings => {
                let mode = state.pending_theme_mode;
                handle_event(state, &Event::ThemeChange(mode))
            }
            InputMode::Detail => handle_event(state, &Event::Escape),
        },
        Event::Escape => {
            if state.input_mode == InputMode::Browse {
                return Ok((false, vec![]));
            }
            if state.input_mode == InputMode::Detail {
                state.detail = None;
            }
            state.pending_theme_mode = state.theme_mode;
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            tracing::debug!(granted = granted, "permission request answered");
            Ok((*granted, vec![]))
        }
    }
}
