//! Render instructions and side effects produced by the event handler.
//!
//! The browsing core never draws anything itself. After each event the
//! handler returns a list of [`Action`]s; the plugin runtime executes them in
//! order, applying render instructions to the presentation state and
//! forwarding the rest to Zellij.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::Action;
//! use bookconnect::browse::ShowMoreAffordance;
//!
//! let actions = vec![
//!     Action::UpdateShowMore(ShowMoreAffordance::new(15)),
//!     Action::SetEmptyMessageVisible(false),
//! ];
//! # let _ = actions;
//! ```

use crate::browse::{BookSummary, DetailView, RenderFrame, ShowMoreAffordance};
use crate::ui::theme::ThemeMode;

/// Commands for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Appends summaries to the book list, clearing it first if `is_reset`.
    RenderBatch {
        summaries: Vec<BookSummary>,
        is_reset: bool,
    },

    /// Updates the "show more" control.
    UpdateShowMore(ShowMoreAffordance),

    /// Shows or hides the "no results" message.
    SetEmptyMessageVisible(bool),

    /// Opens the detail overlay for a book.
    OpenDetail(DetailView),

    /// The clicked item did not resolve; leave the detail overlay closed.
    DeclineDetail,

    /// Switches the display palette.
    ApplyTheme(ThemeMode),

    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,
}

impl Action {
    /// Expands a render frame into the instructions that apply it.
    ///
    /// The empty-results message is only touched by frames that reset the list,
    /// so paging never hides or shows it.
    #[must_use]
    pub fn from_frame(frame: RenderFrame) -> Vec<Self> {
        let mut actions = Vec::with_capacity(3);
        let is_reset = frame.is_reset;

        actions.push(Self::RenderBatch {
            summaries: frame.batch,
            is_reset,
        });
        actions.push(Self::UpdateShowMore(frame.show_more));
        if is_reset {
            actions.push(Self::SetEmptyMessageVisible(frame.empty_results));
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_frame_controls_empty_message() {
        let frame = RenderFrame {
            batch: Vec::new(),
            is_reset: true,
            show_more: ShowMoreAffordance::new(0),
            empty_results: true,
        };

        assert_eq!(
            Action::from_frame(frame),
            vec![
                Action::RenderBatch { summaries: Vec::new(), is_reset: true },
                Action::UpdateShowMore(ShowMoreAffordance::new(0)),
                Action::SetEmptyMessageVisible(true),
            ]
        );
    }

    #[test]
    fn paging_frame_leaves_empty_message_alone() {
        let frame = RenderFrame {
            batch: Vec::new(),
            is_reset: false,
            show_more: ShowMoreAffordance::new(2),
            empty_results: false,
        };

        let actions = Action::from_frame(frame);
        assert_eq!(actions.len(), 2);
        assert!(!actions.iter().any(|a| matches!(a, Action::SetEmptyMessageVisible(_))));
    }
}
