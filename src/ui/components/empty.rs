//! Empty state component renderer.
//!
//! Shown in place of the book list when a search matched nothing.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centred two-line message starting at `row`.
///
/// Used both for a search with no matches and for an empty catalog.
///
/// # Parameters
///
/// * `row` - First row of the message (1-indexed)
/// * `empty` - Message and subtitle text
/// * `theme` - Active palette
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next free row (`row + 2`)
///
/// # Layout
///
/// ```text
///   No results found. Your filters might be too narrow.   <- empty_state_fg
///              Press / to change the search               <- dim text_dim
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = text_width(&empty.message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = text_width(&empty.subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}
