//! Book list component renderer.
//!
//! Renders the accumulated book list as a two-column table (TITLE, AUTHOR)
//! followed by the "show more" control.

use crate::app::state::TITLE_COLUMN_WIDTH;
use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ShowMoreInfo};

/// Renders the bold column headers.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `theme` - Active palette
///
/// # Returns
///
/// The next free row (`row + 1`)
///
/// # Layout
///
/// ```text
/// TITLE                                AUTHOR
/// ```
///
/// `AUTHOR` starts at column `TITLE_COLUMN_WIDTH + 1`.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$}{}", "TITLE", "AUTHOR", width = TITLE_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`.
///
/// `items` is already windowed by the view model, so every entry gets a line.
///
/// # Returns
///
/// The row after the last rendered item, or `row` when `items` is empty
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one book row. Selected rows get a full-width selection background.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    let title_len = text_width(&item.title);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.author);

    let line_len = title_len.max(TITLE_COLUMN_WIDTH) + text_width(&item.author);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the "show more" control centred on `row`.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `show_more` - Label with the remaining count, and whether it is enabled
/// * `theme` - Active palette
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next free row (`row + 1`)
///
/// # Layout
///
/// ```text
///                 [ Show more (10) ]
/// ```
///
/// Enabled controls are bold in `button_fg`; exhausted ones are dimmed.
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!("[ {} ]", show_more.text);
    let padding = cols.saturating_sub(text_width(&text)) / 2;

    position_cursor(row, 1);
    if show_more.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width(&text))));
    print!("{}", Theme::reset());
    row + 1
}
