//! Header component renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centred, bold title bar.
///
/// The bar spans the whole width so a themed background fills the line.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `header` - Title text, e.g. `" Books (6 of 16) "`
/// * `theme` - Active palette; `header_bg` is optional
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next free row (`row + 1`)
///
/// # Layout
///
/// ```text
/// [left padding] Books (6 of 16) [right padding]
/// ```
///
/// When the padding cannot split evenly the right side gets the extra column.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
