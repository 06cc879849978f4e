//! Book detail overlay renderer.
//!
//! Shows the title, the "Author (Year)" subtitle, the wrapped description
//! and the cover image reference of one book.

use super::{render_box, BoxLine, OVERLAY_MARGIN};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the detail overlay at `row`, limited to `max_rows` lines.
///
/// Description lines that do not fit are dropped and the last kept line
/// gets an ellipsis.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let inner_width = cols.saturating_sub(OVERLAY_MARGIN * 2 + 4);

    let mut lines = vec![
        BoxLine::heading(format!(" {}", detail.title)),
        BoxLine::dim(format!(" {}", detail.subtitle)),
        BoxLine::blank(),
    ];

    // Heading, subtitle, blanks, cover line and the two borders.
    let budget = max_rows.saturating_sub(lines.len() + 4).max(1);
    let mut description = wrap_text(&detail.description, inner_width);
    if description.len() > budget {
        description.truncate(budget);
        if let Some(last) = description.last_mut() {
            last.push_str(" ...");
        }
    }
    lines.extend(description.into_iter().map(|line| BoxLine::plain(format!(" {line}"))));

    lines.push(BoxLine::blank());
    lines.push(BoxLine::dim(format!(" Cover: {}", detail.image)));

    render_box(row, &lines, theme, cols)
}
