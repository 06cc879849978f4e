//! Search form overlay renderer.
//!
//! Draws the title input and the author/genre selectors inside a bordered
//! box. The focused field is marked and drawn with selection colors.

use super::{render_box, BoxLine};
use crate::app::modes::SearchField;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchFormInfo;

/// Renders the search form at `row` and returns the row below the box.
pub fn render_search_form(row: usize, form: &SearchFormInfo, theme: &Theme, cols: usize) -> usize {
    let title_value = if form.focus == SearchField::Title {
        format!("{}_", form.title)
    } else {
        form.title.clone()
    };

    let lines = vec![
        BoxLine::heading(" Search books"),
        BoxLine::blank(),
        field_line("Title ", &title_value, form.focus == SearchField::Title),
        field_line("Author", &format!("< {} >", form.author), form.focus == SearchField::Author),
        field_line("Genre ", &format!("< {} >", form.genre), form.focus == SearchField::Genre),
    ];

    render_box(row, &lines, theme, cols)
}

fn field_line(label: &str, value: &str, focused: bool) -> BoxLine {
    let marker = if focused { '▸' } else { ' ' };
    let text = format!("{marker} {label}  {value}");
    if focused {
        BoxLine::selected(text)
    } else {
        BoxLine::plain(text)
    }
}
