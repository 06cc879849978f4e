//! Settings overlay renderer.

use super::{render_box, BoxLine};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsInfo;

/// Renders the day/night selector at `row` and returns the row below the box.
pub fn render_settings(row: usize, settings: &SettingsInfo, theme: &Theme, cols: usize) -> usize {
    let lines = [
        BoxLine::heading(" Settings"),
        BoxLine::blank(),
        BoxLine::selected(format!("▸ Theme  < {} >", settings.pending)),
    ];

    render_box(row, &lines, theme, cols)
}
