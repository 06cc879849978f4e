//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with match counts
//! - [`footer`]: Keybinding hints for the current mode
//! - [`table`]: Book list (TITLE, AUTHOR) and the "show more" control
//! - [`empty`]: "No results" message
//! - [`search`]: Search form overlay
//! - [`settings`]: Day/night overlay
//! - [`detail`]: Book detail overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Table Headers]
//! [Table Rows | Empty message]
//! [Blank padding]
//! [Show more]
//! [Border]
//! [Footer]
//! ```
//!
//! Overlays are drawn last, on top of the list.

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod settings;
mod table;

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayInfo, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_form;
use settings::render_settings;
use table::{render_show_more, render_table_headers, render_table_rows};

/// Horizontal margin around overlay boxes.
const OVERLAY_MARGIN: usize = 5;

/// First row of overlay boxes.
const OVERLAY_TOP_ROW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Plain,
    Heading,
    Dim,
    Selected,
}

/// One line of text inside an overlay box.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoxLine {
    text: String,
    style: LineStyle,
}

impl BoxLine {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Plain }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Heading }
    }

    fn dim(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Dim }
    }

    fn selected(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: LineStyle::Selected }
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `lines` inside a bordered, horizontally centred box.
///
/// Lines wider than the box are cut. Returns the row below the box.
fn render_box(row: usize, lines: &[BoxLine], theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(OVERLAY_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.form_border);

    position_cursor(row, OVERLAY_MARGIN + 1);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let mut current_row = row + 1;
    for line in lines {
        let text: String = line.text.chars().take(inner_width).collect();
        let padding = inner_width.saturating_sub(text_width(&text));

        position_cursor(current_row, OVERLAY_MARGIN + 1);
        print!("{border}│{}", Theme::reset());
        match line.style {
            LineStyle::Plain => print!("{}", Theme::fg(&theme.colors.text_normal)),
            LineStyle::Heading => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
            LineStyle::Dim => print!("{}", Theme::fg(&theme.colors.text_dim)),
            LineStyle::Selected => print!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            ),
        }
        print!("{text}{}{}", " ".repeat(padding), Theme::reset());
        print!("{border}│{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, OVERLAY_MARGIN + 1);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
    current_row + 1
}

/// Renders the list layout: header, table or empty message, show more, footer.
pub fn render_list_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let show_more_row = border_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders an overlay box on top of the list layout.
pub fn render_overlay(overlay: &OverlayInfo, theme: &Theme, cols: usize, rows: usize) {
    // Keep the footer visible below the box.
    let max_rows = rows.saturating_sub(OVERLAY_TOP_ROW + 2);

    match overlay {
        OverlayInfo::Search(form) => {
            render_search_form(OVERLAY_TOP_ROW, form, theme, cols);
        }
        OverlayInfo::Settings(settings) => {
            render_settings(OVERLAY_TOP_ROW, settings, theme, cols);
        }
        OverlayInfo::Detail(detail) => {
            render_detail(OVERLAY_TOP_ROW, detail, theme, cols, max_rows);
        }
    }
}
