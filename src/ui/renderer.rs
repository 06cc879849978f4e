//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Draw the list layout, then any overlay on top
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookconnect::app::AppState;
//! use bookconnect::domain::Catalog;
//! use bookconnect::ui::render;
//! use bookconnect::ui::theme::{ThemeMode, ThemeSet};
//!
//! let state = AppState::new(Arc::new(Catalog::demo()?), ThemeSet::default(), ThemeMode::Night);
//! render(&state, 24, 80);
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout with the active palette.
///
/// Does not clear the screen; every row drawn is padded to full width.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_list_layout(vm, theme, cols, rows);

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, cols, rows);
    }
}
