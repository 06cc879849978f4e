//! User interface rendering layer with component-based architecture.
//!
//! This module transforms view models into ANSI-styled output through
//! composable rendering components, with day/night palettes and title match
//! highlighting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Day/night palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeMode, ThemeSet};
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, OverlayInfo, SearchFormInfo,
    SettingsInfo, ShowMoreInfo, UIViewModel,
};
