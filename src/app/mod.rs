//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the browsing
//! core. It owns the presentation state and turns key presses into browsing
//! operations.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Browser → Actions → AppState::apply / Zellij
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Render instructions and side effects emitted by the handler
//! - [`form`]: Search form contents and drop-down options
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{FormOption, SearchForm};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchField};
pub use state::AppState;
