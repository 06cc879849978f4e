//! File-based tracing for the plugin.
//!
//! A plugin has no terminal of its own to log to, so events from the
//! `tracing` macros are formatted as plain text and appended to a trace file
//! in the plugin data directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → bookconnect-trace.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/bookconnect/bookconnect-trace.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (any `EnvFilter`
//! directive, e.g. `"debug"` or `"bookconnect::browse=trace"`), defaulting to
//! `"info"`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookconnect::observability::init_tracing;
//! use bookconnect::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer used as the `fmt` layer's writer

mod file_writer;
mod init;

pub use file_writer::{FileWriter, TraceLine};
pub use init::{init_tracing, TRACE_FILE_NAME};
