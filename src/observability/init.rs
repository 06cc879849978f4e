//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "bookconnect-trace.log";

/// Initializes the global tracing subscriber.
///
/// Builds a registry with an `EnvFilter` from `config.trace_level`
/// (default `"info"`) and a plain-text `fmt` layer writing to the rotating
/// trace file. Any failure, such as a missing data directory or a
/// subscriber already installed, leaves tracing disabled.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if let Err(_e) = std::fs::create_dir_all(&data_dir) {
        // Silently fail if we can't create the directory
        return;
    }

    let writer = FileWriter::new(data_dir.join(TRACE_FILE_NAME));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
