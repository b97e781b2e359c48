//! Log setup for the demo binary.
//!
//! `RUST_LOG` overrides the console level (e.g. `tagfield::engine=trace`).
//! Engine decisions are also kept in `logs/tagfield.log` under the config dir,
//! rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the console layer at `console_level` plus the file layer.
///
/// A missing or unwritable config dir only disables the file layer.
pub fn init(console_level: &str) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("File logging disabled: {:#}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, "tagfield.log"))
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("tagfield=debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
