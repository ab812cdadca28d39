//! Logging Infrastructure
//!
//! `tracing-subscriber` setup: an `EnvFilter` driven by `RUST_LOG` with a
//! fallback level, optional JSON output, and optional daily rolling files.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
fn default_filter(level: &str) -> String {
    format!("cafe_server={level},shared={level},tower_http={level},security={level}")
}

/// Initialize the logger with stdout output
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional file output
///
/// When `log_dir` exists, logs go to a daily rolling `cafe-server.log.*`
/// file and the returned guard must be kept alive to flush them.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_dir = log_dir.filter(|dir| Path::new(dir).is_dir());

    match (file_dir, json.unwrap_or(false)) {
        (Some(dir), as_json) => {
            let file_appender = tracing_appender::rolling::daily(dir, "cafe-server.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let builder = builder.with_writer(writer).with_ansi(false);
            if as_json {
                builder.json().init();
            } else {
                builder.init();
            }
            Some(guard)
        }
        (None, true) => {
            builder.json().init();
            None
        }
        (None, false) => {
            builder.init();
            None
        }
    }
}
