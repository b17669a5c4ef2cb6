//! Logging infrastructure
//!
//! Structured logging setup. The TUI owns the terminal, so when a log
//! directory is configured output goes to a daily-rolling file instead of
//! stdout.

use std::path::Path;

/// Initialize the logger with the given level and optional file output
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if !log_path.exists() {
            std::fs::create_dir_all(log_path).ok();
        }
        let file_appender = tracing_appender::rolling::daily(dir, "crunchy-counter");
        subscriber.with_writer(file_appender).with_ansi(false).init();
        return;
    }

    subscriber.init();
}
