//! Logging Infrastructure
//!
//! Structured logging setup for both development (stderr) and packaged
//! deployments (daily-rolling file under the work directory).

use std::path::Path;

/// Initialize the logger with defaults (info level, stderr)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional level and file output
///
/// When `log_dir` points at an existing directory, output goes to a
/// daily-rolling `knihomat` log file there instead of stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if dir.exists()
            && let Some(dir_str) = dir.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "knihomat");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
