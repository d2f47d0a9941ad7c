//! Tracing subscriber setup
//!
//! Plain console output by default; `LOG_JSON` switches to JSON lines and
//! a log directory adds a daily rolling file.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, every argument optional
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if log_path.exists() {
            log_path
                .to_str()
                .map(|dir_str| tracing_appender::rolling::daily(dir_str, "shop-gateway"))
        } else {
            None
        }
    });

    if json.unwrap_or(false) {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter(level))
            .json()
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false);
        match file_appender {
            Some(appender) => subscriber.with_writer(appender).init(),
            None => subscriber.init(),
        }
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter(level))
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false);
        match file_appender {
            Some(appender) => subscriber.with_writer(appender).init(),
            None => subscriber.init(),
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
