//! Logging to a file.

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

use crate::config::Config;

/// Configures the logger.
///
/// Logs go to `<log_dir>/<file_name>.log`, rotated daily. The logger's own
/// diagnostics go to `<file_name>.err.log` next to it.
///
/// # Errors
///
/// - If the logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str, config: &Config) -> Result<(LoggerGuard, PathBuf), String> {
    if !config.log_dir.exists() {
        std::fs::create_dir_all(&config.log_dir).map_err(|e| e.to_string())?;
    }
    let logs_dir = config.log_dir.canonicalize().map_err(|e| e.to_string())?;
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(config.log_level)
        // pass None to `root` to write to stderr instead
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Debug)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
