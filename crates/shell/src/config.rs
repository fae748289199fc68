//! Configuration read from the environment.

use std::path::PathBuf;

use ftlog::LevelFilter;

/// Where and how verbosely the CLI logs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for log files. `NEM_LOG_DIR`, default `logs`.
    pub log_dir: PathBuf,
    /// Maximum level to log. `NEM_LOG_LEVEL`, default `info`.
    pub log_level: LevelFilter,
}

impl Config {
    /// Create a new configuration from environment variables, falling back to
    /// the defaults for any that are unset.
    pub fn from_env() -> Result<Self, String> {
        let log_dir = std::env::var_os("NEM_LOG_DIR").map_or_else(|| PathBuf::from("logs"), PathBuf::from);

        let log_level = match std::env::var("NEM_LOG_LEVEL") {
            Ok(level) => level
                .parse::<LevelFilter>()
                .map_err(|e| format!("Invalid NEM_LOG_LEVEL {level:?}: {e}"))?,
            Err(_) => LevelFilter::Info,
        };

        Ok(Self { log_dir, log_level })
    }
}
