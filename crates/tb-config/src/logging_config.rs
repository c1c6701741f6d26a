use crate::{DEFAULT_LOG_COLORED, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output for TTYs; ignored when logging to a file
    pub colored: bool,
    /// Optional log file path. None logs to stdout.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
