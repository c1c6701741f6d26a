mod access_config;
mod backup_config;
mod config;
mod drag_config;
mod error;
mod log_level;
mod logging_config;

pub use access_config::AccessConfig;
pub use backup_config::BackupConfig;
pub use config::Config;
pub use drag_config::DragConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_ACTIVATION_DISTANCE: f32 = 5.0;
const DEFAULT_BACKUP_BATCH_LIMIT: usize = 500;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

/// Hard cap on writes per committed batch, matching the hosted store
const MAX_BACKUP_BATCH_LIMIT: usize = 500;

#[cfg(test)]
mod tests;
