use crate::{AccessConfig, BackupConfig, ConfigError, ConfigErrorResult, DragConfig, LoggingConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub access: AccessConfig,
    pub drag: DragConfig,
    pub backup: BackupConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Load .env into the process environment if present
    /// 2. Check for TB_CONFIG_DIR env var, else use ./.taskboard/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply TB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        dotenvy::dotenv().ok();

        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TB_CONFIG_DIR env var > ./.taskboard/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".taskboard"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.drag.validate()?;
        self.backup.validate()?;
        self.access.validate();
        Ok(())
    }

    /// Log configuration summary (NEVER logs addresses or secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        if self.access.allowed_emails.is_empty() {
            info!("  access: unrestricted");
        } else {
            info!(
                "  access: {} allowed email(s), admin {}",
                self.access.allowed_emails.len(),
                if self.access.admin_email.is_some() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }

        info!("  drag: activation_distance={}", self.drag.activation_distance);
        info!("  backup: batch_limit={}", self.backup.batch_limit);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Access
        Self::apply_env_list("TB_ALLOWED_EMAILS", &mut self.access.allowed_emails);
        Self::apply_env_option_string("TB_ADMIN_EMAIL", &mut self.access.admin_email);

        // Drag
        Self::apply_env_parse(
            "TB_DRAG_ACTIVATION_DISTANCE",
            &mut self.drag.activation_distance,
        );

        // Backup
        Self::apply_env_parse("TB_BACKUP_BATCH_LIMIT", &mut self.backup.batch_limit);

        // Logging
        Self::apply_env_parse("TB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply a comma-separated environment variable override
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect();
        }
    }
}
