use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKUP_BATCH_LIMIT, MAX_BACKUP_BATCH_LIMIT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Writes per batch during import and seed. The hosted store rejects
    /// batches above 500 writes.
    pub batch_limit: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            batch_limit: DEFAULT_BACKUP_BATCH_LIMIT,
        }
    }
}

impl BackupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.batch_limit == 0 || self.batch_limit > MAX_BACKUP_BATCH_LIMIT {
            return Err(ConfigError::backup(format!(
                "backup.batch_limit must be between 1 and {MAX_BACKUP_BATCH_LIMIT}"
            )));
        }
        Ok(())
    }
}
