use crate::{ConfigError, ConfigErrorResult, DEFAULT_ACTIVATION_DISTANCE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel (in layout units) required before a press becomes a
    /// drag. Keeps plain clicks from hijacking the card underneath.
    pub activation_distance: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl DragConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(ConfigError::drag(
                "drag.activation_distance must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}
