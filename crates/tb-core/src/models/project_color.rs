use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed palette of project tag colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectColor {
    #[default]
    Orange,
    Blue,
    Sky,
    Green,
    Red,
    Purple,
}

impl ProjectColor {
    /// All palette entries in picker order
    pub const ALL: [ProjectColor; 6] = [
        Self::Orange,
        Self::Blue,
        Self::Sky,
        Self::Green,
        Self::Red,
        Self::Purple,
    ];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Sky => "sky",
            Self::Green => "green",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }
}

impl FromStr for ProjectColor {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "orange" => Ok(Self::Orange),
            "blue" => Ok(Self::Blue),
            "sky" => Ok(Self::Sky),
            "green" => Ok(Self::Green),
            "red" => Ok(Self::Red),
            "purple" => Ok(Self::Purple),
            _ => Err(CoreError::InvalidProjectColor {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

// Stored documents may carry colors from older palettes. Display falls back
// to the default tag color rather than rejecting the whole document.
impl<'de> Deserialize<'de> for ProjectColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer).unwrap_or_default();
        Ok(ProjectColor::from_str(&s).unwrap_or_default())
    }
}

impl std::fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
