/// Unfinished tasks older than this many days show a warning badge
pub const WARNING_AGE_DAYS: i64 = 14;
/// Unfinished tasks older than this many days show a critical badge
pub const CRITICAL_AGE_DAYS: i64 = 30;

/// Age classification of an unfinished task relative to its target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Staleness {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Staleness {
    /// Classify an age in days. Future dates yield negative days and
    /// are Normal.
    pub fn classify(days: i64) -> Self {
        if days > CRITICAL_AGE_DAYS {
            Self::Critical
        } else if days > WARNING_AGE_DAYS {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}
