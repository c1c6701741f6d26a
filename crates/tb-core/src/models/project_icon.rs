use serde::{Deserialize, Deserializer, Serialize};

/// Named icon attached to a project tag.
///
/// Wire form is the icon key exactly as stored ("Bot", "Building2", ...).
/// Unknown keys resolve to [`ProjectIcon::Circle`] so a document written by
/// a newer client still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ProjectIcon {
    Bot,
    Code,
    Database,
    User,
    Building2,
    Brain,
    ShieldCheck,
    Monitor,
    PawPrint,
    Globe,
    Smartphone,
    Cloud,
    Server,
    Cpu,
    Activity,
    Zap,
    Layers,
    Box,
    /// Fallback icon for unknown keys
    #[default]
    Circle,
}

impl ProjectIcon {
    /// Icons offered by the project editor, in picker order
    pub const ALL: [ProjectIcon; 18] = [
        Self::Bot,
        Self::Code,
        Self::Database,
        Self::User,
        Self::Building2,
        Self::Brain,
        Self::ShieldCheck,
        Self::Monitor,
        Self::PawPrint,
        Self::Globe,
        Self::Smartphone,
        Self::Cloud,
        Self::Server,
        Self::Cpu,
        Self::Activity,
        Self::Zap,
        Self::Layers,
        Self::Box,
    ];

    /// Icon key as stored in documents
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Bot => "Bot",
            Self::Code => "Code",
            Self::Database => "Database",
            Self::User => "User",
            Self::Building2 => "Building2",
            Self::Brain => "Brain",
            Self::ShieldCheck => "ShieldCheck",
            Self::Monitor => "Monitor",
            Self::PawPrint => "PawPrint",
            Self::Globe => "Globe",
            Self::Smartphone => "Smartphone",
            Self::Cloud => "Cloud",
            Self::Server => "Server",
            Self::Cpu => "Cpu",
            Self::Activity => "Activity",
            Self::Zap => "Zap",
            Self::Layers => "Layers",
            Self::Box => "Box",
            Self::Circle => "Circle",
        }
    }

    /// Resolve an icon key, falling back to Circle for unknown keys
    pub fn from_key(key: &str) -> Self {
        match key {
            "Bot" => Self::Bot,
            "Code" => Self::Code,
            "Database" => Self::Database,
            "User" => Self::User,
            "Building2" => Self::Building2,
            "Brain" => Self::Brain,
            "ShieldCheck" => Self::ShieldCheck,
            "Monitor" => Self::Monitor,
            "PawPrint" => Self::PawPrint,
            "Globe" => Self::Globe,
            "Smartphone" => Self::Smartphone,
            "Cloud" => Self::Cloud,
            "Server" => Self::Server,
            "Cpu" => Self::Cpu,
            "Activity" => Self::Activity,
            "Zap" => Self::Zap,
            "Layers" => Self::Layers,
            "Box" => Self::Box,
            _ => Self::Circle,
        }
    }
}

impl<'de> Deserialize<'de> for ProjectIcon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer).unwrap_or_default();
        Ok(ProjectIcon::from_key(&s))
    }
}

impl std::fmt::Display for ProjectIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}
