//! Compile-time mapping from category keys to presentation attributes.
//!
//! Unknown keys never fail: they resolve to a neutral fallback so that the
//! display collaborator always has something to render.

use serde::Serialize;

/// Icon shown next to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    Zap,
    #[serde(rename = "building-2")]
    Building2,
    Trophy,
    Smartphone,
    TrendingUp,
    Heart,
    Microscope,
    Film,
    /// Generic glyph for unmapped keys.
    Default,
}

impl CategoryIcon {
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "zap" => Self::Zap,
            "building-2" => Self::Building2,
            "trophy" => Self::Trophy,
            "smartphone" => Self::Smartphone,
            "trending-up" => Self::TrendingUp,
            "heart" => Self::Heart,
            "microscope" => Self::Microscope,
            "film" => Self::Film,
            _ => Self::Default,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Zap => "zap",
            Self::Building2 => "building-2",
            Self::Trophy => "trophy",
            Self::Smartphone => "smartphone",
            Self::TrendingUp => "trending-up",
            Self::Heart => "heart",
            Self::Microscope => "microscope",
            Self::Film => "film",
            Self::Default => "default",
        }
    }
}

/// Accent colour used for a category label on article cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryAccent {
    Politics,
    Sports,
    Technology,
    Business,
    Health,
    Science,
    Entertainment,
    Fashion,
    BreakingNews,
    Neutral,
}

impl CategoryAccent {
    pub fn for_category(name: &str) -> Self {
        match name {
            "Politics" => Self::Politics,
            "Sports" => Self::Sports,
            "Technology" => Self::Technology,
            "Business" => Self::Business,
            "Health" => Self::Health,
            "Science" => Self::Science,
            "Entertainment" => Self::Entertainment,
            "Fashion" => Self::Fashion,
            "Breaking News" => Self::BreakingNews,
            _ => Self::Neutral,
        }
    }

    /// Hex colour code, `#RRGGBB`.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Politics | Self::Health | Self::BreakingNews => "#DC2626",
            Self::Sports => "#059669",
            Self::Technology => "#7C3AED",
            Self::Business => "#EA580C",
            Self::Science => "#0891B2",
            Self::Entertainment => "#BE185D",
            Self::Fashion => "#EC4899",
            Self::Neutral => "#6B7280",
        }
    }
}
