//! Event category enumeration

use serde::{Deserialize, Serialize};

/// The fixed set of event categories.
///
/// Category names coming out of storage or drafts are matched
/// case-insensitively; anything unrecognized falls back to [`Category::Other`]
/// rather than failing, so a stray value can never poison a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum Category {
    Music,
    Sports,
    Tech,
    Arts,
    Business,
    /// Fallback for unrecognized category names
    Other,
}

impl Category {
    /// Parse a category name, falling back to `Other` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "music" => Category::Music,
            "sports" => Category::Sports,
            "tech" => Category::Tech,
            "arts" => Category::Arts,
            "business" => Category::Business,
            _ => Category::Other,
        }
    }

    /// Canonical lowercase name, as persisted and as matched by search.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Sports => "sports",
            Category::Tech => "tech",
            Category::Arts => "arts",
            Category::Business => "business",
            Category::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Tech => "Tech",
            Category::Arts => "Arts",
            Category::Business => "Business",
            Category::Other => "Other",
        }
    }

    /// Accent color for category badges.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Music => "#4361ee",
            Category::Sports => "#4cc9f0",
            Category::Tech => "#7209b7",
            Category::Arts => "#f72585",
            Category::Business => "#3a0ca3",
            Category::Other => "#6c757d",
        }
    }

    /// All selectable categories (excludes the `Other` fallback).
    pub fn all() -> &'static [Category] {
        &[
            Category::Music,
            Category::Sports,
            Category::Tech,
            Category::Arts,
            Category::Business,
        ]
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::from_name(&name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
