//! Content-asset models.

use serde::Deserialize;

/// One content asset as returned by the registry API.
///
/// Events come from a different endpoint without an `asset_type` field; the
/// mapper applies a fallback type for those.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    pub slug: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub slug: Option<String>,
}

impl Asset {
    /// Whether the asset is served in the default language (no language
    /// prefix in its URL). Missing language counts as default.
    pub fn is_default_lang(&self) -> bool {
        matches!(self.lang.as_deref(), None | Some("us") | Some("en"))
    }

    /// Whether the asset belongs to a how-to category.
    pub fn is_how_to(&self) -> bool {
        matches!(
            self.category
                .as_ref()
                .and_then(|category| category.slug.as_deref()),
            Some("how-to") | Some("como")
        )
    }
}

/// Recognized asset types for redirect purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Event,
    Lesson,
    Exercise,
    Project,
    Article,
    Quiz,
}

impl AssetType {
    /// Case-insensitive parse; unrecognized types yield `None` and the
    /// asset is dropped from the output.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "EVENT" => Some(AssetType::Event),
            "LESSON" => Some(AssetType::Lesson),
            "EXERCISE" => Some(AssetType::Exercise),
            "PROJECT" => Some(AssetType::Project),
            "ARTICLE" => Some(AssetType::Article),
            "QUIZ" => Some(AssetType::Quiz),
            _ => None,
        }
    }

    /// URL path segment for localized asset redirects.
    pub fn path_connector(self) -> &'static str {
        match self {
            AssetType::Event => "workshops",
            AssetType::Lesson => "lesson",
            AssetType::Exercise => "interactive-exercise",
            AssetType::Project => "interactive-coding-tutorial",
            AssetType::Article | AssetType::Quiz => "how-to",
        }
    }
}

/// Normalized project difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Hard,
    Unknown,
}

impl Difficulty {
    /// Map the backend's free-text difficulty onto the site's scale.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "junior" => Difficulty::Easy,
            "semi-senior" => Difficulty::Intermediate,
            "senior" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        }
    }
}

/// Rewrite every project's difficulty to its normalized value, defaulting
/// missing difficulties to `unknown`.
pub fn normalize_difficulties(projects: &mut [Asset]) {
    for project in projects {
        let normalized = project
            .difficulty
            .as_deref()
            .map(Difficulty::from_raw)
            .unwrap_or(Difficulty::Unknown);
        project.difficulty = Some(normalized.as_str().to_string());
    }
}
