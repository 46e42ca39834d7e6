//! Project Entity
//!
//! A portfolio project card: title, description, image, tag list and a
//! category used by the public filter pills.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// The closed set of project categories the site knows how to render.
///
/// Stored values are plain strings; this enum normalizes admin input and
/// gives unrecognized input a single explicit fallback instead of leaking
/// free text into the filter pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    UiUx,
    #[default]
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::UiUx => "UI/UX",
            ProjectCategory::Other => "Other",
        }
    }

    /// Unrecognized input becomes `Other`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "Web" => ProjectCategory::Web,
            "Mobile" => ProjectCategory::Mobile,
            "UI/UX" => ProjectCategory::UiUx,
            _ => ProjectCategory::Other,
        }
    }
}

/// A portfolio project
///
/// `category` is kept as the stored string: the facet builder buckets
/// whatever the store returns, it does not re-validate (see view::facets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Short description shown on the card
    pub description: String,
    /// Cover image URL
    pub image_url: String,
    /// Free-form tech tags, in display order
    pub tags: Vec<String>,
    /// Category string, normally one of `ProjectCategory`
    pub category: String,
    /// Live deployment URL
    pub live_url: Option<String>,
    /// Source repository URL
    pub github_url: Option<String>,
    /// Highlighted on the home page
    pub featured: bool,
    /// Creation time (epoch millis), used for the year display
    pub created_at: Option<i64>,
}

impl Project {
    pub fn new(id: u32, title: String, description: String, category: ProjectCategory) -> Self {
        Self {
            id,
            title,
            description,
            image_url: String::new(),
            tags: Vec::new(),
            category: category.as_str().to_string(),
            live_url: None,
            github_url: None,
            featured: false,
            created_at: None,
        }
    }
}

impl Entity for Project {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        assert_eq!(ProjectCategory::from_str("Web"), ProjectCategory::Web);
        assert_eq!(ProjectCategory::from_str("UI/UX"), ProjectCategory::UiUx);
        assert_eq!(ProjectCategory::UiUx.as_str(), "UI/UX");
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        assert_eq!(ProjectCategory::from_str("web"), ProjectCategory::Other);
        assert_eq!(ProjectCategory::from_str(""), ProjectCategory::Other);
    }

    #[test]
    fn test_project_creation() {
        let p = Project::new(1, "Site".to_string(), "A site".to_string(), ProjectCategory::Web);
        assert_eq!(p.id(), 1);
        assert_eq!(p.category, "Web");
        assert!(!p.featured);
        assert!(p.tags.is_empty());
    }
}
