//! Social Link Entity
//!
//! Footer/contact social links. The platform string maps to a closed set
//! of renderable icon variants through a single lookup, with an explicit
//! fallback for anything unrecognized.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Orderable};

/// Known platforms the site has icons for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Email,
    /// Generic link icon for everything else
    #[default]
    Other,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "github",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Email => "email",
            SocialPlatform::Other => "other",
        }
    }

    /// Case-insensitive lookup; unrecognized names get the generic variant.
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "github" => SocialPlatform::Github,
            "linkedin" => SocialPlatform::Linkedin,
            "twitter" | "x" => SocialPlatform::Twitter,
            "instagram" => SocialPlatform::Instagram,
            "youtube" => SocialPlatform::Youtube,
            "email" | "mail" => SocialPlatform::Email,
            _ => SocialPlatform::Other,
        }
    }
}

/// A social/contact link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// Unique identifier
    pub id: u32,
    /// Stored platform name, free text from the admin form
    pub platform: String,
    /// Target URL (or mailto:)
    pub url: String,
    /// Optional display label overriding the platform name
    pub label: Option<String>,
    /// Admin-assigned display position; alphabetical by `platform` when unset
    pub order_index: Option<u32>,
}

impl SocialLink {
    pub fn new(id: u32, platform: String, url: String) -> Self {
        Self {
            id,
            platform,
            url,
            label: None,
            order_index: None,
        }
    }

    /// Which icon variant this link renders with
    pub fn platform_kind(&self) -> SocialPlatform {
        SocialPlatform::from_str(&self.platform)
    }
}

impl Entity for SocialLink {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Orderable for SocialLink {
    fn order_index(&self) -> Option<u32> {
        self.order_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_lookup() {
        assert_eq!(SocialPlatform::from_str("GitHub"), SocialPlatform::Github);
        assert_eq!(SocialPlatform::from_str("x"), SocialPlatform::Twitter);
        assert_eq!(SocialPlatform::from_str("mastodon"), SocialPlatform::Other);
    }

    #[test]
    fn test_link_platform_kind() {
        let link = SocialLink::new(1, "LinkedIn".to_string(), "https://example.com".to_string());
        assert_eq!(link.platform_kind(), SocialPlatform::Linkedin);
    }
}
