//! Photo Entity
//!
//! A photo on the photos page. Not reorderable; the page shows newest
//! first.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A gallery photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier
    pub id: u32,
    /// Stored image URL (upload handling is the platform's job)
    pub image_url: String,
    /// Optional title
    pub title: Option<String>,
    /// Optional caption
    pub caption: Option<String>,
    /// Creation time (epoch millis)
    pub created_at: Option<i64>,
}

impl Photo {
    pub fn new(id: u32, image_url: String) -> Self {
        Self {
            id,
            image_url,
            title: None,
            caption: None,
            created_at: None,
        }
    }
}

impl Entity for Photo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
