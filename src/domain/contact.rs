//! Contact Info Entity
//!
//! Single-row collection holding the contact page details.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Contact details shown on the contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Unique identifier (the store keeps exactly one row)
    pub id: u32,
    /// Public contact email
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional location line, e.g. "Berlin, Germany"
    pub location: Option<String>,
}

impl ContactInfo {
    pub fn new(id: u32, email: String) -> Self {
        Self {
            id,
            email,
            phone: None,
            location: None,
        }
    }
}

impl Entity for ContactInfo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
