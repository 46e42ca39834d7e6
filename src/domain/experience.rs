//! Experience Entity
//!
//! One entry of the work experience timeline.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Orderable};

/// A work experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Unique identifier
    pub id: u32,
    /// Employer name
    pub company: String,
    /// Job title
    pub role: String,
    /// Display period, e.g. "2022 - Present"
    pub period: String,
    /// What the role involved
    pub description: Option<String>,
    /// Admin-assigned display position; newest-first by `period` when unset
    pub order_index: Option<u32>,
}

impl Experience {
    pub fn new(id: u32, company: String, role: String, period: String) -> Self {
        Self {
            id,
            company,
            role,
            period,
            description: None,
            order_index: None,
        }
    }
}

impl Entity for Experience {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Orderable for Experience {
    fn order_index(&self) -> Option<u32> {
        self.order_index
    }
}
