//! Tech Stack Entity
//!
//! A technology badge shown on the about page.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Orderable};

/// A tech stack entry (language, framework, tool)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStack {
    /// Unique identifier
    pub id: u32,
    /// Technology name, e.g. "Rust"
    pub name: String,
    /// Optional grouping, e.g. "Backend"
    pub category: Option<String>,
    /// Admin-assigned display position; alphabetical by `name` when unset
    pub order_index: Option<u32>,
}

impl TechStack {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            category: None,
            order_index: None,
        }
    }
}

impl Entity for TechStack {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Orderable for TechStack {
    fn order_index(&self) -> Option<u32> {
        self.order_index
    }
}
