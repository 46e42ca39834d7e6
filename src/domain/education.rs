//! Education Entity
//!
//! One entry of the education timeline on the about page.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Orderable};

/// An education entry (degree, school, year)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Unique identifier
    pub id: u32,
    /// School or university name
    pub institution: String,
    /// Degree or certificate title
    pub degree: String,
    /// Field of study
    pub field: Option<String>,
    /// Display year or range, e.g. "2019 - 2023"
    pub year: String,
    /// Optional free-form notes
    pub description: Option<String>,
    /// Admin-assigned display position; newest-first by `year` when unset
    pub order_index: Option<u32>,
}

impl Education {
    pub fn new(id: u32, institution: String, degree: String, year: String) -> Self {
        Self {
            id,
            institution,
            degree,
            field: None,
            year,
            description: None,
            order_index: None,
        }
    }
}

impl Entity for Education {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Orderable for Education {
    fn order_index(&self) -> Option<u32> {
        self.order_index
    }
}
