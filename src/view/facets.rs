//! Category Facet Builder
//!
//! Derives the filter-pill data from the raw project list: an "All" entry
//! with the total count, then one bucket per distinct category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Project;

/// Label of the leading facet that matches every project
pub const ALL_LABEL: &str = "All";
/// Bucket for projects with an empty category
pub const OTHER_LABEL: &str = "Other";

/// One filter pill: a category label and how many projects carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub label: String,
    pub count: usize,
}

/// Build the facet list for a project list.
///
/// The first entry is always `All` with the total count (the only entry
/// for an empty input). Remaining entries are the distinct categories in
/// lexicographic order; an empty category buckets under `Other`. Pure and
/// deterministic; callers cache the result against the input list.
pub fn build_facets(projects: &[Project]) -> Vec<Facet> {
    let mut buckets: BTreeMap<&str, usize> = BTreeMap::new();
    for project in projects {
        let label = if project.category.is_empty() {
            OTHER_LABEL
        } else {
            project.category.as_str()
        };
        *buckets.entry(label).or_insert(0) += 1;
    }

    let mut facets = Vec::with_capacity(buckets.len() + 1);
    facets.push(Facet {
        label: ALL_LABEL.to_string(),
        count: projects.len(),
    });
    facets.extend(buckets.into_iter().map(|(label, count)| Facet {
        label: label.to_string(),
        count,
    }));
    facets
}
