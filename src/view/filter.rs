//! Projects Filter/View Engine
//!
//! Owns the client-side state of the projects page: active category
//! filter, list/grid view mode and pagination. All derivation happens in
//! memory against the already-loaded project list; nothing here does I/O.
//!
//! One `ProjectsFilter` is constructed per page view and handed to the
//! consumers that need it. It is never a global.

use serde::{Deserialize, Serialize};

use super::facets::{build_facets, Facet, ALL_LABEL};
use crate::domain::Project;

/// Projects shown per page in the grid/list renderers
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Which renderer consumes the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Filter, view-mode and pagination state for the projects page
pub struct ProjectsFilter {
    projects: Vec<Project>,
    // Rebuilt only when the project list is replaced, never on filter,
    // page or view-mode changes.
    facets: Vec<Facet>,
    active_filter: String,
    view_mode: ViewMode,
    current_page: usize,
    page_size: usize,
}

impl ProjectsFilter {
    pub fn new(projects: Vec<Project>) -> Self {
        Self::with_page_size(projects, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(projects: Vec<Project>, page_size: usize) -> Self {
        let facets = build_facets(&projects);
        Self {
            projects,
            facets,
            active_filter: ALL_LABEL.to_string(),
            view_mode: ViewMode::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the loaded project list, keeping the active filter.
    /// Facets are rebuilt and the current page re-clamped.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.facets = build_facets(&projects);
        self.projects = projects;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Filter pills for the UI (memoized against the project list)
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the active filter and reset pagination to page 1.
    ///
    /// Unknown labels are allowed; they simply match nothing.
    pub fn set_active_filter(&mut self, label: &str) {
        self.active_filter = label.to_string();
        self.current_page = 1;
    }

    /// Switch between list and grid. Touches nothing else: the filter,
    /// page and derived list are unchanged.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Projects matching the active filter, original order preserved.
    /// `"All"` matches everything; other labels match the category
    /// exactly (case-sensitive).
    pub fn filtered_projects(&self) -> Vec<&Project> {
        if self.active_filter == ALL_LABEL {
            self.projects.iter().collect()
        } else {
            self.projects
                .iter()
                .filter(|p| p.category == self.active_filter)
                .collect()
        }
    }

    pub fn total_projects(&self) -> usize {
        self.filtered_projects().len()
    }

    /// Page count for the filtered list, never less than 1
    pub fn total_pages(&self) -> usize {
        let len = self.total_projects();
        (len.div_ceil(self.page_size)).max(1)
    }

    /// The pager renders only when there is more than one page
    pub fn has_pager(&self) -> bool {
        self.total_pages() > 1
    }

    /// Jump to `page`, clamped into `[1, total_pages]`. A no-op when the
    /// filtered list fits on one page.
    pub fn handle_page_change(&mut self, page: usize) {
        let total = self.total_pages();
        if total <= 1 {
            return;
        }
        self.current_page = page.clamp(1, total);
    }

    /// The current page's slice of the filtered list
    pub fn page_slice(&self) -> Vec<&Project> {
        let filtered = self.filtered_projects();
        let start = (self.current_page - 1) * self.page_size;
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }
}
