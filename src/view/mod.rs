//! View Layer
//!
//! Client-side derived state for the public projects page: the category
//! facet builder and the filter/view engine. Purely in-memory; the page
//! loads its project list once and everything here derives from it.

mod facets;
mod filter;

pub use facets::{build_facets, Facet, ALL_LABEL, OTHER_LABEL};
pub use filter::{ProjectsFilter, ViewMode, DEFAULT_PAGE_SIZE};
