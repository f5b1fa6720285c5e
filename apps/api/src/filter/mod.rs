// Job filter engine: facet extraction, selection state, the filter predicate
// and pagination. Everything except `handlers` is synchronous and pure.

pub mod facets;
pub mod handlers;
pub mod pagination;
pub mod predicate;
pub mod salary;
pub mod selection;

pub use facets::{FacetDefinition, FacetKind};
pub use pagination::{Direction, PageState, PAGE_SIZE};
pub use predicate::filter_jobs;
pub use selection::SelectionState;
