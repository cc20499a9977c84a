//! storefacet-engine
//!
//! Faceted filtering over an in-memory catalog: option index, selection
//! reducer, match predicate, counterfactual facet counts and pagination.
//! `FacetEngine` wires them together for a sidebar + results grid.
pub mod counts;
pub mod engine;
pub mod index;
pub mod inverted;
pub mod matcher;
pub mod paginate;
pub mod selection;
pub mod sort;

pub use counts::{CountEstimator, FacetCountTable, FacetOption, ScanEstimator};
pub use engine::FacetEngine;
pub use index::FacetCatalogIndex;
pub use inverted::InvertedIndex;
pub use matcher::{filter, matches};
pub use paginate::{Page, Paginator};
pub use selection::{SelectionAction, SelectionState};
pub use sort::SortOrder;
