#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod domains;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use normalize::{natural_cmp, normalize_facet_value, parse_price};
pub use traits::{FacetAccessor, FacetKey, Listing};
pub use types::{FacetValue, Money, PriceRange, Product};
