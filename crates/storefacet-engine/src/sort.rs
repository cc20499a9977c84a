use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storefacet_core::{Error, Listing};

/// Result ordering offered next to the results grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    /// Stable: items with equal prices keep their catalog order.
    pub fn apply<P: Listing>(self, items: &mut [&P]) {
        match self {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => items.sort_by_key(|item| item.price()),
            SortOrder::PriceHighToLow => items.sort_by_key(|item| Reverse(item.price())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(SortOrder::Featured),
            "price-asc" | "price-low-to-high" => Ok(SortOrder::PriceLowToHigh),
            "price-desc" | "price-high-to-low" => Ok(SortOrder::PriceHighToLow),
            other => Err(Error::InvalidArgument(format!("unknown sort order '{other}'"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Featured => f.write_str("featured"),
            SortOrder::PriceLowToHigh => f.write_str("price-asc"),
            SortOrder::PriceHighToLow => f.write_str("price-desc"),
        }
    }
}
