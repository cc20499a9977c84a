use std::collections::BTreeSet;

use serde::Serialize;
use storefacet_core::{FacetAccessor, FacetKey, FacetValue};

/// The selectable options per facet key, built from the full, unfiltered
/// catalog. Options never depend on the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCatalogIndex<K: FacetKey> {
    facets: Vec<(K, Vec<FacetValue>)>,
}

impl<K: FacetKey> FacetCatalogIndex<K> {
    /// Collects the distinct normalized values of every key, in `keys` order,
    /// each list sorted numeric-first. Blank and missing values are dropped.
    pub fn build<P, A>(items: &[P], keys: &[K], accessor: &A) -> Self
    where
        A: FacetAccessor<P, K>,
    {
        let mut facets: Vec<(K, Vec<FacetValue>)> = Vec::with_capacity(keys.len());
        for &key in keys {
            if facets.iter().any(|(k, _)| *k == key) {
                continue;
            }
            let distinct: BTreeSet<FacetValue> =
                items.iter().filter_map(|item| accessor.value(item, key)).collect();
            facets.push((key, distinct.into_iter().collect()));
        }
        Self { facets }
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.facets.iter().map(|(k, _)| *k)
    }

    /// Options for `key`; empty when the key was not indexed.
    pub fn values(&self, key: K) -> &[FacetValue] {
        self.facets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: K, value: &FacetValue) -> bool {
        self.values(key).binary_search(value).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &[FacetValue])> + '_ {
        self.facets.iter().map(|(k, values)| (*k, values.as_slice()))
    }

    /// Total number of options across all keys.
    pub fn option_count(&self) -> usize {
        self.facets.iter().map(|(_, values)| values.len()).sum()
    }
}
