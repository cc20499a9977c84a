//! Counterfactual facet counts: "how many results if I also tick this box".
//!
//! Adding a value to a key that already has selections widens that key's
//! filter (OR within a key); adding the first value to an unconstrained key
//! narrows the results to that value alone. Other keys and the price window
//! apply unchanged.

use serde::Serialize;
use storefacet_core::{FacetAccessor, FacetKey, FacetValue, Listing};

use crate::index::FacetCatalogIndex;
use crate::matcher::matches;
use crate::selection::SelectionState;

pub trait CountEstimator<K: FacetKey> {
    /// Items that would match if `candidate` were added under `key`.
    /// Never mutates `state`.
    fn count_if_selected(&self, state: &SelectionState<K>, key: K, candidate: &FacetValue) -> usize;

    /// Items matching `state` as it is.
    fn match_count(&self, state: &SelectionState<K>) -> usize;
}

/// Reference estimator: one pass over the catalog per candidate.
pub struct ScanEstimator<'a, P, A> {
    items: &'a [P],
    accessor: &'a A,
}

impl<'a, P, A> ScanEstimator<'a, P, A> {
    pub fn new(items: &'a [P], accessor: &'a A) -> Self {
        Self { items, accessor }
    }
}

impl<P, K, A> CountEstimator<K> for ScanEstimator<'_, P, A>
where
    P: Listing,
    K: FacetKey,
    A: FacetAccessor<P, K>,
{
    fn count_if_selected(&self, state: &SelectionState<K>, key: K, candidate: &FacetValue) -> usize {
        let current = state.selected(key);
        self.items
            .iter()
            .filter(|item| state.price_range().contains(item.price()))
            .filter(|item| {
                state
                    .active_filters()
                    .filter(|(k, _)| *k != key)
                    .all(|(k, values)| self.accessor.value(*item, k).is_some_and(|v| values.contains(&v)))
            })
            .filter(|item| match self.accessor.value(*item, key) {
                Some(v) => v == *candidate || current.is_some_and(|values| values.contains(&v)),
                None => false,
            })
            .count()
    }

    fn match_count(&self, state: &SelectionState<K>) -> usize {
        self.items.iter().filter(|item| matches(*item, state, self.accessor)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: FacetValue,
    pub count: usize,
    pub selected: bool,
}

/// Every option of an index with its count for one state; a render pass
/// computes it once and reads it per option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCountTable<K: FacetKey> {
    facets: Vec<(K, Vec<FacetOption>)>,
}

impl<K: FacetKey> FacetCountTable<K> {
    pub fn compute<E>(index: &FacetCatalogIndex<K>, state: &SelectionState<K>, estimator: &E) -> Self
    where
        E: CountEstimator<K> + ?Sized,
    {
        let facets = index
            .iter()
            .map(|(key, values)| {
                let options = values
                    .iter()
                    .map(|value| FacetOption {
                        value: value.clone(),
                        count: estimator.count_if_selected(state, key, value),
                        selected: state.is_selected(key, value),
                    })
                    .collect();
                (key, options)
            })
            .collect();
        Self { facets }
    }

    pub fn options(&self, key: K) -> &[FacetOption] {
        self.facets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, options)| options.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, key: K, value: &FacetValue) -> Option<usize> {
        self.options(key).iter().find(|o| o.value == *value).map(|o| o.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &[FacetOption])> + '_ {
        self.facets.iter().map(|(k, options)| (*k, options.as_slice()))
    }
}
