//! Posting-list estimator for catalogs too large to rescan per option.
//!
//! Each (key, value) maps to a bitmap of the catalog positions carrying it, so
//! a count becomes a handful of bitmap intersections instead of a full scan.
//! Results are identical to [`ScanEstimator`](crate::counts::ScanEstimator).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use roaring::RoaringBitmap;
use storefacet_core::{FacetAccessor, FacetKey, FacetValue, Listing, Money, PriceRange};

use crate::counts::CountEstimator;
use crate::selection::SelectionState;

#[derive(Debug, Clone)]
pub struct InvertedIndex<K: FacetKey> {
    prices: Vec<Money>,
    postings: BTreeMap<K, HashMap<FacetValue, RoaringBitmap>>,
}

impl<K: FacetKey> InvertedIndex<K> {
    /// Positions are `u32`; items past `u32::MAX` are not indexed.
    pub fn build<P, A>(items: &[P], keys: &[K], accessor: &A) -> Self
    where
        P: Listing,
        A: FacetAccessor<P, K>,
    {
        let mut postings: BTreeMap<K, HashMap<FacetValue, RoaringBitmap>> = BTreeMap::new();
        for &key in keys {
            let lists = postings.entry(key).or_default();
            for (position, item) in (0u32..).zip(items) {
                if let Some(value) = accessor.value(item, key) {
                    lists.entry(value).or_default().insert(position);
                }
            }
        }
        let prices = (0u32..).zip(items).map(|(_, item)| item.price()).collect();
        Self { prices, postings }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn price_set(&self, range: PriceRange) -> RoaringBitmap {
        (0u32..)
            .zip(&self.prices)
            .filter(|(_, price)| range.contains(**price))
            .map(|(position, _)| position)
            .collect()
    }

    /// Positions whose value for `key` is any of `values`.
    fn any_of<'v, I>(&self, key: K, values: I) -> RoaringBitmap
    where
        I: IntoIterator<Item = &'v FacetValue>,
    {
        let mut set = RoaringBitmap::new();
        if let Some(lists) = self.postings.get(&key) {
            for value in values {
                if let Some(list) = lists.get(value) {
                    set |= list;
                }
            }
        }
        set
    }

    fn constrained(&self, state: &SelectionState<K>, skip: Option<K>) -> RoaringBitmap {
        let mut set = self.price_set(state.price_range());
        for (key, values) in state.active_filters() {
            if set.is_empty() {
                break;
            }
            if Some(key) != skip {
                set &= &self.any_of(key, values);
            }
        }
        set
    }

    /// Catalog positions matching `state`; `iter()` yields them ascending.
    pub fn matching(&self, state: &SelectionState<K>) -> RoaringBitmap {
        self.constrained(state, None)
    }
}

fn cardinality(set: &RoaringBitmap) -> usize {
    usize::try_from(set.len()).unwrap_or(usize::MAX)
}

impl<K: FacetKey> CountEstimator<K> for InvertedIndex<K> {
    fn count_if_selected(&self, state: &SelectionState<K>, key: K, candidate: &FacetValue) -> usize {
        let mut set = self.constrained(state, Some(key));
        let widened: BTreeSet<&FacetValue> = state
            .selected(key)
            .into_iter()
            .flatten()
            .chain(std::iter::once(candidate))
            .collect();
        set &= &self.any_of(key, widened);
        cardinality(&set)
    }

    fn match_count(&self, state: &SelectionState<K>) -> usize {
        cardinality(&self.matching(state))
    }
}
