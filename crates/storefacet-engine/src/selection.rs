//! Sidebar selection state and the reducer that is its only way to change.
//!
//! Every transition returns a new state; the previous one is untouched. The
//! reducer keeps the invariants by construction: the price window is ordered
//! and inside the catalog bounds, and a facet key never maps to an empty set
//! (so toggling a value twice restores an equal state).

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use storefacet_core::{FacetKey, FacetValue, Listing, PriceRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction<K> {
    SetPriceRange(PriceRange),
    ToggleFacetValue(K, FacetValue),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState<K: FacetKey> {
    bounds: PriceRange,
    price_range: PriceRange,
    selected: BTreeMap<K, BTreeSet<FacetValue>>,
}

impl<K: FacetKey> SelectionState<K> {
    /// Full price window, nothing selected.
    pub fn new(bounds: PriceRange) -> Self {
        Self { bounds, price_range: bounds, selected: BTreeMap::new() }
    }

    /// Default state for a catalog: bounds are `[0, max price]`.
    pub fn for_catalog<P: Listing>(items: &[P]) -> Self {
        Self::new(PriceRange::spanning(items.iter().map(Listing::price)))
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// The selected values for `key`, `None` when the key is unconstrained.
    pub fn selected(&self, key: K) -> Option<&BTreeSet<FacetValue>> {
        self.selected.get(&key).filter(|values| !values.is_empty())
    }

    pub fn is_selected(&self, key: K, value: &FacetValue) -> bool {
        self.selected(key).is_some_and(|values| values.contains(value))
    }

    /// Keys with a non-empty selection and their values.
    pub fn active_filters(&self) -> impl Iterator<Item = (K, &BTreeSet<FacetValue>)> + '_ {
        self.selected
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| (*key, values))
    }

    pub fn selection_count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    pub fn is_default(&self) -> bool {
        self.price_range == self.bounds && self.selection_count() == 0
    }

    #[must_use]
    pub fn reduce(&self, action: SelectionAction<K>) -> Self {
        match action {
            SelectionAction::SetPriceRange(range) => self.set_price_range(range),
            SelectionAction::ToggleFacetValue(key, value) => self.toggle_facet_value(key, value),
            SelectionAction::Reset => self.reset(),
        }
    }

    /// Orders and clamps `range` into the catalog bounds.
    #[must_use]
    pub fn set_price_range(&self, range: PriceRange) -> Self {
        Self { price_range: range.clamp_to(self.bounds), ..self.clone() }
    }

    /// Adds `value` under `key` when absent, removes it when present.
    #[must_use]
    pub fn toggle_facet_value(&self, key: K, value: FacetValue) -> Self {
        let mut next = self.clone();
        let values = next.selected.entry(key).or_default();
        if !values.remove(&value) {
            values.insert(value);
        }
        if values.is_empty() {
            next.selected.remove(&key);
        }
        next
    }

    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.bounds)
    }
}
