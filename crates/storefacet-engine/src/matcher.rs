use storefacet_core::{FacetAccessor, FacetKey, Listing};

use crate::selection::SelectionState;

/// Whether `item` satisfies `state`: price inside the window, and for every
/// constrained key a value that is one of the selected ones. An item with no
/// value for a constrained key never matches.
pub fn matches<P, K, A>(item: &P, state: &SelectionState<K>, accessor: &A) -> bool
where
    P: Listing,
    K: FacetKey,
    A: FacetAccessor<P, K>,
{
    state.price_range().contains(item.price())
        && state
            .active_filters()
            .all(|(key, values)| accessor.value(item, key).is_some_and(|v| values.contains(&v)))
}

/// The matching items, in catalog order.
pub fn filter<'a, P, K, A>(items: &'a [P], state: &SelectionState<K>, accessor: &A) -> Vec<&'a P>
where
    P: Listing,
    K: FacetKey,
    A: FacetAccessor<P, K>,
{
    items.iter().filter(|item| matches(*item, state, accessor)).collect()
}
