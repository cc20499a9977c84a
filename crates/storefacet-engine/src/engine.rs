use std::cell::OnceCell;

use storefacet_core::{FacetAccessor, FacetKey, FacetValue, Listing, PriceRange};
use tracing::{debug, info};

use crate::counts::{CountEstimator, FacetCountTable};
use crate::index::FacetCatalogIndex;
use crate::inverted::InvertedIndex;
use crate::matcher::filter;
use crate::paginate::{Page, Paginator};
use crate::selection::{SelectionAction, SelectionState};
use crate::sort::SortOrder;

/// One category page: a catalog, its facet options, the current selection,
/// sort and page. Counts are computed once per state and cached until the
/// selection or the catalog changes.
pub struct FacetEngine<P, K, A>
where
    K: FacetKey,
{
    items: Vec<P>,
    keys: Vec<K>,
    accessor: A,
    index: FacetCatalogIndex<K>,
    postings: InvertedIndex<K>,
    state: SelectionState<K>,
    sort: SortOrder,
    paginator: Paginator,
    page: usize,
    counts: OnceCell<FacetCountTable<K>>,
}

impl<P, K, A> FacetEngine<P, K, A>
where
    P: Listing,
    K: FacetKey,
    A: FacetAccessor<P, K>,
{
    pub fn new(items: Vec<P>, keys: &[K], accessor: A, paginator: Paginator) -> Self {
        let index = FacetCatalogIndex::build(&items, keys, &accessor);
        let postings = InvertedIndex::build(&items, keys, &accessor);
        let state = SelectionState::for_catalog(&items);
        info!(
            products = items.len(),
            facets = keys.len(),
            options = index.option_count(),
            bounds = %state.bounds(),
            "built facet index"
        );
        Self {
            items,
            keys: keys.to_vec(),
            accessor,
            index,
            postings,
            state,
            sort: SortOrder::default(),
            paginator,
            page: 1,
            counts: OnceCell::new(),
        }
    }

    /// Engine over every key of the domain.
    pub fn with_all_keys(items: Vec<P>, accessor: A, paginator: Paginator) -> Self {
        Self::new(items, K::all(), accessor, paginator)
    }

    /// Swaps in a new catalog (new category or search): rebuilds the indexes
    /// and returns to the default selection, featured order and page 1.
    pub fn replace_catalog(&mut self, items: Vec<P>) {
        self.index = FacetCatalogIndex::build(&items, &self.keys, &self.accessor);
        self.postings = InvertedIndex::build(&items, &self.keys, &self.accessor);
        self.state = SelectionState::for_catalog(&items);
        self.items = items;
        self.sort = SortOrder::default();
        self.page = 1;
        self.counts = OnceCell::new();
        info!(
            products = self.items.len(),
            options = self.index.option_count(),
            bounds = %self.state.bounds(),
            "rebuilt facet index"
        );
    }

    pub fn items(&self) -> &[P] {
        &self.items
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn index(&self) -> &FacetCatalogIndex<K> {
        &self.index
    }

    pub fn state(&self) -> &SelectionState<K> {
        &self.state
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Applies a reducer action. Toggles of values the index does not offer
    /// are ignored. Returns whether the state changed; a change drops the
    /// cached counts and returns to page 1.
    pub fn dispatch(&mut self, action: SelectionAction<K>) -> bool {
        if let SelectionAction::ToggleFacetValue(key, value) = &action {
            if !self.index.contains(*key, value) {
                debug!(facet = key.label(), value = %value, "ignoring toggle of unknown facet value");
                return false;
            }
        }
        let next = self.state.reduce(action);
        if next == self.state {
            return false;
        }
        debug!(
            price = %next.price_range(),
            selections = next.selection_count(),
            "selection changed"
        );
        self.state = next;
        self.counts = OnceCell::new();
        self.page = 1;
        true
    }

    /// Normalizes `raw` and toggles it under `key`.
    pub fn toggle(&mut self, key: K, raw: &str) -> bool {
        match FacetValue::parse(raw) {
            Some(value) => self.dispatch(SelectionAction::ToggleFacetValue(key, value)),
            None => false,
        }
    }

    pub fn set_price_range(&mut self, range: PriceRange) -> bool {
        self.dispatch(SelectionAction::SetPriceRange(range))
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(SelectionAction::Reset)
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Moves to `page_number`, clamped to `1..=total_pages` (page 1 when
    /// there are no results). Returns the page now current.
    pub fn set_page(&mut self, page_number: usize) -> usize {
        let last = self.total_pages().max(1);
        self.page = page_number.clamp(1, last);
        self.page
    }

    /// Matching items in the current sort order.
    pub fn filtered(&self) -> Vec<&P> {
        let mut hits = filter(&self.items, &self.state, &self.accessor);
        self.sort.apply(&mut hits);
        hits
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.postings.match_count(&self.state))
    }

    pub fn page(&self) -> Page<&P> {
        self.paginator.paginate(&self.filtered(), self.page)
    }

    pub fn count_if_selected(&self, key: K, candidate: &FacetValue) -> usize {
        self.postings.count_if_selected(&self.state, key, candidate)
    }

    /// Counts for every option, computed on first use after a change.
    pub fn facet_counts(&self) -> &FacetCountTable<K> {
        self.counts
            .get_or_init(|| FacetCountTable::compute(&self.index, &self.state, &self.postings))
    }
}
