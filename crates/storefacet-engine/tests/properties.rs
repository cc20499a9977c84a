use proptest::prelude::*;
use proptest::test_runner::Config;

use storefacet_core::domains::PhoneFacet;
use storefacet_core::traits::SpecificationAccessor;
use storefacet_core::{FacetKey, FacetValue, Money, PriceRange, Product};
use storefacet_engine::{
    filter, CountEstimator, FacetCatalogIndex, InvertedIndex, Paginator, ScanEstimator, SelectionState,
};

const BRANDS: &[&str] = &["Acme", "Globex", "Initech", " Acme  "];
const RAM: &[&str] = &["4GB", "8GB", "16GB"];
const KEYS: &[PhoneFacet] = &[PhoneFacet::Manufacturer, PhoneFacet::RamSize];

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        proptest::option::of(0u32..500),
        proptest::option::of(0..BRANDS.len()),
        proptest::option::of(0..RAM.len()),
    )
        .prop_map(|(price, brand, ram)| {
            let mut p = Product::new("p");
            p.price = price.map(|v| format!("AED {v}"));
            if let Some(b) = brand {
                p = p.with_spec("Manufacturer", BRANDS[b]);
            }
            if let Some(r) = ram {
                p = p.with_spec("RAM Size", RAM[r]);
            }
            p
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::vec(product_strategy(), 0..40)
}

/// Toggles a random subset of indexed options, then sets the price window.
fn select(items: &[Product], picks: &[usize], lo: u32, hi: u32) -> SelectionState<PhoneFacet> {
    let index = FacetCatalogIndex::build(items, KEYS, &SpecificationAccessor);
    let options: Vec<(PhoneFacet, FacetValue)> = index
        .iter()
        .flat_map(|(k, values)| values.iter().map(move |v| (k, v.clone())))
        .collect();
    let mut state = SelectionState::for_catalog(items);
    if !options.is_empty() {
        for &pick in picks {
            let (key, value) = options[pick % options.len()].clone();
            state = state.toggle_facet_value(key, value);
        }
    }
    state.set_price_range(PriceRange::new(Money::new(f64::from(lo)), Money::new(f64::from(hi))))
}

fn all_options(items: &[Product]) -> Vec<(PhoneFacet, FacetValue)> {
    let index = FacetCatalogIndex::build(items, PhoneFacet::all(), &SpecificationAccessor);
    index
        .iter()
        .flat_map(|(k, values)| values.iter().map(move |v| (k, v.clone())))
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn toggling_twice_restores_the_state(
        items in catalog_strategy(),
        picks in proptest::collection::vec(0usize..16, 0..4),
        extra in 0usize..16,
    ) {
        let state = select(&items, &picks, 0, 500);
        let options = all_options(&items);
        prop_assume!(!options.is_empty());
        let (key, value) = options[extra % options.len()].clone();
        let twice = state.toggle_facet_value(key, value.clone()).toggle_facet_value(key, value);
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn narrowing_the_price_window_never_adds_results(
        items in catalog_strategy(),
        picks in proptest::collection::vec(0usize..16, 0..4),
        lo in 0u32..500,
        width in 0u32..500,
        shrink in 0u32..250,
    ) {
        let wide = select(&items, &picks, lo, lo + width);
        let hi = wide.price_range().hi();
        let narrow_lo = (wide.price_range().lo().amount() + f64::from(shrink)).min(hi.amount());
        let narrow = wide.set_price_range(PriceRange::new(Money::new(narrow_lo), hi));
        let acc = SpecificationAccessor;
        prop_assert!(filter(&items, &narrow, &acc).len() <= filter(&items, &wide, &acc).len());
    }

    #[test]
    fn counting_a_selected_value_equals_the_current_match_count(
        items in catalog_strategy(),
        picks in proptest::collection::vec(0usize..16, 1..4),
    ) {
        let state = select(&items, &picks, 0, 500);
        let acc = SpecificationAccessor;
        let scan = ScanEstimator::new(&items, &acc);
        let current = filter(&items, &state, &acc).len();
        for (key, values) in state.active_filters() {
            for value in values {
                prop_assert_eq!(scan.count_if_selected(&state, key, value), current);
            }
        }
    }

    #[test]
    fn counting_on_an_unconstrained_key_equals_the_single_value_filter(
        items in catalog_strategy(),
        picks in proptest::collection::vec(0usize..16, 0..4),
        lo in 0u32..250,
    ) {
        let state = select(&items, &picks, lo, 500);
        let acc = SpecificationAccessor;
        let scan = ScanEstimator::new(&items, &acc);
        for (key, value) in all_options(&items) {
            if state.selected(key).is_some() {
                continue;
            }
            let substituted = state.toggle_facet_value(key, value.clone());
            prop_assert_eq!(
                scan.count_if_selected(&state, key, &value),
                filter(&items, &substituted, &acc).len()
            );
        }
    }

    #[test]
    fn inverted_index_matches_the_scan(
        items in catalog_strategy(),
        picks in proptest::collection::vec(0usize..16, 0..5),
        lo in 0u32..500,
        width in 0u32..500,
    ) {
        let state = select(&items, &picks, lo, lo + width);
        let acc = SpecificationAccessor;
        let scan = ScanEstimator::new(&items, &acc);
        let postings = InvertedIndex::build(&items, PhoneFacet::all(), &acc);

        let expected: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, p)| storefacet_engine::matches(*p, &state, &acc))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(postings.matching(&state).iter().map(|p| p as usize).collect::<Vec<_>>(), expected);
        for (key, value) in all_options(&items) {
            prop_assert_eq!(
                postings.count_if_selected(&state, key, &value),
                scan.count_if_selected(&state, key, &value)
            );
        }
    }

    #[test]
    fn pages_concatenate_to_the_filtered_list(
        items in proptest::collection::vec(0u32..1000, 0..60),
        page_size in 1usize..25,
    ) {
        let paginator = Paginator::with_page_size(page_size).unwrap();
        let total = paginator.total_pages(items.len());
        let mut rebuilt = Vec::new();
        for n in 1..=total {
            let page = paginator.page(&items, n);
            prop_assert!(!page.is_empty() && page.len() <= page_size);
            rebuilt.extend_from_slice(page);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert!(paginator.page(&items, total + 1).is_empty());
    }
}
