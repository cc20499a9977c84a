use std::cmp::Ordering;

use proptest::prelude::*;
use storefacet_core::{natural_cmp, normalize_facet_value, parse_price, FacetValue, Money, PriceRange};

#[test]
fn price_strips_currency_and_separators() {
    assert_eq!(parse_price(Some("AED 100")), Money::new(100.0));
    assert_eq!(parse_price(Some("AED 1,299.50")), Money::new(1299.5));
    assert_eq!(parse_price(Some("1.299,50")), Money::new(1.2995));
    assert_eq!(parse_price(Some("12.")), Money::new(12.0));
}

#[test]
fn unusable_prices_are_zero() {
    for raw in [None, Some(""), Some("bad"), Some("1.2.3"), Some("."), Some("-")] {
        assert_eq!(parse_price(raw), Money::ZERO, "{raw:?}");
    }
    assert_eq!(parse_price(Some("-5")), Money::new(5.0), "sign is stripped like any symbol");
}

#[test]
fn facet_values_collapse_whitespace_and_keep_case() {
    assert_eq!(normalize_facet_value("  Space   Grey\t\n"), "Space Grey");
    assert_eq!(normalize_facet_value(" \t "), "");
    assert_ne!(FacetValue::parse("Apple"), FacetValue::parse("APPLE"));
    assert_eq!(FacetValue::parse("   "), None);
}

#[test]
fn case_variants_sort_lowercase_first() {
    let mut values: Vec<FacetValue> = ["APPLE", "Banana", "apple", "Apple"]
        .iter()
        .filter_map(|s| FacetValue::parse(s))
        .collect();
    values.sort();
    let names: Vec<&str> = values.iter().map(FacetValue::as_str).collect();
    assert_eq!(names, vec!["apple", "Apple", "APPLE", "Banana"]);
}

#[test]
fn natural_order_is_numeric_first() {
    assert_eq!(natural_cmp("8GB", "16GB"), Ordering::Less);
    assert_eq!(natural_cmp("128 GB", "64 GB"), Ordering::Greater);
    assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    assert_eq!(natural_cmp("2", "a"), Ordering::Less);

    let mut values: Vec<FacetValue> = ["16GB", "4GB", "8GB", "12GB"]
        .iter()
        .filter_map(|s| FacetValue::parse(s))
        .collect();
    values.sort();
    let sorted: Vec<&str> = values.iter().map(FacetValue::as_str).collect();
    assert_eq!(sorted, vec!["4GB", "8GB", "12GB", "16GB"]);
}

#[test]
fn price_range_orders_and_clamps() {
    let bounds = PriceRange::new(Money::ZERO, Money::new(250.0));
    let range = PriceRange::new(Money::new(300.0), Money::new(50.0));
    assert_eq!(range.lo(), Money::new(50.0));
    let clamped = range.clamp_to(bounds);
    assert_eq!(clamped.hi(), Money::new(250.0));
    assert!(clamped.contains(Money::new(250.0)));
    assert!(!clamped.contains(Money::new(49.99)));
    assert_eq!(PriceRange::spanning(Vec::new()), PriceRange::default());
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in "\\PC*") {
        let once = normalize_facet_value(&raw);
        prop_assert_eq!(normalize_facet_value(&once), once);
    }

    #[test]
    fn parsed_prices_are_finite_and_non_negative(raw in "\\PC*") {
        let price = parse_price(Some(&raw)).amount();
        prop_assert!(price.is_finite() && price >= 0.0);
    }

    #[test]
    fn facet_value_order_is_total(a in "[a-c0-9 ]{0,6}", b in "[a-c0-9 ]{0,6}") {
        if let (Some(a), Some(b)) = (FacetValue::parse(&a), FacetValue::parse(&b)) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}
