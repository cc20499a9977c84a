use std::fmt::Debug;
use std::hash::Hash;

use crate::normalize::parse_price;
use crate::types::{FacetValue, Money, Product};

/// A closed enumeration of filterable attributes for one catalog domain.
pub trait FacetKey: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every key of the domain, in sidebar order.
    fn all() -> &'static [Self];

    /// Display label, also accepted by [`FacetKey::from_label`].
    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(label))
    }
}

/// Anything the engine can filter: it needs an identity and a raw price.
pub trait Listing {
    fn listing_id(&self) -> &str;

    fn price_text(&self) -> Option<&str>;

    fn price(&self) -> Money {
        parse_price(self.price_text())
    }
}

impl Listing for Product {
    fn listing_id(&self) -> &str {
        &self.id
    }

    fn price_text(&self) -> Option<&str> {
        self.price.as_deref()
    }
}

/// Reads the raw value of facet `key` from an item, per catalog domain.
pub trait FacetAccessor<P, K> {
    fn raw_value<'p>(&self, item: &'p P, key: K) -> Option<&'p str>;

    /// The normalized value, `None` when absent or blank.
    fn value(&self, item: &P, key: K) -> Option<FacetValue> {
        self.raw_value(item, key).and_then(FacetValue::parse)
    }
}

impl<P, K, A> FacetAccessor<P, K> for &A
where
    A: FacetAccessor<P, K> + ?Sized,
{
    fn raw_value<'p>(&self, item: &'p P, key: K) -> Option<&'p str> {
        (**self).raw_value(item, key)
    }
}

/// Adapts a plain function (or non-capturing closure) into an accessor.
pub struct FnAccessor<P, K>(pub for<'p> fn(&'p P, K) -> Option<&'p str>);

impl<P, K> FacetAccessor<P, K> for FnAccessor<P, K> {
    fn raw_value<'p>(&self, item: &'p P, key: K) -> Option<&'p str> {
        (self.0)(item, key)
    }
}

/// Keys that live in [`Product::specifications`] under one or more names.
pub trait SpecificationKey: FacetKey {
    /// Specification names to try, first match wins.
    fn spec_fields(&self) -> &'static [&'static str];

    /// Whether a missing spec falls back to [`Product::manufacturer`].
    fn uses_manufacturer_field(&self) -> bool {
        false
    }
}

/// Accessor for [`Product`] driven by [`SpecificationKey`] metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecificationAccessor;

impl<K: SpecificationKey> FacetAccessor<Product, K> for SpecificationAccessor {
    fn raw_value<'p>(&self, item: &'p Product, key: K) -> Option<&'p str> {
        key.spec_fields()
            .iter()
            .find_map(|name| item.specifications.get(*name))
            .map(String::as_str)
            .or_else(|| {
                if key.uses_manufacturer_field() {
                    item.manufacturer.as_deref()
                } else {
                    None
                }
            })
    }
}
