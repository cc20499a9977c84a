//! Domain types shared by the catalog loader and the filtering engine.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::normalize::{natural_cmp, normalize_facet_value};

pub type ProductId = String;
pub type Specifications = HashMap<String, String>;

/// A catalog record as handed over by the catalog source.
///
/// - `id`: stable product identity (ASIN, SKU or slug)
/// - `url`: optional canonical product page
/// - `price`: the raw display price, e.g. `"AED 1,299.00"`
/// - `manufacturer`: optional top-level brand field some feeds carry
/// - `specifications`: raw facet-name → value pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub specifications: Specifications,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            url: None,
            price: None,
            manufacturer: None,
            specifications: Specifications::new(),
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(name.into(), value.into());
        self
    }
}

/// A non-negative, finite amount parsed from a price string.
///
/// Construction maps anything negative or non-finite to zero, so `Money`
/// has a total order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Money(amount)
        } else {
            Money::ZERO
        }
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::new(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// An inclusive `[lo, hi]` price window with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    lo: Money,
    hi: Money,
}

impl PriceRange {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: Money, b: Money) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// `[0, max price]` over a collection; `[0, 0]` when it is empty.
    pub fn spanning<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = Money>,
    {
        let hi = prices.into_iter().max().unwrap_or(Money::ZERO);
        Self { lo: Money::ZERO, hi }
    }

    pub fn lo(&self) -> Money {
        self.lo
    }

    pub fn hi(&self) -> Money {
        self.hi
    }

    pub fn contains(&self, price: Money) -> bool {
        price >= self.lo && price <= self.hi
    }

    /// Pulls both ends inside `bounds`.
    #[must_use]
    pub fn clamp_to(self, bounds: PriceRange) -> Self {
        Self {
            lo: self.lo.clamp(bounds.lo, bounds.hi),
            hi: self.hi.clamp(bounds.lo, bounds.hi),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// A normalized facet value: trimmed, inner whitespace collapsed, never empty.
///
/// Values order "numerically first" (`8GB` < `16GB`). Values equal up to case
/// put lowercase first (`apple` < `Apple` < `APPLE`), keeping the order
/// consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FacetValue(String);

impl FacetValue {
    /// Normalizes `raw`; `None` when nothing but whitespace remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_facet_value(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(FacetValue(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FacetValue {
    type Error = crate::Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        FacetValue::parse(&raw)
            .ok_or_else(|| crate::Error::InvalidArgument(format!("empty facet value {raw:?}")))
    }
}

impl From<FacetValue> for String {
    fn from(value: FacetValue) -> Self {
        value.0
    }
}

impl AsRef<str> for FacetValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialOrd for FacetValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FacetValue {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0).then_with(|| other.0.cmp(&self.0))
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
