//! Boundary normalization for raw catalog strings.
//!
//! Nothing here fails: unusable input degrades to zero / "no value" so the
//! engine never has to handle malformed records.

use std::cmp::Ordering;

use crate::types::Money;

/// Parses a display price by dropping every character that is not an ASCII
/// digit or `.` and reading the remainder as a number.
///
/// No currency or locale handling: `"AED 1,299.50"` is `1299.5`, while
/// `"1.299,50"` leaves `"1.29950"`, which is `1.2995`. Absent, empty or
/// unparsable input (`"1.2.3"`, `"."`) yields zero.
pub fn parse_price(raw: Option<&str>) -> Money {
    let Some(raw) = raw else {
        return Money::ZERO;
    };
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return Money::ZERO;
    }
    digits.parse::<f64>().map(Money::new).unwrap_or(Money::ZERO)
}

/// Trims `raw` and collapses every whitespace run to a single space.
///
/// Case is preserved, so `"Apple"` and `"APPLE"` stay distinct.
pub fn normalize_facet_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Numeric-aware comparison used to order facet options.
///
/// Runs of ASCII digits compare by value (`"8GB"` < `"16GB"`), other runs
/// compare case-insensitively, and a digit run sorts before text.
/// Distinct strings may compare `Equal` (`"a"` vs `"A"`, `"07"` vs `"7"`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Digits(x)), Some(Run::Digits(y))) => cmp_digits(x, y),
            (Some(Run::Digits(_)), Some(Run::Text(_))) => Ordering::Less,
            (Some(Run::Text(_)), Some(Run::Digits(_))) => Ordering::Greater,
            (Some(Run::Text(x)), Some(Run::Text(y))) => cmp_text(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_lowercase);
    let b = b.chars().flat_map(char::to_lowercase);
    a.cmp(b)
}

enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(i, _)| i);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    }
}
