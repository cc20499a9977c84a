//! Argument parsing for the `storefacet` binary.

use std::path::PathBuf;

use storefacet_core::config::expand_path;
use storefacet_core::domains::Domain;
use storefacet_core::{parse_price, Error, PriceRange, Result};
use storefacet_engine::SortOrder;

pub const USAGE: &str = "Usage: storefacet <facets|browse> [catalog] [--domain phones|baby] \
[--price LO-HI] [--select KEY=VALUE]... [--sort featured|price-asc|price-desc] [--page N] [--json]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Every facet option with its counterfactual count.
    Facets,
    /// One page of matching products.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub catalog: Option<PathBuf>,
    pub domain: Option<Domain>,
    pub price: Option<PriceRange>,
    pub selections: Vec<(String, String)>,
    pub sort: SortOrder,
    pub page: usize,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub options: Options,
}

pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("facets") => Command::Facets,
        Some("browse") => Command::Browse,
        Some(other) => return Err(Error::InvalidArgument(format!("unknown command '{other}'"))),
        None => return Err(Error::InvalidArgument("missing command".to_string())),
    };

    let mut options = Options { page: 1, ..Options::default() };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--domain" => options.domain = Some(value_for(&arg, args.next())?.parse()?),
            "--price" => options.price = Some(parse_price_window(&value_for(&arg, args.next())?)?),
            "--select" => options.selections.push(parse_selection(&value_for(&arg, args.next())?)?),
            "--sort" => options.sort = value_for(&arg, args.next())?.parse()?,
            "--page" => {
                let raw = value_for(&arg, args.next())?;
                options.page = raw
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("invalid page number '{raw}'")))?;
            }
            "--json" => options.json = true,
            flag if flag.starts_with("--") => {
                return Err(Error::InvalidArgument(format!("unknown flag '{flag}'")));
            }
            path if options.catalog.is_none() => options.catalog = Some(expand_path(path)),
            extra => return Err(Error::InvalidArgument(format!("unexpected argument '{extra}'"))),
        }
    }
    Ok(Invocation { command, options })
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument(format!("{flag} needs a value")))
}

/// `"100-500"`; each side goes through the catalog price parser.
pub fn parse_price_window(raw: &str) -> Result<PriceRange> {
    let (lo, hi) = raw
        .split_once('-')
        .ok_or_else(|| Error::InvalidArgument(format!("price window '{raw}' is not LO-HI")))?;
    if lo.trim().is_empty() || hi.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("price window '{raw}' needs both ends")));
    }
    Ok(PriceRange::new(parse_price(Some(lo)), parse_price(Some(hi))))
}

/// `"RAM Size=8 GB"` → `("RAM Size", "8 GB")`.
pub fn parse_selection(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidArgument(format!("selection '{raw}' is not KEY=VALUE"))),
    }
}
