use std::env;
use std::path::PathBuf;

use serde::Serialize;
use storefacet_cli::{parse_args, Command, Invocation, USAGE};
use storefacet_core::catalog::CatalogLoader;
use storefacet_core::config::{expand_path, Config};
use storefacet_core::domains::{BabyFacet, Domain, PhoneFacet};
use storefacet_core::traits::{SpecificationAccessor, SpecificationKey};
use storefacet_core::{Listing, Product};
use storefacet_engine::{FacetEngine, Paginator};
use tracing::warn;
use tracing_subscriber::EnvFilter;

type Engine<K> = FacetEngine<Product, K, SpecificationAccessor>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let invocation = match parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => { eprintln!("{e}\n{USAGE}"); std::process::exit(1) }
    };

    let catalog: PathBuf = invocation
        .options
        .catalog
        .clone()
        .unwrap_or_else(|| expand_path(&settings.catalog.path));
    let products = CatalogLoader::new().load(&catalog)?;
    let paginator = Paginator::new(settings.engine.page_size()?);

    match invocation.options.domain.unwrap_or(settings.engine.domain) {
        Domain::Phones => run::<PhoneFacet>(&invocation, products, paginator),
        Domain::Baby => run::<BabyFacet>(&invocation, products, paginator),
    }
}

fn run<K>(invocation: &Invocation, products: Vec<Product>, paginator: Paginator) -> anyhow::Result<()>
where
    K: SpecificationKey + Serialize,
{
    let options = &invocation.options;
    let mut engine: Engine<K> = FacetEngine::with_all_keys(products, SpecificationAccessor, paginator);

    for (label, raw) in &options.selections {
        let key = K::from_label(label).ok_or_else(|| anyhow::anyhow!("Unknown facet '{}'", label))?;
        if !engine.toggle(key, raw) {
            warn!(facet = label.as_str(), value = raw.as_str(), "value not offered by this catalog");
        }
    }
    if let Some(range) = options.price {
        engine.set_price_range(range);
    }
    engine.set_sort(options.sort);
    engine.set_page(options.page);

    match invocation.command {
        Command::Facets => print_facets(&engine, options.json),
        Command::Browse => print_page(&engine, options.json),
    }
}

fn print_facets<K>(engine: &Engine<K>, json: bool) -> anyhow::Result<()>
where
    K: SpecificationKey + Serialize,
{
    let table = engine.facet_counts();
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    println!("💰 Price: {} (catalog {})", engine.state().price_range(), engine.state().bounds());
    for (key, options) in table.iter() {
        if options.is_empty() { continue; }
        println!();
        println!("📂 {}", key.label());
        for option in options {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            println!("  {} {:<30} ({})", mark, option.value, option.count);
        }
    }
    Ok(())
}

fn print_page<K>(engine: &Engine<K>, json: bool) -> anyhow::Result<()>
where
    K: SpecificationKey + Serialize,
{
    let page = engine.page();
    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    if page.total_items == 0 {
        println!("No products match the current filters.");
        return Ok(());
    }
    println!("📄 Page {}/{} ({} products, sorted by {})", page.number, page.total_pages, page.total_items, engine.sort());
    for product in &page.items {
        println!("  {:<14} {:>10}  {}", product.listing_id(), product.price().to_string(), product.title);
    }
    Ok(())
}
