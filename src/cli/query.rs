//! `query` and `queries` commands.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use tola_collections::query::QueryParams;
use tola_collections::utils::counted;
use tola_collections::{Site, log};

use super::args::QueryArgs;
use super::output::write_json;

/// Execute one query and print its entries.
pub fn run_query(site: &Site, args: &QueryArgs) -> Result<()> {
    let mut params = QueryParams::new();
    if let Some(slug) = &args.slug {
        params = params.slug(slug.as_str());
    }
    if let Some(collection) = &args.current_collection {
        params = params.collection(collection.as_str());
    }

    let entries = site.execute(&args.name, &params)?;
    if entries.is_empty() {
        log!("query"; "{} returned nothing", args.name);
    }

    write_json(&entries, &args.output)
}

/// Print every registered query, static ones marked.
pub fn list_queries(site: &Site) -> Result<()> {
    let definitions = site.queries().definitions();
    let width = definitions.iter().map(|d| d.name.len()).max().unwrap_or(0);

    for definition in definitions {
        let kind = if definition.is_static() { "static" } else { "dynamic" };
        println!(
            "{:<width$}  {:<7}  {}",
            definition.name.if_supports_color(Stream::Stdout, |n| n.bright_green()),
            kind.if_supports_color(Stream::Stdout, |k| k.dimmed()),
            definition.description,
        );
    }

    log!("queries"; "{}", counted(definitions.len(), "query", "queries"));
    Ok(())
}
