//! `relations` command.

use anyhow::{Result, bail};
use tola_collections::Site;
use tola_collections::relation::overview;

use super::args::OutputArgs;
use super::output::write_json;

/// Print direct and reverse references of `collection/slug` as JSON.
pub fn run_relations(site: &Site, collection: &str, slug: &str, output: &OutputArgs) -> Result<()> {
    let store = site.store();
    let Some(item) = store.item(collection, slug)? else {
        bail!("no item `{slug}` in collection `{collection}`");
    };
    write_json(&overview(store, item)?, output)
}
