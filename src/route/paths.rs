//! Static route lists for the site builder.
//!
//! Item paths are emitted only for items with a page, aliases always
//! (they render redirects). Each list is deduplicated, first-seen order.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::debug;
use crate::store::{Collection, CollectionStore};
use crate::utils::counted_s;

/// A `/<collection>/<slug>` route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TwoSegmentPath {
    pub collection: String,
    pub slug: String,
}

impl TwoSegmentPath {
    fn new(collection: &str, slug: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            slug: slug.to_owned(),
        }
    }
}

impl fmt::Display for TwoSegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.collection, self.slug)
    }
}

fn dedup<T: Clone + Eq + std::hash::Hash>(paths: Vec<T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

/// Roots of collections with `has-page`.
pub fn collection_paths(store: &CollectionStore) -> Vec<String> {
    store
        .collections()
        .iter()
        .filter(|c| c.meta().has_page)
        .map(Collection::path)
        .collect()
}

/// Routes served by `/<collection>/<slug>`: pages, item aliases, and both
/// again under every collection alias.
pub fn two_segment_paths(store: &CollectionStore) -> Vec<TwoSegmentPath> {
    let mut paths = Vec::new();

    for collection in store.collections() {
        let prefixes = std::iter::once(collection.name())
            .chain(collection.meta().redirect_from.iter().map(String::as_str));
        for prefix in prefixes {
            for item in collection.iter() {
                if item.has_page() {
                    paths.push(TwoSegmentPath::new(prefix, item.slug()));
                }
                for alias in &item.redirect_from {
                    paths.push(TwoSegmentPath::new(prefix, alias));
                }
            }
        }
    }

    let paths = dedup(paths);
    debug!("paths"; "{}", counted_s(paths.len(), "two-segment path"));
    paths
}

/// Slugs served by `/<slug>`: item pages of every collection (redirecting
/// or canonical), item aliases, collection aliases.
pub fn single_segment_paths(store: &CollectionStore) -> Vec<String> {
    let mut slugs = Vec::new();

    for collection in store.collections() {
        for item in collection.iter() {
            if item.has_page() {
                slugs.push(item.slug().to_owned());
            }
            slugs.extend(item.redirect_from.iter().cloned());
        }
        slugs.extend(collection.meta().redirect_from.iter().cloned());
    }

    let slugs = dedup(slugs);
    debug!("paths"; "{}", counted_s(slugs.len(), "single-segment path"));
    slugs
}
