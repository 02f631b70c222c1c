//! URL conflict detection for collections, items and aliases.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::log;
use crate::store::CollectionStore;
use crate::utils::{counted_s, plural_s};

/// URL sources map: URL -> everything claiming that URL.
pub type UrlSourceMap = FxHashMap<String, Vec<String>>;

/// A URL claimed by more than one collection, item or alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlConflict {
    pub url: String,
    /// Human-readable claimants, claim order.
    pub sources: Vec<String>,
}

fn claim(map: &mut UrlSourceMap, url: String, source: String) {
    map.entry(url).or_default().push(source);
}

/// Collect every URL the store would serve, with its claimants.
///
/// Single-segment: collection roots with a page, item pages of
/// single-segment collections, `/<slug>` redirects of the other item pages,
/// item aliases, collection aliases.
/// Two-segment: item pages and item aliases of the other collections.
pub fn collect_url_sources(store: &CollectionStore) -> UrlSourceMap {
    let mut url_sources = UrlSourceMap::default();

    for collection in store.collections() {
        let name = collection.name();

        if collection.meta().has_page {
            claim(&mut url_sources, collection.path(), format!("collection `{name}`"));
        }
        for alias in &collection.meta().redirect_from {
            claim(&mut url_sources, format!("/{alias}"), format!("alias of collection `{name}`"));
        }

        for item in collection.iter() {
            let source = format!("item `{name}/{}`", item.slug());
            if item.has_page() {
                claim(&mut url_sources, item.canonical_path(), source.clone());
                if !collection.is_single_segment() {
                    claim(
                        &mut url_sources,
                        format!("/{}", item.slug()),
                        format!("redirect to {source}"),
                    );
                }
            }
            for alias in &item.redirect_from {
                claim(&mut url_sources, format!("/{alias}"), format!("alias of {source}"));
                if !collection.is_single_segment() {
                    claim(
                        &mut url_sources,
                        format!("/{name}/{alias}"),
                        format!("alias of {source}"),
                    );
                }
            }
        }
    }

    url_sources
}

/// URLs with more than one source, sorted by URL.
pub fn detect_conflicts(url_sources: &UrlSourceMap) -> Vec<UrlConflict> {
    let mut conflicts: Vec<_> = url_sources
        .iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(url, sources)| UrlConflict {
            url: url.clone(),
            sources: sources.clone(),
        })
        .collect();
    conflicts.sort_by(|a, b| a.url.cmp(&b.url));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [error] url conflicts (1 url, 2 sources)
/// [url] /seo (2 sources)
///   - alias of item `services/seo-optimization`
///   - item `pages/seo`
/// ```
pub fn print_conflicts(conflicts: &[UrlConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "url conflicts ({}, {})",
        counted_s(conflicts.len(), "url"), counted_s(total_sources, "source"));

    for conflict in conflicts {
        eprintln!();
        log!("url"; "{} ({} source{})", conflict.url, conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[test]
    fn test_fixture_has_no_conflicts() {
        let store = test_store();
        let sources = collect_url_sources(&store);
        assert!(sources.contains_key("/services/web-design"));
        assert!(sources.contains_key("/seo"));
        assert!(detect_conflicts(&sources).is_empty());
    }

    #[test]
    fn test_single_segment_collisions() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "services"
has-page = true
items-has-page = true
[[collection.items]]
slug = "seo-optimization"
redirect-from = ["seo"]

[[collection]]
name = "pages"
items-has-page = true
collection-slug-in-item = false
[[collection.items]]
slug = "seo"
[[collection.items]]
slug = "services"

[[collection]]
name = "landing"
items-has-page = true
collection-slug-in-item = false
[[collection.items]]
slug = "seo"
"#,
        );
        let store = crate::store::CollectionStore::new(config.collections);
        let conflicts = detect_conflicts(&collect_url_sources(&store));

        let urls: Vec<_> = conflicts.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["/seo", "/services"]);
        assert_eq!(
            conflicts[0].sources,
            [
                "alias of item `services/seo-optimization`",
                "item `pages/seo`",
                "item `landing/seo`"
            ]
        );
        assert_eq!(conflicts[1].sources, ["collection `services`", "item `pages/services`"]);
    }

    #[test]
    fn test_shadowed_slug_redirect() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "services"
items-has-page = true
[[collection.items]]
slug = "about"

[[collection]]
name = "pages"
items-has-page = true
collection-slug-in-item = false
[[collection.items]]
slug = "about"
"#,
        );
        let store = crate::store::CollectionStore::new(config.collections);
        let conflicts = detect_conflicts(&collect_url_sources(&store));

        assert_eq!(
            conflicts,
            [UrlConflict {
                url: "/about".into(),
                sources: vec!["redirect to item `services/about`".into(), "item `pages/about`".into()],
            }]
        );
    }
}
