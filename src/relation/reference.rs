//! Cross-collection references: direct, reverse and multi-hop.
//!
//! - direct: items of the target that this item lists in a reference field
//! - reverse: items of the target that list this item
//! - multi-hop: the above, plus items reached through one bridge collection

use crate::Result;
use crate::store::{CollectionStore, ItemRef};

use super::{Unique, same::same_collection_related};

/// Direct and reverse references between one item and one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations<'s> {
    /// Field declaration order, then slug order within a field.
    pub direct: Vec<ItemRef<'s>>,
    /// Target collection order.
    pub reverse: Vec<ItemRef<'s>>,
}

impl<'s> Relations<'s> {
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.reverse.is_empty()
    }

    /// Direct followed by reverse.
    pub fn iter(&self) -> impl Iterator<Item = ItemRef<'s>> + '_ {
        self.direct.iter().chain(&self.reverse).copied()
    }
}

/// References between `item` and collection `target`.
///
/// Reverse matches only look at fields of `target` that point into the
/// item's own collection, so equal slugs elsewhere never match.
pub fn direct_and_reverse<'s>(
    store: &'s CollectionStore,
    item: ItemRef<'s>,
    target: &str,
) -> Result<Relations<'s>> {
    let target = store.collection(target)?;
    let source = item.collection();

    let direct = source
        .references(item.index(), target.name())
        .map(|id| store.at(id))
        .collect();

    let reverse = if target.references_collection(source.name()) {
        let id = item.id();
        target
            .iter()
            .filter(|candidate| {
                target
                    .references(candidate.index(), source.name())
                    .any(|r| r == id)
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(Relations { direct, reverse })
}

/// Items of `target` related to `item`, directly or through one bridge.
///
/// Order: direct, reverse, then for every other collection (store order,
/// skipping `current` and `target`) the targets reached from each bridge
/// item. First occurrence wins.
pub fn multi_hop<'s>(
    store: &'s CollectionStore,
    item: ItemRef<'s>,
    current: &str,
    target: &str,
) -> Result<Vec<ItemRef<'s>>> {
    if current == target {
        return same_collection_related(store, item, target);
    }

    let mut found = Unique::default();
    found.extend(direct_and_reverse(store, item, target)?.iter());

    for bridge in store.collections() {
        if bridge.name() == current || bridge.name() == target {
            continue;
        }
        for hop in direct_and_reverse(store, item, bridge.name())?.iter() {
            found.extend(direct_and_reverse(store, hop, target)?.iter());
        }
    }

    Ok(found.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::store::{bridged_store, test_store};

    fn slugs(items: &[ItemRef<'_>]) -> Vec<String> {
        items.iter().map(|i| i.slug().to_owned()).collect()
    }

    #[test]
    fn test_direct_and_reverse() {
        let store = test_store();
        let alpha = store.find("projects", "project-alpha").unwrap();

        let rel = direct_and_reverse(&store, alpha, "services").unwrap();
        assert_eq!(slugs(&rel.direct), ["web-design", "seo-optimization"]);
        assert!(rel.reverse.is_empty());

        let rel = direct_and_reverse(&store, alpha, "testimonials").unwrap();
        assert!(rel.direct.is_empty());
        assert_eq!(slugs(&rel.reverse), ["happy-client", "repeat-client"]);
    }

    #[test]
    fn test_unknown_target() {
        let store = test_store();
        let alpha = store.find("projects", "project-alpha").unwrap();
        assert_eq!(
            direct_and_reverse(&store, alpha, "clients").unwrap_err(),
            Error::InvalidCollection("clients".into())
        );
    }

    #[test]
    fn test_symmetry() {
        let store = test_store();
        for a in store.iter() {
            for b_col in store.collections() {
                let rel = direct_and_reverse(&store, a, b_col.name()).unwrap();
                for b in rel.direct {
                    let back = direct_and_reverse(&store, b, a.collection().name()).unwrap();
                    assert!(
                        back.reverse.contains(&a),
                        "{} -> {} not mirrored",
                        a.slug(),
                        b.slug()
                    );
                }
            }
        }
    }

    #[test]
    fn test_reverse_ignores_colliding_slugs() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "tags"
[[collection.items]]
slug = "rust"

[[collection]]
name = "topics"
[[collection.items]]
slug = "rust"

[[collection]]
name = "posts"
[[collection.items]]
slug = "hello"
tags = ["rust"]
"#,
        );
        let store = crate::store::CollectionStore::new(config.collections);
        let tag = store.find("tags", "rust").unwrap();
        let topic = store.find("topics", "rust").unwrap();

        assert_eq!(direct_and_reverse(&store, tag, "posts").unwrap().reverse.len(), 1);
        assert!(direct_and_reverse(&store, topic, "posts").unwrap().reverse.is_empty());
    }

    #[test]
    fn test_multi_hop_through_bridge() {
        let store = test_store();
        // testimonials -> projects -> services
        let client = store.find("testimonials", "repeat-client").unwrap();
        let found = multi_hop(&store, client, "testimonials", "services").unwrap();
        assert_eq!(slugs(&found), ["web-design", "seo-optimization", "logo-design"]);

        // services <- projects <- testimonials
        let seo = store.find("services", "seo-optimization").unwrap();
        let found = multi_hop(&store, seo, "services", "testimonials").unwrap();
        assert_eq!(slugs(&found), ["happy-client", "repeat-client"]);
    }

    #[test]
    fn test_reverse_from_referenced_side() {
        let store = bridged_store();
        let alpha = store.find("projects", "alpha").unwrap();

        let rel = direct_and_reverse(&store, alpha, "services").unwrap();
        assert_eq!(slugs(&rel.direct), ["web-design", "seo"]);
        assert_eq!(slugs(&rel.reverse), ["web-design", "hosting"]);

        let found = multi_hop(&store, alpha, "projects", "services").unwrap();
        assert_eq!(slugs(&found), ["web-design", "seo", "hosting"]);
    }

    #[test]
    fn test_multi_hop_merges_repeated_targets() {
        let store = bridged_store();
        let acme = store.find("clients", "acme").unwrap();

        // seo: direct, via alpha, via beta; web-design: via alpha twice
        let found = multi_hop(&store, acme, "clients", "services").unwrap();
        assert_eq!(slugs(&found), ["seo", "web-design", "hosting"]);
        assert_eq!(found, multi_hop(&store, acme, "clients", "services").unwrap());
    }

    #[test]
    fn test_multi_hop_dedup_and_stable() {
        let store = test_store();
        let design = store.find("services", "web-design").unwrap();
        let first = multi_hop(&store, design, "services", "testimonials").unwrap();
        let second = multi_hop(&store, design, "services", "testimonials").unwrap();
        assert_eq!(first, second);

        let mut ids: Vec<_> = first.iter().map(|i| i.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), first.len());
    }
}
