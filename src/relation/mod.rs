//! Relational and hierarchical resolvers.
//!
//! | Module      | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `reference` | Direct, reverse and multi-hop references        |
//! | `same`      | Relations inside one collection                 |
//! | `hierarchy` | Children, ancestors, siblings, menu trees       |
//! | `overview`  | All relations of one item, grouped              |
//!
//! All resolvers are pure functions over a [`CollectionStore`].

pub mod hierarchy;
mod overview;
mod reference;
mod same;

pub use hierarchy::{MAX_MENU_DEPTH, ancestors, children, menu_tree, siblings};
pub use overview::{RelationGroup, RelationOverview, overview};
pub use reference::{Relations, direct_and_reverse, multi_hop};
pub use same::same_collection_related;

use rustc_hash::FxHashSet;

use crate::Result;
use crate::store::{CollectionStore, ItemId, ItemRef};

/// Items of `target` related to `item`.
///
/// Another collection goes through [`multi_hop`]. Inside the item's own
/// collection, hierarchical collections yield [`siblings`] and flat ones
/// [`same_collection_related`].
pub fn related<'s>(
    store: &'s CollectionStore,
    item: ItemRef<'s>,
    target: &str,
) -> Result<Vec<ItemRef<'s>>> {
    let target = store.collection(target)?;
    let current = item.collection();

    if current.id() != target.id() {
        multi_hop(store, item, current.name(), target.name())
    } else if target.is_hierarchical() {
        Ok(siblings(item))
    } else {
        same_collection_related(store, item, target.name())
    }
}

/// Union of [`related`] over every item of `current`, first-seen order.
pub fn aggregate<'s>(
    store: &'s CollectionStore,
    current: &str,
    target: &str,
) -> Result<Vec<ItemRef<'s>>> {
    let current = store.collection(current)?;
    store.collection(target)?;

    let mut found = Unique::default();
    for item in current.iter() {
        found.extend(related(store, item, target)?);
    }
    Ok(found.into_vec())
}

/// Order-preserving set of items keyed by identity.
#[derive(Debug, Default)]
pub(crate) struct Unique<'s> {
    seen: FxHashSet<ItemId>,
    items: Vec<ItemRef<'s>>,
}

impl<'s> Unique<'s> {
    /// A set that never accepts `id`.
    pub(crate) fn excluding(id: ItemId) -> Self {
        let mut unique = Self::default();
        unique.seen.insert(id);
        unique
    }

    pub(crate) fn push(&mut self, item: ItemRef<'s>) {
        if self.seen.insert(item.id()) {
            self.items.push(item);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<ItemRef<'s>> {
        self.items
    }
}

impl<'s> Extend<ItemRef<'s>> for Unique<'s> {
    fn extend<I: IntoIterator<Item = ItemRef<'s>>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::store::test_store;

    fn slugs(items: &[ItemRef<'_>]) -> Vec<String> {
        items.iter().map(|i| i.slug().to_owned()).collect()
    }

    #[test]
    fn test_related_dispatch() {
        let store = test_store();
        let alpha = store.find("projects", "project-alpha").unwrap();
        assert_eq!(
            slugs(&related(&store, alpha, "services").unwrap()),
            ["web-design", "seo-optimization"]
        );
        assert_eq!(slugs(&related(&store, alpha, "projects").unwrap()), ["project-beta"]);

        // hierarchical target in the same collection: siblings
        let development = store.find("services", "web-development").unwrap();
        assert_eq!(slugs(&related(&store, development, "services").unwrap()), ["web-design"]);
    }

    #[test]
    fn test_aggregate() {
        let store = test_store();
        let found = aggregate(&store, "testimonials", "services").unwrap();
        assert_eq!(slugs(&found), ["web-design", "seo-optimization", "logo-design"]);

        assert_eq!(
            aggregate(&store, "clients", "services").unwrap_err(),
            Error::InvalidCollection("clients".into())
        );
        assert_eq!(
            aggregate(&store, "projects", "clients").unwrap_err(),
            Error::InvalidCollection("clients".into())
        );
    }

    #[test]
    fn test_unique_keeps_first() {
        let store = test_store();
        let a = store.find("services", "branding").unwrap();
        let b = store.find("services", "seo-optimization").unwrap();

        let mut unique = Unique::default();
        unique.extend([a, b, a]);
        assert_eq!(slugs(&unique.into_vec()), ["branding", "seo-optimization"]);

        let mut unique = Unique::excluding(a.id());
        unique.extend([a, b]);
        assert_eq!(slugs(&unique.into_vec()), ["seo-optimization"]);
    }
}
