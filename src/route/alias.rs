//! Alias lookup tables built from `redirect-from`.
//!
//! Every table keeps the first claimant in store order; later duplicates
//! are reported by config validation and conflict detection, not here.

use rustc_hash::FxHashMap;

use crate::store::{CollectionStore, ItemId};

#[derive(Debug, Default)]
pub struct AliasIndex {
    /// collection alias -> collection id
    collections: FxHashMap<String, usize>,
    /// per collection: item alias -> item index
    items: Vec<FxHashMap<String, usize>>,
    /// item alias -> first item claiming it, across collections
    global: FxHashMap<String, ItemId>,
}

impl AliasIndex {
    pub fn new(store: &CollectionStore) -> Self {
        let mut index = Self {
            items: Vec::with_capacity(store.collections().len()),
            ..Self::default()
        };

        for collection in store.collections() {
            for alias in &collection.meta().redirect_from {
                index
                    .collections
                    .entry(alias.clone())
                    .or_insert(collection.id());
            }

            let mut local = FxHashMap::default();
            for item in collection.iter() {
                for alias in &item.redirect_from {
                    local.entry(alias.clone()).or_insert(item.index());
                    index.global.entry(alias.clone()).or_insert(item.id());
                }
            }
            index.items.push(local);
        }

        index
    }

    /// Collection id behind a collection alias.
    pub fn collection(&self, alias: &str) -> Option<usize> {
        self.collections.get(alias).copied()
    }

    /// Item index behind an item alias inside collection `collection`.
    pub fn item(&self, collection: usize, alias: &str) -> Option<usize> {
        self.items.get(collection)?.get(alias).copied()
    }

    /// First item anywhere claiming `alias`.
    pub fn any_item(&self, alias: &str) -> Option<ItemId> {
        self.global.get(alias).copied()
    }
}
