//! Relations between items of the same collection.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::Result;
use crate::store::{CollectionStore, ItemId, ItemRef};

use super::{Unique, reference::direct_and_reverse};

/// Resolved reference targets of one item, keyed by target collection.
fn reference_sets<'s>(item: &ItemRef<'s>) -> FxHashMap<&'s str, FxHashSet<ItemId>> {
    let mut sets: FxHashMap<&str, FxHashSet<ItemId>> = FxHashMap::default();
    for (field, ids) in item.collection().field_refs(item.index()) {
        if !ids.is_empty() {
            sets.entry(field.target.as_str())
                .or_default()
                .extend(ids.iter().copied());
        }
    }
    sets
}

fn shares_reference(a: &FxHashMap<&str, FxHashSet<ItemId>>, b: &FxHashMap<&str, FxHashSet<ItemId>>) -> bool {
    a.iter().any(|(target, ids)| {
        b.get(target)
            .is_some_and(|other| !ids.is_disjoint(other))
    })
}

/// Items of `collection` related to `item`.
///
/// First the items sharing at least one referenced target with `item`
/// (collection order), then its direct and reverse references inside
/// `collection`. The item itself is never included.
pub fn same_collection_related<'s>(
    store: &'s CollectionStore,
    item: ItemRef<'s>,
    collection: &str,
) -> Result<Vec<ItemRef<'s>>> {
    let members = store.collection(collection)?;
    let own = reference_sets(&item);

    let mut found = Unique::excluding(item.id());
    if !own.is_empty() {
        found.extend(
            members
                .iter()
                .filter(|other| shares_reference(&own, &reference_sets(other))),
        );
    }
    found.extend(direct_and_reverse(store, item, collection)?.iter());

    Ok(found.into_vec())
}
