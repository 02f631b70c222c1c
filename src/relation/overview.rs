//! Every relation of one item, grouped by collection.

use serde::Serialize;

use crate::Result;
use crate::query::ResolvedItem;
use crate::store::{CollectionStore, ItemRef};

use super::reference::direct_and_reverse;

/// Related items from one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationGroup {
    pub collection: String,
    pub items: Vec<ResolvedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationOverview {
    pub item: ResolvedItem,
    /// Items this one references, per target collection.
    pub direct: Vec<RelationGroup>,
    /// Items referencing this one, per source collection.
    pub reverse: Vec<RelationGroup>,
}

/// Direct and reverse references of `item` across the whole store.
///
/// Collections without any relation are left out.
pub fn overview(store: &CollectionStore, item: ItemRef<'_>) -> Result<RelationOverview> {
    let mut direct = Vec::new();
    let mut reverse = Vec::new();

    for collection in store.collections() {
        let relations = direct_and_reverse(store, item, collection.name())?;
        let group = |items: Vec<ItemRef<'_>>| RelationGroup {
            collection: collection.name().to_owned(),
            items: items.into_iter().map(ResolvedItem::from).collect(),
        };
        if !relations.direct.is_empty() {
            direct.push(group(relations.direct));
        }
        if !relations.reverse.is_empty() {
            reverse.push(group(relations.reverse));
        }
    }

    Ok(RelationOverview {
        item: ResolvedItem::from(item),
        direct,
        reverse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[test]
    fn test_overview_groups() {
        let store = test_store();
        let alpha = store.find("projects", "project-alpha").unwrap();
        let view = overview(&store, alpha).unwrap();

        assert_eq!(view.item.href, "/projects/project-alpha");
        assert_eq!(view.direct.len(), 1);
        assert_eq!(view.direct[0].collection, "services");
        assert_eq!(view.direct[0].items.len(), 2);
        assert_eq!(view.reverse.len(), 1);
        assert_eq!(view.reverse[0].collection, "testimonials");
    }

    #[test]
    fn test_overview_serializes() {
        let store = test_store();
        let seo = store.find("services", "seo-optimization").unwrap();
        let json = serde_json::to_value(overview(&store, seo).unwrap()).unwrap();
        assert_eq!(json["item"]["href"], "/services/seo-optimization");
        assert_eq!(json["reverse"][0]["items"][0]["slug"], "project-alpha");
        assert!(json["direct"].as_array().unwrap().is_empty());
    }
}
