//! Static queries: configured menus plus `add-to-query` placements.

use crate::config::{MenuPlacement, StaticQueryConfig};
use crate::relation::menu_tree;
use crate::store::{Collection, CollectionStore};

use super::{Entry, LinkEntry, QueryDefinition};

struct Menu {
    name: String,
    description: String,
    links: Vec<LinkEntry>,
}

/// Menus under construction, declaration order.
#[derive(Default)]
struct Menus(Vec<Menu>);

impl Menus {
    /// The menu called `name`, created empty when missing.
    fn get_or_create(&mut self, name: &str) -> &mut Vec<LinkEntry> {
        let index = match self.0.iter().position(|m| m.name == name) {
            Some(index) => index,
            None => {
                self.0.push(Menu {
                    name: name.to_owned(),
                    description: format!("Menu entries placed into \"{name}\""),
                    links: Vec::new(),
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index].links
    }
}

/// Build static query definitions.
///
/// Configured `[[query]]` entries come first, in order. Placements are then
/// merged collection by collection: the collection-level ones, followed by
/// the item-level ones of its items.
pub fn static_queries(configured: &[StaticQueryConfig], store: &CollectionStore) -> Vec<QueryDefinition> {
    let mut menus = Menus::default();
    for query in configured {
        let mut links = query.items.clone();
        links.iter_mut().for_each(LinkEntry::classify);
        menus.0.push(Menu {
            name: query.name.clone(),
            description: query.description.clone(),
            links,
        });
    }

    for collection in store.collections() {
        for placement in &collection.meta().add_to_query {
            place_collection(menus.get_or_create(&placement.name), collection, placement);
        }
        for item in collection.iter() {
            for placement in &item.add_to_query {
                menus
                    .get_or_create(&placement.name)
                    .push(LinkEntry::from_item(item, placement.label_field.as_deref()));
            }
        }
    }

    menus
        .0
        .into_iter()
        .map(|menu| {
            let entries = menu.links.into_iter().map(Entry::from).collect();
            QueryDefinition::fixed(menu.name, menu.description, entries)
        })
        .collect()
}

/// Root link when the collection has a page; items with `add-items`,
/// nested under the root (or as a forest) with `nest-children`.
fn place_collection(links: &mut Vec<LinkEntry>, collection: &Collection, placement: &MenuPlacement) {
    let meta = collection.meta();
    let label = placement.label_field.as_deref();

    let root = meta.has_page.then(|| {
        let title = if meta.title.is_empty() { collection.name() } else { meta.title.as_str() };
        LinkEntry::new(title, collection.path())
    });

    let items = if !placement.add_items {
        Vec::new()
    } else if placement.nest_children && collection.is_hierarchical() {
        menu_tree(collection, label)
    } else {
        collection
            .iter()
            .map(|item| LinkEntry::from_item(item, label))
            .collect()
    };

    match root {
        Some(mut root) if placement.nest_children => {
            root.children = items;
            links.push(root);
        }
        Some(root) => {
            links.push(root);
            links.extend(items);
        }
        None => links.extend(items),
    }
}
