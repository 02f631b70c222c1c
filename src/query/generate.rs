//! Standard queries generated for every collection.
//!
//! | Query          | Params                          | Result                         |
//! |----------------|---------------------------------|--------------------------------|
//! | `AllItems<X>`  | -                               | every item of `X`              |
//! | `Featured<X>`  | -                               | items with `featured = true`   |
//! | `Related<X>`   | `current-collection`, `slug?`   | items of `X` related to input  |
//! | `Children<X>`  | `slug`                          | direct children (hierarchical) |
//! | `Parent<X>`    | `slug`                          | all ancestors (hierarchical)   |
//! | `Sibling<X>`   | `slug`                          | siblings (hierarchical)        |
//!
//! `<X>` is the collection name in PascalCase.

use crate::Result;
use crate::core::query_suffix;
use crate::relation::{aggregate, ancestors, children, related, siblings};
use crate::store::{Collection, CollectionStore, ItemRef};

use super::{Entry, QueryDefinition, QueryParams};

fn entries<'s>(items: impl IntoIterator<Item = ItemRef<'s>>) -> Vec<Entry> {
    items.into_iter().map(Entry::from).collect()
}

/// Queries for every collection in `store`, store order.
pub fn generate(store: &CollectionStore) -> Vec<QueryDefinition> {
    store
        .collections()
        .iter()
        .flat_map(collection_queries)
        .collect()
}

fn collection_queries(collection: &Collection) -> Vec<QueryDefinition> {
    let name = collection.name().to_owned();
    let suffix = query_suffix(&name);
    let mut queries = Vec::with_capacity(6);

    queries.push(QueryDefinition::dynamic(
        format!("AllItems{suffix}"),
        format!("All items from \"{name}\" collection"),
        {
            let name = name.clone();
            move |store, _| Ok(entries(store.collection(&name)?.iter()))
        },
    ));

    queries.push(QueryDefinition::dynamic(
        format!("Featured{suffix}"),
        format!("Featured items from \"{name}\" collection"),
        {
            let name = name.clone();
            move |store, _| {
                let collection = store.collection(&name)?;
                Ok(entries(collection.iter().filter(|item| item.featured)))
            }
        },
    ));

    queries.push(QueryDefinition::dynamic(
        format!("Related{suffix}"),
        format!("Items from \"{name}\" related to the current item or collection"),
        {
            let name = name.clone();
            move |store, params| related_query(store, params, &name)
        },
    ));

    if collection.is_hierarchical() {
        type Walk = for<'s> fn(ItemRef<'s>) -> Vec<ItemRef<'s>>;
        let walks: [(&str, &str, Walk); 3] = [
            ("Children", "Direct children of the current item", children),
            ("Parent", "All ancestors of the current item", ancestors),
            ("Sibling", "Items sharing a parent with the current item", siblings),
        ];
        for (prefix, description, walk) in walks {
            let name = name.clone();
            queries.push(QueryDefinition::dynamic(
                format!("{prefix}{suffix}"),
                format!("{description} in \"{name}\""),
                move |store, params| {
                    let Some(slug) = &params.slug else {
                        return Ok(Vec::new());
                    };
                    Ok(store
                        .item(&name, slug)?
                        .map(|item| entries(walk(item)))
                        .unwrap_or_default())
                },
            ));
        }
    }

    queries
}

/// `Related<X>`: one item with a slug, the whole current collection without.
fn related_query(store: &CollectionStore, params: &QueryParams, target: &str) -> Result<Vec<Entry>> {
    let Some(current) = &params.current_collection else {
        return Ok(Vec::new());
    };
    match &params.slug {
        Some(slug) => Ok(store
            .item(current, slug)?
            .map(|item| related(store, item, target))
            .transpose()?
            .map(entries)
            .unwrap_or_default()),
        None => Ok(entries(aggregate(store, current, target)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[test]
    fn test_generated_names() {
        let store = test_store();
        let names: Vec<_> = generate(&store).into_iter().map(|q| q.name).collect();
        assert_eq!(
            &names[..6],
            [
                "AllItemsServices",
                "FeaturedServices",
                "RelatedServices",
                "ChildrenServices",
                "ParentServices",
                "SiblingServices"
            ]
        );
        // flat collections get three queries each
        assert_eq!(names.len(), 6 + 3 * 3);
        assert!(!names.contains(&"ChildrenProjects".to_owned()));
    }

    #[test]
    fn test_featured() {
        let store = test_store();
        let query = generate(&store)
            .into_iter()
            .find(|q| q.name == "FeaturedServices")
            .unwrap();
        let hrefs: Vec<_> = query
            .run(&store, &QueryParams::new())
            .unwrap()
            .iter()
            .map(|e| e.href().to_owned())
            .collect();
        assert_eq!(hrefs, ["/services/website-creation", "/services/seo-optimization"]);
    }
}
