//! Collection store: every collection and item, indexed once, read-only.
//!
//! Items are addressed by [`ItemId`] (collection index + item index), so
//! equal slugs in different collections never alias each other.
//!
//! Reference fields are resolved during construction. A collection either
//! declares them (`references = [{ field, collection }]`) or they are
//! inferred from its items: an extra field named after a collection whose
//! value is a list of strings. Dangling slugs are dropped at this point and
//! never show up in relational results.

mod item;

pub use item::Item;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::{CollectionConfig, MenuPlacement};
use crate::{Error, Result};

/// JSON object used for free-form item fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Collection-qualified item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub collection: usize,
    pub index: usize,
}

/// Collection-level settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionMeta {
    pub title: String,
    pub description: String,
    /// The collection root `/<name>` renders a page.
    pub has_page: bool,
    /// Default for items without their own `has-page`.
    pub items_has_page: bool,
    pub hierarchical: bool,
    /// Collection aliases.
    pub redirect_from: Vec<String>,
    /// `/<collection>/<slug>` when true, `/<slug>` otherwise.
    pub collection_slug_in_item: bool,
    pub add_to_query: Vec<MenuPlacement>,
}

/// A reference field: items of this collection list slugs of `target`
/// under `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceField {
    pub field: String,
    pub target: String,
}

#[derive(Debug)]
pub struct Collection {
    id: usize,
    name: String,
    meta: CollectionMeta,
    items: Vec<Item>,
    by_slug: FxHashMap<String, usize>,
    fields: Vec<ReferenceField>,
    /// `refs[item][field]`: resolved targets, aligned with `fields`.
    refs: Vec<Vec<Vec<ItemId>>>,
}

impl Collection {
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn meta(&self) -> &CollectionMeta {
        &self.meta
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_hierarchical(&self) -> bool {
        self.meta.hierarchical
    }

    /// Items are served at `/<slug>` rather than `/<collection>/<slug>`.
    #[inline]
    pub fn is_single_segment(&self) -> bool {
        !self.meta.collection_slug_in_item
    }

    /// Collection root URL.
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }

    pub fn reference_fields(&self) -> &[ReferenceField] {
        &self.fields
    }

    /// Whether any reference field points at `target`.
    pub fn references_collection(&self, target: &str) -> bool {
        self.fields.iter().any(|f| f.target == target)
    }

    pub fn get(&self, slug: &str) -> Option<ItemRef<'_>> {
        self.by_slug
            .get(slug)
            .map(|&index| ItemRef { collection: self, index })
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemRef<'_>> {
        (0..self.items.len()).map(move |index| ItemRef { collection: self, index })
    }

    /// Resolved references of item `index` into `target`, field declaration
    /// order, duplicates kept.
    pub(crate) fn references(&self, index: usize, target: &str) -> impl Iterator<Item = ItemId> {
        self.fields
            .iter()
            .zip(&self.refs[index])
            .filter(move |(field, _)| field.target == target)
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// All resolved references of item `index`, grouped per field.
    pub(crate) fn field_refs(&self, index: usize) -> impl Iterator<Item = (&ReferenceField, &[ItemId])> {
        self.fields
            .iter()
            .zip(&self.refs[index])
            .map(|(field, ids)| (field, ids.as_slice()))
    }
}

/// Borrowed handle to one item together with its collection.
#[derive(Debug, Clone, Copy)]
pub struct ItemRef<'s> {
    collection: &'s Collection,
    index: usize,
}

impl<'s> ItemRef<'s> {
    #[inline]
    pub fn id(&self) -> ItemId {
        ItemId {
            collection: self.collection.id,
            index: self.index,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn collection(&self) -> &'s Collection {
        self.collection
    }

    #[inline]
    pub fn item(&self) -> &'s Item {
        &self.collection.items[self.index]
    }

    #[inline]
    pub fn slug(&self) -> &'s str {
        &self.item().slug
    }

    /// Effective `has-page`: the item's own flag, else the collection default.
    pub fn has_page(&self) -> bool {
        self.item()
            .has_page
            .unwrap_or(self.collection.meta.items_has_page)
    }

    /// Canonical URL of this item.
    pub fn canonical_path(&self) -> String {
        if self.collection.is_single_segment() {
            format!("/{}", self.slug())
        } else {
            format!("/{}/{}", self.collection.name, self.slug())
        }
    }
}

impl std::ops::Deref for ItemRef<'_> {
    type Target = Item;

    fn deref(&self) -> &Item {
        self.item()
    }
}

impl PartialEq for ItemRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ItemRef<'_> {}

/// Name-indexed store of every collection, in configuration order.
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: Vec<Collection>,
    by_name: FxHashMap<String, usize>,
}

impl CollectionStore {
    /// Build the store and resolve reference fields.
    ///
    /// Duplicate collection names or slugs keep the first occurrence in the
    /// indices; configuration validation reports them separately.
    pub fn new(configs: Vec<CollectionConfig>) -> Self {
        let mut by_name = FxHashMap::default();
        let mut collections = Vec::with_capacity(configs.len());
        let mut declared = Vec::with_capacity(configs.len());

        for (id, config) in configs.into_iter().enumerate() {
            let (name, meta, references, items) = config.into_parts();
            by_name.entry(name.clone()).or_insert(id);

            let mut by_slug = FxHashMap::default();
            for (index, item) in items.iter().enumerate() {
                by_slug.entry(item.slug.clone()).or_insert(index);
            }

            declared.push(references);
            collections.push(Collection {
                id,
                name,
                meta,
                items,
                by_slug,
                fields: Vec::new(),
                refs: Vec::new(),
            });
        }

        let mut store = Self {
            collections,
            by_name,
        };

        for (id, references) in declared.into_iter().enumerate() {
            let fields = references.unwrap_or_else(|| store.infer_fields(id));
            let refs = store.resolve_fields(id, &fields);
            let collection = &mut store.collections[id];
            collection.fields = fields;
            collection.refs = refs;
        }

        store
    }

    /// Reference fields of collection `id` guessed from item data.
    fn infer_fields(&self, id: usize) -> Vec<ReferenceField> {
        let mut seen = FxHashSet::default();
        let mut fields = Vec::new();
        for item in &self.collections[id].items {
            for key in item.extra.keys() {
                if self.by_name.contains_key(key)
                    && item.slug_list(key).is_some()
                    && seen.insert(key.as_str())
                {
                    fields.push(ReferenceField {
                        field: key.clone(),
                        target: key.clone(),
                    });
                }
            }
        }
        fields
    }

    fn resolve_fields(&self, id: usize, fields: &[ReferenceField]) -> Vec<Vec<Vec<ItemId>>> {
        self.collections[id]
            .items
            .iter()
            .map(|item| {
                fields
                    .iter()
                    .map(|field| {
                        let Some(target) = self.get(&field.target) else {
                            return Vec::new();
                        };
                        item.slug_list(&field.field)
                            .unwrap_or_default()
                            .into_iter()
                            .filter_map(|slug| target.get(slug).map(|r| r.id()))
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|c| c.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.by_name.get(name).map(|&id| &self.collections[id])
    }

    /// Like [`get`](Self::get), with a missing collection as an error.
    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.get(name)
            .ok_or_else(|| Error::InvalidCollection(name.to_owned()))
    }

    /// Look up an item. Unknown collection is an error, unknown slug is not.
    pub fn item(&self, collection: &str, slug: &str) -> Result<Option<ItemRef<'_>>> {
        Ok(self.collection(collection)?.get(slug))
    }

    /// Look up an item, treating every miss as `None`.
    pub fn find(&self, collection: &str, slug: &str) -> Option<ItemRef<'_>> {
        self.get(collection)?.get(slug)
    }

    /// Resolve an id produced by this store.
    #[inline]
    pub fn at(&self, id: ItemId) -> ItemRef<'_> {
        ItemRef {
            collection: &self.collections[id.collection],
            index: id.index,
        }
    }

    /// Every item in store order.
    pub fn iter(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.collections.iter().flat_map(Collection::iter)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Agency-style fixture: hierarchical services, projects referencing
/// services, testimonials referencing projects, single-segment pages.
#[cfg(test)]
pub const TEST_COLLECTIONS: &str = r#"
[[collection]]
name = "services"
title = "Services"
has-page = true
items-has-page = true
hierarchical = true
redirect-from = ["service"]

[[collection.items]]
slug = "website-creation"
title = "Website Creation"
featured = true

[[collection.items]]
slug = "web-design"
title = "Web Design"
parent = ["website-creation", "branding"]
redirect-from = ["webdesign"]

[[collection.items]]
slug = "web-development"
title = "Web Development"
parent = "website-creation"

[[collection.items]]
slug = "branding"
title = "Branding"

[[collection.items]]
slug = "logo-design"
title = "Logo Design"
parent = "branding"
has-page = false

[[collection.items]]
slug = "seo-optimization"
title = "SEO Optimization"
featured = true
redirect-from = ["seo"]

[[collection]]
name = "projects"
title = "Projects"
has-page = true
items-has-page = true
redirect-from = ["work"]

[[collection.items]]
slug = "project-alpha"
title = "Project Alpha"
featured = true
services = ["web-design", "seo-optimization"]

[[collection.items]]
slug = "project-beta"
title = "Project Beta"
services = ["web-design", "ghost-service"]

[[collection.items]]
slug = "project-gamma"
title = "Project Gamma"
services = ["logo-design"]

[[collection]]
name = "testimonials"
title = "Testimonials"

[[collection.items]]
slug = "happy-client"
title = "Happy Client"
projects = ["project-alpha"]

[[collection.items]]
slug = "repeat-client"
title = "Repeat Client"
projects = ["project-alpha", "project-gamma"]

[[collection]]
name = "pages"
title = "Pages"
items-has-page = true
collection-slug-in-item = false

[[collection.items]]
slug = "about"
title = "About"
redirect-from = ["about-us"]

[[collection.items]]
slug = "phone"
title = "Call us"
link = "tel:+15550100"
has-page = false
"#;

#[cfg(test)]
pub fn test_store() -> CollectionStore {
    let config = crate::config::test_parse_config(TEST_COLLECTIONS);
    CollectionStore::new(config.collections)
}

/// References in every direction: services point back at projects, and
/// clients reach `seo` directly and through both projects.
#[cfg(test)]
pub const BRIDGED_COLLECTIONS: &str = r#"
[[collection]]
name = "services"
[[collection.items]]
slug = "web-design"
projects = ["alpha"]
[[collection.items]]
slug = "seo"
[[collection.items]]
slug = "hosting"
projects = ["alpha"]

[[collection]]
name = "projects"
[[collection.items]]
slug = "alpha"
services = ["web-design", "seo"]
[[collection.items]]
slug = "beta"
services = ["seo"]

[[collection]]
name = "clients"
[[collection.items]]
slug = "acme"
services = ["seo"]
projects = ["alpha", "beta"]
"#;

#[cfg(test)]
pub fn bridged_store() -> CollectionStore {
    let config = crate::config::test_parse_config(BRIDGED_COLLECTIONS);
    CollectionStore::new(config.collections)
}
