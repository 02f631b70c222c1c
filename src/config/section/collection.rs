//! `[[collection]]` configuration.
//!
//! ```toml
//! [[collection]]
//! name = "services"
//! has-page = true
//! items-has-page = true
//! hierarchical = true
//! redirect-from = ["service"]
//!
//! [[collection.items]]
//! slug = "web-design"
//! title = "Web Design"
//! parent = "website-creation"
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, MenuPlacement};
use crate::core::is_valid_slug;
use crate::query::COMPUTED_FIELDS;
use crate::store::{CollectionMeta, Item, ReferenceField};

/// Explicit reference field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDecl {
    /// Item field holding the slugs.
    pub field: String,
    /// Collection the slugs point into.
    pub collection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CollectionConfig {
    pub name: String,
    pub title: String,
    pub description: String,
    pub has_page: bool,
    pub items_has_page: bool,
    pub hierarchical: bool,
    pub redirect_from: Vec<String>,
    pub collection_slug_in_item: bool,
    /// Inferred from item fields when absent.
    pub references: Option<Vec<ReferenceDecl>>,
    pub add_to_query: Vec<MenuPlacement>,
    pub items: Vec<Item>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            has_page: false,
            items_has_page: false,
            hierarchical: false,
            redirect_from: Vec::new(),
            collection_slug_in_item: true, // `/collection/slug` unless opted out
            references: None,
            add_to_query: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl CollectionConfig {
    /// Split into the parts the store keeps.
    pub fn into_parts(self) -> (String, CollectionMeta, Option<Vec<ReferenceField>>, Vec<Item>) {
        let references = self.references.map(|decls| {
            decls
                .into_iter()
                .map(|decl| ReferenceField {
                    field: decl.field,
                    target: decl.collection,
                })
                .collect()
        });
        let meta = CollectionMeta {
            title: self.title,
            description: self.description,
            has_page: self.has_page,
            items_has_page: self.items_has_page,
            hierarchical: self.hierarchical,
            redirect_from: self.redirect_from,
            collection_slug_in_item: self.collection_slug_in_item,
            add_to_query: self.add_to_query,
        };
        (self.name, meta, references, self.items)
    }

    /// Checks local to this collection: slugs, aliases, parents.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::collection(&self.name);

        if !is_valid_slug(&self.name) {
            diag.error_with_hint(
                field.field("name"),
                format!("invalid collection name `{}`", self.name),
                "use lowercase letters, digits and hyphens",
            );
        }

        for placement in &self.add_to_query {
            placement.validate(&field, diag);
        }

        let mut slugs = FxHashSet::default();
        for item in &self.items {
            let item_field = field.index("items", &item.slug);
            if !is_valid_slug(&item.slug) {
                diag.error_with_hint(
                    item_field.field("slug"),
                    format!("invalid slug `{}`", item.slug),
                    "use lowercase letters, digits and hyphens",
                );
            }
            if !slugs.insert(item.slug.as_str()) {
                diag.error(item_field.field("slug"), format!("duplicate slug `{}`", item.slug));
            }
            for placement in &item.add_to_query {
                placement.validate(&item_field, diag);
            }
            for key in COMPUTED_FIELDS.iter().filter(|key| item.extra.contains_key(**key)) {
                diag.error_with_hint(
                    item_field.field(key),
                    format!("`{key}` is computed for every item"),
                    "set `link` to override where the item points",
                );
            }
        }

        self.validate_aliases(&slugs, diag);
        self.validate_parents(&slugs, diag);
    }

    fn validate_aliases(&self, slugs: &FxHashSet<&str>, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::collection(&self.name);
        let mut claimed: FxHashMap<&str, &str> = FxHashMap::default();

        for item in &self.items {
            let alias_field = field.index("items", &item.slug).field("redirect-from");
            for alias in &item.redirect_from {
                if slugs.contains(alias.as_str()) {
                    diag.error(
                        alias_field.clone(),
                        format!("alias `{alias}` is already the slug of an item"),
                    );
                } else if let Some(owner) = claimed.insert(alias.as_str(), item.slug.as_str())
                    && owner != item.slug
                {
                    diag.error_with_hint(
                        alias_field.clone(),
                        format!("alias `{alias}` is also claimed by `{owner}`"),
                        "an alias must redirect to exactly one item",
                    );
                }
            }
        }
    }

    fn validate_parents(&self, slugs: &FxHashSet<&str>, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::collection(&self.name);

        if !self.hierarchical {
            for item in self.items.iter().filter(|item| !item.is_top_level()) {
                diag.warn(
                    field.index("items", &item.slug).field("parent"),
                    "`parent` is ignored because the collection is not hierarchical",
                );
            }
            return;
        }

        for item in &self.items {
            for parent in item.parent.iter().filter(|p| !slugs.contains(p.as_str())) {
                diag.warn(
                    field.index("items", &item.slug).field("parent"),
                    format!("parent `{parent}` does not exist"),
                );
            }
        }

        let parents: FxHashMap<&str, &[String]> = self
            .items
            .iter()
            .map(|item| (item.slug.as_str(), item.parent.as_slice()))
            .collect();
        for item in &self.items {
            if reaches_itself(&item.slug, &parents) {
                diag.warn(
                    field.index("items", &item.slug).field("parent"),
                    "parent chain loops back to this item",
                );
            }
        }
    }
}

/// Whether climbing parents from `slug` comes back to `slug`.
fn reaches_itself(slug: &str, parents: &FxHashMap<&str, &[String]>) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack: Vec<&str> = parents
        .get(slug)
        .into_iter()
        .flat_map(|p| p.iter().map(String::as_str))
        .collect();

    while let Some(current) = stack.pop() {
        if current == slug {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(next) = parents.get(current) {
            stack.extend(next.iter().map(String::as_str));
        }
    }
    false
}
