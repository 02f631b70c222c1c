//! Query result entries.
//!
//! A query returns either collection items (all original fields plus
//! `href`) or plain menu links from static queries.

use serde::{Deserialize, Serialize};

use crate::core::LinkKind;
use crate::store::{Item, ItemRef};

/// Keys every resolved item sets itself; item data may not carry them.
pub(crate) const COMPUTED_FIELDS: &[&str] = &["href", "external"];

/// Href of an item: its `link` override, else its canonical path.
fn item_href(item: &ItemRef<'_>) -> (String, bool) {
    match &item.link {
        Some(link) => (link.clone(), LinkKind::parse(link).is_external()),
        None => (item.canonical_path(), false),
    }
}

/// A collection item as returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedItem {
    /// Owning collection.
    #[serde(skip)]
    pub collection: String,
    /// Item fields, `has-page` always filled in.
    #[serde(flatten)]
    pub item: Item,
    pub href: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl From<ItemRef<'_>> for ResolvedItem {
    fn from(item: ItemRef<'_>) -> Self {
        let (href, external) = item_href(&item);
        let mut data = item.item().clone();
        data.has_page = Some(item.has_page());
        data.extra.retain(|key, _| !COMPUTED_FIELDS.contains(&key.as_str()));
        Self {
            collection: item.collection().name().to_owned(),
            item: data,
            href,
            external,
        }
    }
}

/// A menu link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkEntry {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LinkEntry>,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            label: label.into(),
            external: LinkKind::parse(&href).is_external(),
            href,
            children: Vec::new(),
        }
    }

    /// Link to an item, labelled by `label_field` (falls back to the title).
    pub fn from_item(item: ItemRef<'_>, label_field: Option<&str>) -> Self {
        let (href, external) = item_href(&item);
        Self {
            label: item.label(label_field).to_owned(),
            href,
            external,
            children: Vec::new(),
        }
    }

    /// Recompute `external` from `href` for this link and its children.
    pub(crate) fn classify(&mut self) {
        self.external |= LinkKind::parse(&self.href).is_external();
        for child in &mut self.children {
            child.classify();
        }
    }
}

/// One query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Item(ResolvedItem),
    Link(LinkEntry),
}

impl Entry {
    #[inline]
    pub fn href(&self) -> &str {
        match self {
            Self::Item(item) => &item.href,
            Self::Link(link) => &link.href,
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        match self {
            Self::Item(item) => item.external,
            Self::Link(link) => link.external,
        }
    }

    /// The item, for entries that are collection items.
    pub fn as_item(&self) -> Option<&ResolvedItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Link(_) => None,
        }
    }
}

impl From<ItemRef<'_>> for Entry {
    fn from(item: ItemRef<'_>) -> Self {
        Self::Item(item.into())
    }
}

impl From<LinkEntry> for Entry {
    fn from(link: LinkEntry) -> Self {
        Self::Link(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[test]
    fn test_resolved_item_fields() {
        let store = test_store();
        let alpha = store.find("projects", "project-alpha").unwrap();
        let json = serde_json::to_value(Entry::from(alpha)).unwrap();

        assert_eq!(json["href"], "/projects/project-alpha");
        assert_eq!(json["title"], "Project Alpha");
        assert_eq!(json["has-page"], true);
        assert_eq!(json["services"][1], "seo-optimization");
        assert!(json.get("external").is_none());
        assert!(json.get("collection").is_none());
    }

    #[test]
    fn test_computed_fields_win_over_item_data() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "docs"
[[collection.items]]
slug = "intro"
href = "/elsewhere"
external = "yes"
"#,
        );
        let store = crate::store::CollectionStore::new(config.collections);
        let intro = store.find("docs", "intro").unwrap();
        let json = serde_json::to_string(&Entry::from(intro)).unwrap();

        assert_eq!(json.matches("\"href\"").count(), 1);
        assert!(json.contains("\"href\":\"/docs/intro\""));
        assert!(!json.contains("external"));
    }

    #[test]
    fn test_link_override_passes_through() {
        let store = test_store();
        let phone = store.find("pages", "phone").unwrap();
        let entry = Entry::from(phone);
        assert_eq!(entry.href(), "tel:+15550100");
        assert!(entry.is_external());

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["external"], true);
        assert_eq!(json["has-page"], false);
    }

    #[test]
    fn test_link_entry() {
        let link = LinkEntry::new("Docs", "https://docs.example.com");
        assert!(link.external);
        let link = LinkEntry::new("Home", "/");
        assert!(!link.external);

        let json = serde_json::to_value(Entry::from(link)).unwrap();
        assert_eq!(json, serde_json::json!({"label": "Home", "href": "/"}));
    }
}
