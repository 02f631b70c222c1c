//! Collection item model.

use serde::{Deserialize, Serialize};

use crate::config::MenuPlacement;

use super::JsonMap;

/// `parent` accepts a single slug, a list of slugs, or nothing.
fn deserialize_parent<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(slug)) => vec![slug],
        Some(OneOrMany::Many(slugs)) => slugs,
    })
}

/// Deserialize a list, treating `null` as empty vec
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// One entry of a collection.
///
/// # Standard Fields
///
/// | Field           | Type                 | Description                          |
/// |-----------------|----------------------|--------------------------------------|
/// | `slug`          | `String`             | URL token, unique in the collection  |
/// | `title`         | `String`             | Display title                        |
/// | `parent`        | `Vec<String>`        | Parent slugs (hierarchical only)     |
/// | `featured`      | `bool`               | Listed by `Featured<X>` queries      |
/// | `has-page`      | `Option<bool>`       | Overrides `items-has-page`           |
/// | `redirect-from` | `Vec<String>`        | Legacy slugs redirecting here        |
/// | `link`          | `Option<String>`     | Href override (`tel:`, `https:`)     |
/// | `add-to-query`  | `Vec<MenuPlacement>` | Static queries listing this item     |
///
/// # Custom Fields (`extra`)
///
/// Everything else lands in `extra` verbatim, reference fields included:
/// a field named after a collection holding a list of slugs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Item {
    pub slug: String,
    pub title: String,
    #[serde(
        deserialize_with = "deserialize_parent",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parent: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_page: Option<bool>,
    /// Legacy slugs. Input only, used for redirects.
    #[serde(deserialize_with = "deserialize_list", skip_serializing)]
    pub redirect_from: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Menu placements. Input only, consumed while building static queries.
    #[serde(skip_serializing)]
    pub add_to_query: Vec<MenuPlacement>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Item {
    /// True when this item lists no parent (a root of its hierarchy).
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.parent.is_empty()
    }

    /// Whether `slug` is one of this item's parents.
    #[inline]
    pub fn has_parent(&self, slug: &str) -> bool {
        self.parent.iter().any(|p| p == slug)
    }

    /// Label for menus: `field` when it holds a string, otherwise the title.
    pub fn label(&self, field: Option<&str>) -> &str {
        field
            .and_then(|name| self.extra.get(name))
            .and_then(|value| value.as_str())
            .unwrap_or(&self.title)
    }

    /// Slug list stored under an extra field, if it is a list of strings.
    pub fn slug_list(&self, field: &str) -> Option<Vec<&str>> {
        let values = self.extra.get(field)?.as_array()?;
        values.iter().map(|v| v.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_one_or_many() {
        let one: Item = serde_json::from_str(r#"{"slug": "seo", "parent": "marketing"}"#).unwrap();
        assert_eq!(one.parent, vec!["marketing"]);

        let many: Item =
            serde_json::from_str(r#"{"slug": "seo", "parent": ["marketing", "web"]}"#).unwrap();
        assert_eq!(many.parent, vec!["marketing", "web"]);

        let none: Item = serde_json::from_str(r#"{"slug": "seo", "parent": null}"#).unwrap();
        assert!(none.is_top_level());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let item: Item = serde_json::from_str(
            r#"{"slug": "alpha", "title": "Alpha", "services": ["seo"], "client": "ACME"}"#,
        )
        .unwrap();
        assert_eq!(item.slug_list("services"), Some(vec!["seo"]));
        assert_eq!(item.slug_list("client"), None);
        assert_eq!(item.extra["client"], "ACME");
    }

    #[test]
    fn test_label_falls_back_to_title() {
        let item: Item =
            serde_json::from_str(r#"{"slug": "a", "title": "Alpha", "menu-label": "A"}"#).unwrap();
        assert_eq!(item.label(Some("menu-label")), "A");
        assert_eq!(item.label(Some("missing")), "Alpha");
        assert_eq!(item.label(None), "Alpha");
    }

    #[test]
    fn test_serialize_skips_input_only_fields() {
        let item: Item = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "redirect-from": ["old-a"], "color": "red"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("redirect-from").is_none());
        assert!(json.get("add-to-query").is_none());
        assert_eq!(json["color"], "red");
        assert_eq!(json["slug"], "a");
    }
}
