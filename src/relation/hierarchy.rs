//! Parent/child relations inside a hierarchical collection.
//!
//! An item may list several parents, so the structure is a graph rather
//! than a tree. Every traversal here carries a visited set; cycles end the
//! walk instead of looping.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::query::LinkEntry;
use crate::store::{Collection, ItemRef};

/// Items listing `item` as a parent, collection order.
pub fn children<'s>(item: ItemRef<'s>) -> Vec<ItemRef<'s>> {
    item.collection()
        .iter()
        .filter(|other| other.index() != item.index() && other.has_parent(item.slug()))
        .collect()
}

/// Every item reachable by climbing parents, nearest first.
///
/// Breadth-first from `item.parent`. Dangling parent slugs are skipped and
/// each ancestor appears once; `item` is never its own ancestor.
pub fn ancestors<'s>(item: ItemRef<'s>) -> Vec<ItemRef<'s>> {
    let collection = item.collection();
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(item.slug());

    let mut queue: VecDeque<&str> = item.parent.iter().map(String::as_str).collect();
    let mut found = Vec::new();

    while let Some(slug) = queue.pop_front() {
        if !visited.insert(slug) {
            continue;
        }
        let Some(parent) = collection.get(slug) else {
            continue;
        };
        found.push(parent);
        queue.extend(parent.item().parent.iter().map(String::as_str));
    }

    found
}

/// Items sharing a parent with `item`; for a top-level item, the other
/// top-level items. Never contains `item`.
pub fn siblings<'s>(item: ItemRef<'s>) -> Vec<ItemRef<'s>> {
    let others = item
        .collection()
        .iter()
        .filter(move |other| other.index() != item.index());

    if item.is_top_level() {
        others.filter(|other| other.is_top_level()).collect()
    } else {
        others
            .filter(|other| other.parent.iter().any(|p| item.has_parent(p)))
            .collect()
    }
}

/// Deepest menu level, roots included.
pub const MAX_MENU_DEPTH: usize = 8;

/// Nested menu built from parent links.
///
/// Roots are the top-level items. An item with several parents appears
/// under each of them; a branch stops where it would revisit an item
/// already on its own path, or below [`MAX_MENU_DEPTH`] levels.
pub fn menu_tree(collection: &Collection, label_field: Option<&str>) -> Vec<LinkEntry> {
    let mut builder = MenuBuilder::new(collection, label_field);
    collection
        .iter()
        .filter(|item| item.is_top_level())
        .map(|root| builder.build(root, MAX_MENU_DEPTH).node)
        .collect()
}

struct Built {
    node: LinkEntry,
    height: usize,
    /// No branch below was cut, so the subtree is the same on every path.
    complete: bool,
}

struct MenuBuilder<'a> {
    label_field: Option<&'a str>,
    children: Vec<Vec<ItemRef<'a>>>,
    /// Complete subtrees by item index, with their height.
    built: Vec<Option<(LinkEntry, usize)>>,
    path: Vec<usize>,
}

impl<'a> MenuBuilder<'a> {
    fn new(collection: &'a Collection, label_field: Option<&'a str>) -> Self {
        Self {
            label_field,
            children: collection.iter().map(children).collect(),
            built: vec![None; collection.len()],
            path: Vec::new(),
        }
    }

    fn build(&mut self, item: ItemRef<'a>, levels: usize) -> Built {
        let index = item.index();
        if let Some((node, height)) = &self.built[index]
            && *height <= levels
        {
            return Built {
                node: node.clone(),
                height: *height,
                complete: true,
            };
        }

        let mut built = Built {
            node: LinkEntry::from_item(item, self.label_field),
            height: 1,
            complete: true,
        };
        self.path.push(index);
        for i in 0..self.children[index].len() {
            let child = self.children[index][i];
            if levels == 1 || self.path.contains(&child.index()) {
                built.complete = false;
                continue;
            }
            let sub = self.build(child, levels - 1);
            built.height = built.height.max(sub.height + 1);
            built.complete &= sub.complete;
            built.node.children.push(sub.node);
        }
        self.path.pop();

        if built.complete {
            self.built[index] = Some((built.node.clone(), built.height));
        }
        built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CollectionStore, test_store};

    fn slugs(items: &[ItemRef<'_>]) -> Vec<String> {
        items.iter().map(|i| i.slug().to_owned()).collect()
    }

    fn cyclic_store() -> CollectionStore {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "topics"
hierarchical = true
[[collection.items]]
slug = "a"
parent = "c"
[[collection.items]]
slug = "b"
parent = ["a", "ghost"]
[[collection.items]]
slug = "c"
parent = ["b", "a"]
[[collection.items]]
slug = "self"
parent = "self"
"#,
        );
        CollectionStore::new(config.collections)
    }

    #[test]
    fn test_children_multi_parent() {
        let store = test_store();
        let creation = store.find("services", "website-creation").unwrap();
        assert_eq!(slugs(&children(creation)), ["web-design", "web-development"]);

        let branding = store.find("services", "branding").unwrap();
        assert_eq!(slugs(&children(branding)), ["web-design", "logo-design"]);

        let seo = store.find("services", "seo-optimization").unwrap();
        assert!(children(seo).is_empty());
    }

    #[test]
    fn test_ancestors() {
        let store = test_store();
        let design = store.find("services", "web-design").unwrap();
        assert_eq!(slugs(&ancestors(design)), ["website-creation", "branding"]);

        let creation = store.find("services", "website-creation").unwrap();
        assert!(ancestors(creation).is_empty());
    }

    #[test]
    fn test_ancestors_terminate_on_cycles() {
        let store = cyclic_store();
        let topics = store.get("topics").unwrap();

        for item in topics.iter() {
            let found = ancestors(item);
            assert!(!found.contains(&item), "{} is its own ancestor", item.slug());
            let unique: FxHashSet<_> = found.iter().map(|i| i.id()).collect();
            assert_eq!(unique.len(), found.len());
        }

        let b = topics.get("b").unwrap();
        assert_eq!(slugs(&ancestors(b)), ["a", "c"]);
        assert!(ancestors(topics.get("self").unwrap()).is_empty());
    }

    #[test]
    fn test_siblings() {
        let store = test_store();
        let development = store.find("services", "web-development").unwrap();
        assert_eq!(slugs(&siblings(development)), ["web-design"]);

        // web-design shares website-creation and branding
        let design = store.find("services", "web-design").unwrap();
        assert_eq!(slugs(&siblings(design)), ["web-development", "logo-design"]);

        let branding = store.find("services", "branding").unwrap();
        assert_eq!(slugs(&siblings(branding)), ["website-creation", "seo-optimization"]);
    }

    #[test]
    fn test_siblings_irreflexive() {
        for store in [test_store(), cyclic_store()] {
            for item in store.iter() {
                assert!(!siblings(item).contains(&item));
            }
        }
    }

    #[test]
    fn test_menu_tree() {
        let store = test_store();
        let tree = menu_tree(store.get("services").unwrap(), None);
        let roots: Vec<_> = tree.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(roots, ["Website Creation", "Branding", "SEO Optimization"]);

        // web-design sits under both of its parents
        assert_eq!(tree[0].children[0].href, "/services/web-design");
        assert_eq!(tree[1].children[0].href, "/services/web-design");
        assert_eq!(tree[1].children[1].label, "Logo Design");
    }

    #[test]
    fn test_menu_tree_cuts_cycles() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "topics"
hierarchical = true
[[collection.items]]
slug = "root"
[[collection.items]]
slug = "a"
parent = ["root", "b"]
[[collection.items]]
slug = "b"
parent = "a"
"#,
        );
        let store = CollectionStore::new(config.collections);
        let tree = menu_tree(store.get("topics").unwrap(), None);
        assert_eq!(tree.len(), 1);
        let a = &tree[0].children[0];
        let b = &a.children[0];
        assert_eq!(b.href, "/topics/b");
        assert!(b.children.is_empty());
    }

    #[test]
    fn test_menu_tree_layered_graph_is_bounded() {
        // every item lists both items of the layer above as parents
        let mut toml = String::from("[[collection]]\nname = \"layers\"\nhierarchical = true\n");
        for layer in 0..40 {
            for side in ["l", "r"] {
                toml.push_str(&format!("[[collection.items]]\nslug = \"{side}{layer}\"\n"));
                if layer > 0 {
                    toml.push_str(&format!("parent = [\"l{0}\", \"r{0}\"]\n", layer - 1));
                }
            }
        }
        let store = CollectionStore::new(crate::config::test_parse_config(&toml).collections);
        let tree = menu_tree(store.get("layers").unwrap(), None);

        fn count(nodes: &[LinkEntry]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        fn depth(nodes: &[LinkEntry]) -> usize {
            nodes.iter().map(|n| 1 + depth(&n.children)).max().unwrap_or(0)
        }

        assert_eq!(tree.len(), 2);
        assert_eq!(depth(&tree), MAX_MENU_DEPTH);
        assert_eq!(count(&tree), 2 * ((1 << MAX_MENU_DEPTH) - 1));
    }

    #[test]
    fn test_menu_tree_shared_subtrees_match() {
        let config = crate::config::test_parse_config(
            r#"
[[collection]]
name = "topics"
hierarchical = true
[[collection.items]]
slug = "left"
[[collection.items]]
slug = "right"
[[collection.items]]
slug = "shared"
parent = ["left", "right"]
[[collection.items]]
slug = "leaf"
parent = "shared"
"#,
        );
        let store = CollectionStore::new(config.collections);
        let tree = menu_tree(store.get("topics").unwrap(), None);

        assert_eq!(tree[0].children, tree[1].children);
        assert_eq!(tree[0].children[0].children[0].href, "/topics/leaf");
    }
}
