//! Everything a site build needs, assembled from one configuration.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::query::{Entry, QueryParams, QueryRegistry};
use crate::route::{Redirect, Redirector};
use crate::store::CollectionStore;
use crate::{Result, debug};

/// Store, query registry and redirector over the same collections.
#[derive(Debug)]
pub struct Site {
    store: Arc<CollectionStore>,
    queries: QueryRegistry,
    redirects: Redirector,
}

impl Site {
    /// Build from a loaded configuration.
    ///
    /// Fails only when two queries end up with the same name, e.g. a
    /// `[[query]]` called `AllItemsServices`.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let store = Arc::new(CollectionStore::new(config.collections.clone()));
        let queries = QueryRegistry::build(Arc::clone(&store), &config.queries)?;
        let redirects = Redirector::new(Arc::clone(&store));

        debug!("site"; "{} collections, {} queries",
            store.collections().len(), queries.definitions().len());

        Ok(Self {
            store,
            queries,
            redirects,
        })
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn queries(&self) -> &QueryRegistry {
        &self.queries
    }

    pub fn redirects(&self) -> &Redirector {
        &self.redirects
    }

    /// Run a named query.
    pub fn execute(&self, name: &str, params: &QueryParams) -> Result<Vec<Entry>> {
        self.queries.execute(name, params)
    }

    /// Redirect target for `/<collection>/<slug>`: `None` when canonical,
    /// `/404` when nothing matches.
    pub fn resolve_two_segment(&self, collection: &str, slug: &str) -> Option<String> {
        self.redirects
            .two_segment(collection, slug)
            .target()
            .map(str::to_owned)
    }

    /// Redirect target for `/<slug>`, same conventions as
    /// [`resolve_two_segment`](Self::resolve_two_segment).
    pub fn resolve_single_segment(&self, slug: &str) -> Option<String> {
        self.redirects.single_segment(slug).target().map(str::to_owned)
    }

    /// Resolve a full request path.
    pub fn resolve_path(&self, path: &str) -> Redirect {
        self.redirects.resolve_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::config::test_parse_config;
    use crate::store::TEST_COLLECTIONS;

    fn site() -> Site {
        Site::from_config(&test_parse_config(TEST_COLLECTIONS)).unwrap()
    }

    #[test]
    fn test_worked_examples() {
        let site = site();

        let params = QueryParams::new().slug("website-creation");
        let children = site.execute("ChildrenServices", &params).unwrap();
        assert!(children.iter().any(|e| e.href() == "/services/web-design"));

        assert_eq!(
            site.resolve_single_segment("seo").as_deref(),
            Some("/services/seo-optimization")
        );
        assert_eq!(
            site.resolve_two_segment("service", "web-design").as_deref(),
            Some("/services/web-design")
        );

        let params = QueryParams::new().slug("project-alpha").collection("projects");
        let related = site.execute("RelatedServices", &params).unwrap();
        assert!(!related.is_empty());
        assert!(related.iter().all(|e| e.href().starts_with("/services/")));
    }

    #[test]
    fn test_canonical_and_missing() {
        let site = site();
        assert_eq!(site.resolve_two_segment("services", "web-design"), None);
        assert_eq!(site.resolve_single_segment("about"), None);
        assert_eq!(site.resolve_single_segment("nowhere").as_deref(), Some("/404"));
        assert_eq!(site.resolve_two_segment("nowhere", "x").as_deref(), Some("/404"));
    }

    #[test]
    fn test_query_name_collision() {
        let config = test_parse_config(
            r#"
[[query]]
name = "AllItemsFaq"

[[collection]]
name = "faq"
"#,
        );
        assert_eq!(
            Site::from_config(&config).unwrap_err(),
            Error::DuplicateQuery("AllItemsFaq".into())
        );
    }
}
