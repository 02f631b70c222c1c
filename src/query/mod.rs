//! Named queries over the collection store.
//!
//! | Module       | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `definition` | `QueryDefinition`, `QueryParams`                 |
//! | `entry`      | Result entries (items and menu links)            |
//! | `generate`   | `AllItems`/`Featured`/`Related`/... per collection |
//! | `menu`       | Static queries and `add-to-query` placements     |
//!
//! Results are memoized per `(query, params)`. The store never changes
//! after construction, so a cached result is always current.

mod definition;
mod entry;
mod generate;
mod menu;

pub use definition::{QueryDefinition, QueryFn, QueryParams, QuerySource};
pub(crate) use entry::COMPUTED_FIELDS;
pub use entry::{Entry, LinkEntry, ResolvedItem};
pub use generate::generate;
pub use menu::static_queries;

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::config::StaticQueryConfig;
use crate::store::CollectionStore;
use crate::utils::counted;
use crate::{Error, Result, debug};

type CacheKey = (usize, QueryParams);

/// Query lookup and execution.
#[derive(Debug)]
pub struct QueryRegistry {
    store: Arc<CollectionStore>,
    definitions: Vec<QueryDefinition>,
    by_name: FxHashMap<String, usize>,
    cache: RwLock<FxHashMap<CacheKey, Vec<Entry>>>,
}

impl QueryRegistry {
    /// Empty registry over `store`.
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self {
            store,
            definitions: Vec::new(),
            by_name: FxHashMap::default(),
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Registry with static queries followed by the generated ones.
    pub fn build(store: Arc<CollectionStore>, configured: &[StaticQueryConfig]) -> Result<Self> {
        let mut definitions = static_queries(configured, &store);
        definitions.extend(generate(&store));

        let mut registry = Self::new(store);
        registry.register(definitions)?;
        Ok(registry)
    }

    /// Add definitions. A name already taken is an error; definitions
    /// before the offending one stay registered.
    pub fn register(&mut self, definitions: impl IntoIterator<Item = QueryDefinition>) -> Result<()> {
        for definition in definitions {
            if self.by_name.contains_key(&definition.name) {
                return Err(Error::DuplicateQuery(definition.name));
            }
            self.by_name
                .insert(definition.name.clone(), self.definitions.len());
            self.definitions.push(definition);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&QueryDefinition> {
        self.by_name.get(name).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Definitions in registration order.
    pub fn definitions(&self) -> &[QueryDefinition] {
        &self.definitions
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    /// Run the query called `name`.
    pub fn execute(&self, name: &str, params: &QueryParams) -> Result<Vec<Entry>> {
        let &index = self
            .by_name
            .get(name)
            .ok_or_else(|| Error::QueryNotFound(name.to_owned()))?;

        let key = (index, params.clone());
        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(hit.clone());
        }

        let entries = self.definitions[index].run(&self.store, params)?;
        debug!("query"; "{} -> {}", name, counted(entries.len(), "entry", "entries"));
        self.cache.write().insert(key, entries.clone());
        Ok(entries)
    }

    /// Run without touching the cache.
    pub fn execute_uncached(&self, name: &str, params: &QueryParams) -> Result<Vec<Entry>> {
        self.get(name)
            .ok_or_else(|| Error::QueryNotFound(name.to_owned()))?
            .run(&self.store, params)
    }

    /// Drop all memoized results.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}
