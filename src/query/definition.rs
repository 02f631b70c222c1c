//! Query definitions and parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::store::CollectionStore;

use super::Entry;

/// Parameters of a dynamic query.
///
/// With a `slug` the query runs for one item; without one, relational
/// queries aggregate over the whole `current-collection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct QueryParams {
    pub slug: Option<String>,
    pub current_collection: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.current_collection = Some(collection.into());
        self
    }
}

/// Function computing a dynamic query.
pub type QueryFn = dyn Fn(&CollectionStore, &QueryParams) -> Result<Vec<Entry>> + Send + Sync;

/// How a query produces its entries.
pub enum QuerySource {
    /// Fixed entries, parameters ignored.
    Static(Vec<Entry>),
    Dynamic(Box<QueryFn>),
}

impl fmt::Debug for QuerySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(entries) => f.debug_tuple("Static").field(&entries.len()).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic"),
        }
    }
}

/// A named query.
#[derive(Debug)]
pub struct QueryDefinition {
    pub name: String,
    pub description: String,
    pub source: QuerySource,
}

impl QueryDefinition {
    pub fn fixed(name: impl Into<String>, description: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: QuerySource::Static(entries),
        }
    }

    pub fn dynamic<F>(name: impl Into<String>, description: impl Into<String>, run: F) -> Self
    where
        F: Fn(&CollectionStore, &QueryParams) -> Result<Vec<Entry>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            source: QuerySource::Dynamic(Box::new(run)),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.source, QuerySource::Static(_))
    }

    /// Evaluate against `store`.
    pub fn run(&self, store: &CollectionStore, params: &QueryParams) -> Result<Vec<Entry>> {
        match &self.source {
            QuerySource::Static(entries) => Ok(entries.clone()),
            QuerySource::Dynamic(run) => run(store, params),
        }
    }
}
