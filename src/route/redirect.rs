//! Request path resolution: aliases, canonical URLs and Not-Found.
//!
//! # Two segments: `/<collection>/<slug>`
//!
//! 1. collection alias -> canonical collection
//! 2. item alias inside that collection -> canonical slug
//! 3. no such item -> Not-Found
//! 4. anything rewritten -> redirect to `/<collection>/<slug>`, else canonical
//!
//! # One segment: `/<slug>`
//!
//! 1. collection alias -> `/<collection>`
//! 2. item alias in any collection (store order) -> that item's URL
//! 3. item slug, single-segment collections first, then any collection
//!    (store order): canonical for single-segment collections, else
//!    redirect to `/<collection>/<slug>`
//! 4. Not-Found

use std::sync::Arc;

use crate::debug;
use crate::store::CollectionStore;

use super::AliasIndex;

/// Target of every Not-Found outcome.
pub const NOT_FOUND: &str = "/404";

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Already canonical, serve as is.
    Canonical,
    /// Permanent redirect to this path.
    To(String),
    NotFound,
}

impl Redirect {
    /// Where to send the request: `None` for canonical paths.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Canonical => None,
            Self::To(path) => Some(path),
            Self::NotFound => Some(NOT_FOUND),
        }
    }

    #[inline]
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical)
    }
}

/// Resolves request paths against the store and its aliases.
#[derive(Debug)]
pub struct Redirector {
    store: Arc<CollectionStore>,
    aliases: AliasIndex,
}

impl Redirector {
    pub fn new(store: Arc<CollectionStore>) -> Self {
        let aliases = AliasIndex::new(&store);
        Self { store, aliases }
    }

    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Resolve `/<collection>/<slug>`.
    pub fn two_segment(&self, collection: &str, slug: &str) -> Redirect {
        let store = &self.store;

        let target = match self.aliases.collection(collection) {
            Some(id) => {
                let canonical = &store.collections()[id];
                debug!("redirect"; "collection alias /{} -> /{}", collection, canonical.name());
                Some(canonical)
            }
            None => store.get(collection),
        };
        let Some(target) = target else {
            debug!("redirect"; "/{}/{} -> {} (unknown collection)", collection, slug, NOT_FOUND);
            return Redirect::NotFound;
        };

        let item = match self.aliases.item(target.id(), slug) {
            Some(index) => target.iter().nth(index),
            None => target.get(slug),
        };
        let Some(item) = item else {
            debug!("redirect"; "/{}/{} -> {} (unknown item)", collection, slug, NOT_FOUND);
            return Redirect::NotFound;
        };

        if target.name() == collection && item.slug() == slug {
            Redirect::Canonical
        } else {
            let path = format!("/{}/{}", target.name(), item.slug());
            debug!("redirect"; "/{}/{} -> {}", collection, slug, path);
            Redirect::To(path)
        }
    }

    /// Resolve `/<slug>`.
    pub fn single_segment(&self, slug: &str) -> Redirect {
        let store = &self.store;

        if let Some(id) = self.aliases.collection(slug) {
            let path = store.collections()[id].path();
            debug!("redirect"; "collection alias /{} -> {}", slug, path);
            return Redirect::To(path);
        }

        if let Some(id) = self.aliases.any_item(slug) {
            let path = store.at(id).canonical_path();
            debug!("redirect"; "item alias /{} -> {}", slug, path);
            return Redirect::To(path);
        }

        // `/<slug>` is the own URL of a single-segment item; never shadow it
        let item = store
            .collections()
            .iter()
            .filter(|c| c.is_single_segment())
            .find_map(|c| c.get(slug))
            .or_else(|| store.collections().iter().find_map(|c| c.get(slug)));
        if let Some(item) = item {
            if item.collection().is_single_segment() {
                return Redirect::Canonical;
            }
            let path = item.canonical_path();
            debug!("redirect"; "/{} -> {}", slug, path);
            return Redirect::To(path);
        }

        debug!("redirect"; "/{} -> {}", slug, NOT_FOUND);
        Redirect::NotFound
    }

    /// Split a request path and dispatch on its segment count.
    ///
    /// A bare collection name is its own root page when the collection has
    /// one; otherwise it resolves like any other slug. The empty path is
    /// canonical and three or more segments are Not-Found.
    pub fn resolve_path(&self, path: &str) -> Redirect {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Redirect::Canonical,
            [name] if self.store.get(name).is_some_and(|c| c.meta().has_page) => {
                Redirect::Canonical
            }
            [slug] => self.single_segment(slug),
            [collection, slug] => self.two_segment(collection, slug),
            _ => Redirect::NotFound,
        }
    }
}
