//! Content collection queries, relations and redirects for statically
//! generated sites.
//!
//! Collections of items are loaded once from configuration into a
//! read-only [`store::CollectionStore`]. On top of it:
//!
//! - [`relation`] answers how items relate: direct and reverse references,
//!   multi-hop bridges, parents, children and siblings;
//! - [`query`] exposes named queries (`AllItemsServices`,
//!   `RelatedProjects`, `NavMenu`, ...) behind one `execute` call;
//! - [`route`] maps request paths to canonical URLs through collection and
//!   item aliases, and lists the static routes to generate.
//!
//! [`site::Site`] wires all of it together from a [`config::SiteConfig`].

pub mod config;
pub mod core;
mod error;
pub mod logger;
pub mod query;
pub mod relation;
pub mod route;
pub mod site;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
pub use site::Site;
