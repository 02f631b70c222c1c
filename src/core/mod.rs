//! Core types - pure helpers shared across the codebase.

mod link;
mod slug;

pub use link::{LinkKind, is_external_link};
pub use slug::{is_valid_slug, query_suffix};
