//! Slug validation and naming helpers.

use std::sync::LazyLock;

use regex::Regex;

static SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Check that `slug` is a URL-safe token (`[a-z0-9-]+`).
#[inline]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}

/// Suffix used in generated query names.
///
/// `services` -> `Services`, `case-studies` -> `CaseStudies`
pub fn query_suffix(collection: &str) -> String {
    collection
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
