//! Errors surfaced by collection lookups and query execution.
//!
//! A missing item is not an error: lookups return `Option` and relational
//! queries return empty results, redirects end in Not-Found.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No collection with this name exists in the store.
    #[error("collection `{0}` does not exist")]
    InvalidCollection(String),

    /// No query with this name was registered.
    #[error("query `{0}` is not registered")]
    QueryNotFound(String),

    /// Two definitions claim the same query name.
    #[error("query `{0}` is already registered")]
    DuplicateQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCollection("servces".into());
        assert_eq!(err.to_string(), "collection `servces` does not exist");

        let err = Error::QueryNotFound("RelatedThings".into());
        assert!(err.to_string().contains("RelatedThings"));
    }
}
