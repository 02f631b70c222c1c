//! Config field locations for diagnostics.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Location of a value inside the configuration file.
///
/// Collections and items are addressed by name/slug rather than index,
/// so messages stay readable for large files:
///
/// ```text
/// collection[services].items[web-design].parent
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// `collection[<name>]`
    pub fn collection(name: &str) -> Self {
        Self(format!("collection[{name}]"))
    }

    /// `query[<name>]`
    pub fn query(name: &str) -> Self {
        Self(format!("query[{name}]"))
    }

    /// Append an indexed child: `<self>.<field>[<key>]`.
    pub fn index(&self, field: &str, key: impl fmt::Display) -> Self {
        Self(format!("{}.{field}[{key}]", self.0))
    }

    /// Append a plain child: `<self>.<field>`.
    pub fn field(&self, field: &str) -> Self {
        Self(format!("{}.{field}", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stream::Stderr, |q| q.bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
