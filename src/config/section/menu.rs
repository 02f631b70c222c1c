//! `[[query]]` static queries and `add-to-query` placements.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::query::LinkEntry;

/// A static query declared in configuration, e.g. a navigation menu.
///
/// ```toml
/// [[query]]
/// name = "NavMenu"
/// items = [{ label = "Home", href = "/" }]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StaticQueryConfig {
    pub name: String,
    pub description: String,
    pub items: Vec<LinkEntry>,
}

impl StaticQueryConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(FieldPath::new("query"), "static query without a name");
        }
    }
}

/// Placement of a collection or one item into a static query.
///
/// On a collection: adds the root link `/<collection>` (when the collection
/// has a page) and, with `add-items`, every item. On an item: adds that item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MenuPlacement {
    /// Target static query; created when missing.
    pub name: String,
    /// Item field used as label, falls back to `title`.
    pub label_field: Option<String>,
    /// Also add every item of the collection.
    pub add_items: bool,
    /// Nest items by hierarchy (under the root link when there is one).
    pub nest_children: bool,
}

impl MenuPlacement {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(field.field("add-to-query"), "placement without a query name");
        }
    }
}
