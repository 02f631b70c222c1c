//! `[site]` configuration.

use serde::{Deserialize, Serialize};

use crate::store::JsonMap;

/// Site metadata. Informational only; echoed by `check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Custom fields, kept verbatim.
    pub extra: JsonMap,
}

impl SiteInfoConfig {
    /// `url`, when set, must carry a scheme.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(url) = &self.url
            && !crate::core::is_external_link(url)
        {
            diag.error_with_hint(
                crate::config::FieldPath::new("site.url"),
                format!("`{url}` is not an absolute URL"),
                "use a full URL such as `https://example.com`",
            );
        }
    }
}
