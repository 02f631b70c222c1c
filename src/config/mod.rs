//! Site configuration: collections, items and static queries.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── collection # [[collection]] and [[collection.items]]
//! │   ├── info       # [site]
//! │   └── menu       # [[query]], add-to-query placements
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Both TOML (`.toml`) and JSON (`.json`) files are accepted; the layout is
//! the same in either format.

pub mod section;
pub mod types;

pub use section::{
    CollectionConfig, MenuPlacement, ReferenceDecl, SiteInfoConfig, StaticQueryConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};

use crate::log;
use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path the config was loaded from (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    pub site: SiteInfoConfig,

    /// Static queries (`[[query]]`)
    #[serde(rename = "query")]
    pub queries: Vec<StaticQueryConfig>,

    /// Collections in declaration order (`[[collection]]`)
    #[serde(rename = "collection")]
    pub collections: Vec<CollectionConfig>,
}

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::Format(path.to_path_buf())),
        }
    }
}

impl SiteConfig {
    /// Load, report unknown fields and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse configuration from JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Read a config file with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let format = Format::of(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = match format {
            Format::Toml => Self::parse_with_ignored(&content),
            Format::Json => Self::parse_json_with_ignored(&content),
        }
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_json_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once; warnings are
    /// printed and never fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        for query in &self.queries {
            query.validate(&mut diag);
        }
        for collection in &self.collections {
            collection.validate(&mut diag);
        }
        self.validate_collection_names(&mut diag);
        self.validate_collection_aliases(&mut diag);
        self.validate_references(&mut diag);

        diag
    }

    fn validate_collection_names(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for collection in &self.collections {
            if !seen.insert(collection.name.as_str()) {
                diag.error(
                    FieldPath::collection(&collection.name).field("name"),
                    format!("duplicate collection `{}`", collection.name),
                );
            }
        }
    }

    /// A collection alias may neither shadow a collection nor be shared.
    fn validate_collection_aliases(&self, diag: &mut ConfigDiagnostics) {
        let names: FxHashSet<&str> = self.collections.iter().map(|c| c.name.as_str()).collect();
        let mut claimed: FxHashMap<&str, &str> = FxHashMap::default();

        for collection in &self.collections {
            let field = FieldPath::collection(&collection.name).field("redirect-from");
            for alias in &collection.redirect_from {
                if names.contains(alias.as_str()) {
                    diag.error(
                        field.clone(),
                        format!("alias `{alias}` is already a collection name"),
                    );
                } else if let Some(owner) = claimed.insert(alias.as_str(), collection.name.as_str())
                    && owner != collection.name
                {
                    diag.error_with_hint(
                        field.clone(),
                        format!("alias `{alias}` is also claimed by collection `{owner}`"),
                        "an alias must redirect to exactly one collection",
                    );
                }
            }
        }
    }

    fn validate_references(&self, diag: &mut ConfigDiagnostics) {
        let names: FxHashSet<&str> = self.collections.iter().map(|c| c.name.as_str()).collect();
        for collection in &self.collections {
            let Some(references) = &collection.references else {
                continue;
            };
            for decl in references {
                if !names.contains(decl.collection.as_str()) {
                    diag.error(
                        FieldPath::collection(&collection.name).index("references", &decl.field),
                        format!("reference target `{}` is not a collection", decl.collection),
                    );
                }
            }
        }
    }

    /// Find a collection config by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
