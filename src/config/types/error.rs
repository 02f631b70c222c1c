//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed TOML")]
    Toml(#[from] toml::de::Error),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    #[error("`{0}` is neither .toml nor .json")]
    Format(PathBuf),

    // not #[from]: a source() would print every diagnostic twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks loading.
    Error,
    /// Printed, never fails.
    Warning,
}

/// One finding about the collection config.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    /// e.g. `collection[services].items[seo].slug`
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    /// `error[collection[services]]: message`, hint on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", paint("error", Style::new().red().bold()))?,
            Severity::Warning => write!(f, "{}", paint("warning", Style::new().yellow().bold()))?,
        }
        write!(f, "[{}]: {}", paint(self.field.as_str(), Style::new().cyan()), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {hint}", paint("hint:", Style::new().dimmed()))?;
        }
        Ok(())
    }
}

/// Diagnostics end up on stderr, through the logger or `anyhow`.
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style)).to_string()
}

/// Errors and warnings collected over a whole validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        let diagnostic = ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        };
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    /// Print warnings to stderr, one per line after a counted header.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "collection config has {}:",
            crate::utils::counted_s(self.warnings.len(), "warning"));
        for warning in &self.warnings {
            eprintln!("{warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors; warnings do not count.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// `Err(self)` when any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid collection config ({}):",
            crate::utils::counted_s(self.errors.len(), "error")
        )?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("collections.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("cannot read"));
        assert!(display.contains("collections.toml"));

        let format_err = ConfigError::Format(PathBuf::from("site.yaml"));
        assert!(format!("{format_err}").contains("site.yaml"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::collection("services"), "only a warning");
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::collection("Services"),
            "invalid collection name",
            "use lowercase letters, digits and hyphens",
        );
        assert!(diag.has_errors());
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].hint.as_deref(), Some("use lowercase letters, digits and hyphens"));
        assert_eq!(err.errors()[0].severity, Severity::Error);
    }

    #[test]
    fn test_diagnostic_rendering() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::collection("a b"), "invalid collection name", "use `a-b`");
        diag.warn(FieldPath::collection("services"), "parent not found");

        assert_eq!(
            diag.to_string(),
            "invalid collection config (1 error):\nerror[collection[a b]]: invalid collection name\n  hint: use `a-b`"
        );
        assert_eq!(
            diag.warnings()[0].to_string(),
            "warning[collection[services]]: parent not found"
        );
    }
}
