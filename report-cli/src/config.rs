//! TOML configuration for the `activity-report` binary.
//!
//! Every key is optional; missing keys fall back to [`ReportConfig::default`].
//!
//! ```toml
//! output_dir = "reports"
//! default_format = "pdf"      # xlsx | pdf
//! pdf_layout = "calendar"     # table | calendar
//! creator = "Activity Report Generator"
//! allowed_roles = ["admin", "user"]
//! log_level = "info"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use report_core::{AccessPolicy, UserRole};
use report_export::{DEFAULT_CREATOR, ExportFormat, PdfLayout};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory reports are written to; created on first export.
    pub output_dir: PathBuf,
    pub default_format: ExportFormat,
    pub pdf_layout: PdfLayout,
    /// Creator tag embedded in document properties.
    pub creator: String,
    pub allowed_roles: Vec<UserRole>,
    /// Any `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            default_format: ExportFormat::default(),
            pdf_layout: PdfLayout::default(),
            creator: DEFAULT_CREATOR.to_string(),
            allowed_roles: AccessPolicy::default().allowed_roles,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, unknown keys or bad values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        debug!(?config, "parsed report config");
        Ok(config)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// [`ConfigError::Read`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.allowed_roles.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ReportConfig::from_toml_str("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn defaults_allow_both_roles_and_calendar_pdf() {
        let config = ReportConfig::default();

        assert_eq!(config.allowed_roles, vec![UserRole::Admin, UserRole::User]);
        assert_eq!(config.default_format, ExportFormat::Pdf);
        assert_eq!(config.pdf_layout, PdfLayout::Calendar);
        assert_eq!(config.creator, "Activity Report Generator");
    }

    #[test]
    fn full_file_overrides_every_key() {
        let config = ReportConfig::from_toml_str(
            r#"
            output_dir = "reports"
            default_format = "xlsx"
            pdf_layout = "table"
            creator = "Timesheets Inc."
            allowed_roles = ["admin"]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            ReportConfig {
                output_dir: PathBuf::from("reports"),
                default_format: ExportFormat::Xlsx,
                pdf_layout: PdfLayout::Table,
                creator: "Timesheets Inc.".to_string(),
                allowed_roles: vec![UserRole::Admin],
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ReportConfig::from_toml_str("pdf_layout = \"table\"").unwrap();

        assert_eq!(config.pdf_layout, PdfLayout::Table);
        assert_eq!(config.default_format, ExportFormat::Pdf);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ReportConfig::from_toml_str("colour = \"blue\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_enum_value_is_rejected() {
        assert!(ReportConfig::from_toml_str("default_format = \"docx\"").is_err());
    }

    #[test]
    fn access_policy_uses_allowed_roles() {
        let config = ReportConfig::from_toml_str("allowed_roles = [\"admin\"]").unwrap();

        assert!(!config.access_policy().is_authorized(&["user".to_string()]));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReportConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();

        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
