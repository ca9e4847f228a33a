//! View Configuration
//!
//! Server location, script fetching and password-reset settings, persisted as TOML.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{LOGIN_PAGE, PASSWORD_RESET_PAGE, SCRIPT_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// Runtime configuration of the view client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Base URL relative script files and pages resolve against
    pub base_url: Option<String>,
    /// Timeout for one remote script fetch
    pub script_timeout_secs: u64,
    pub password_reset: PasswordResetConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            script_timeout_secs: SCRIPT_TIMEOUT_SECS,
            password_reset: PasswordResetConfig::default(),
        }
    }
}

impl ViewConfig {
    /// Resolve a possibly relative URL against `base_url`
    pub fn resolve(&self, url: &str) -> Result<String> {
        resolve_url(self.base_url.as_deref(), url)
    }
}

/// Password reset endpoints and user-facing texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordResetConfig {
    /// Endpoint the username is posted to
    pub endpoint: String,
    /// Page shown after a completed reset request
    pub login_page: String,
    pub error_header: String,
    pub error_content: String,
    pub connection_error: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            endpoint: PASSWORD_RESET_PAGE.to_string(),
            login_page: LOGIN_PAGE.to_string(),
            error_header: "Error".to_string(),
            error_content: "Password reset failed".to_string(),
            connection_error: "Connection error".to_string(),
        }
    }
}

/// Resolve `url` against an optional base URL
///
/// Absolute URLs are returned unchanged.
pub fn resolve_url(base: Option<&str>, url: &str) -> Result<String> {
    if let Ok(absolute) = Url::parse(url) {
        return Ok(absolute.to_string());
    }

    let Some(base) = base else {
        return Err(Error::Invalid {
            message: format!("Relative URL `{url}` requires a base_url"),
        });
    };

    Url::parse(base)
        .and_then(|base| base.join(url))
        .map(|joined| joined.to_string())
        .map_err(|e| Error::Invalid {
            message: format!("Cannot resolve `{url}` against `{base}`: {e}"),
        })
}

/// Get or create the default configuration file path
fn get_view_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("view.toml");

    #[cfg(debug_assertions)]
    info!("View config file: {}", path.display());

    if !path.exists() {
        std::fs::write(&path, "")?;
    }

    Ok(path)
}

/// Load the configuration from `path`, or from the platform config directory
pub fn load_view_config(path: Option<&Path>) -> Result<ViewConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => get_view_config_path()?,
    };
    let value = std::fs::read_to_string(&path)?;
    parse_view_config(&value)
}

/// Parse configuration text; an empty file yields the defaults
pub fn parse_view_config(value: &str) -> Result<ViewConfig> {
    if value.trim().is_empty() {
        return Ok(ViewConfig::default());
    }
    Ok(toml::from_str(value)?)
}

/// Save the configuration to `path`
pub fn save_view_config(path: &Path, config: &ViewConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_view_config("  \n").expect("empty");

        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.password_reset.login_page, "login.html");
        assert_eq!(config.script_timeout_secs, 30);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = parse_view_config(
            r#"
            base_url = "http://localhost:8080/qcadoo/"

            [password_reset]
            error_header = "Blad"
            "#,
        )
        .expect("parse");

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/qcadoo/"));
        assert_eq!(config.password_reset.error_header, "Blad");
        assert_eq!(config.password_reset.endpoint, "passwordReset.html");
    }

    #[test]
    fn test_resolves_relative_and_absolute_urls() {
        let config = ViewConfig {
            base_url: Some("http://localhost:8080/qcadoo/".to_string()),
            ..ViewConfig::default()
        };

        assert_eq!(
            config.resolve("js/form.js").expect("relative"),
            "http://localhost:8080/qcadoo/js/form.js"
        );
        assert_eq!(
            config.resolve("https://cdn.example.com/x.js").expect("absolute"),
            "https://cdn.example.com/x.js"
        );
        assert!(ViewConfig::default().resolve("js/form.js").is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = parse_view_config("base_url = [").unwrap_err();
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let path = std::env::temp_dir().join(format!("qcd-view-config-{}.toml", std::process::id()));
        let config = ViewConfig {
            base_url: Some("http://example.com/".to_string()),
            script_timeout_secs: 5,
            ..ViewConfig::default()
        };

        save_view_config(&path, &config).expect("save");
        let loaded = load_view_config(Some(&path)).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
