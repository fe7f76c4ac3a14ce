//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::builders::is_valid_url;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Default display name
    pub username: Option<String>,

    /// Default avatar URL
    pub avatar_url: Option<String>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, username: {}, avatar_url: {} }}",
            redact_token(&self.url),
            self.username.as_deref().unwrap_or("none"),
            self.avatar_url.as_deref().unwrap_or("none"),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing, unparsable, or not `http`/`https`
    /// - The avatar URL is set but not a valid URL
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;

        let username = cli
            .username
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.username.clone()));

        let avatar_url = Self::resolve_avatar_url(cli, toml)?;

        Ok(Self {
            url,
            username,
            avatar_url,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path; a leading
    /// `~` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(&expand_tilde(path))?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        let invalid = |reason: String| ConfigError::InvalidUrl {
            field: field::URL,
            url: url_str.to_string(),
            reason,
        };

        let url = Url::parse(url_str).map_err(|e| invalid(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                url.scheme()
            )));
        }

        Ok(url)
    }

    fn resolve_avatar_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<String>, ConfigError> {
        let avatar_url = cli
            .avatar_url
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.avatar_url.clone()));

        match avatar_url {
            Some(url) if !is_valid_url(&url) => Err(ConfigError::InvalidUrl {
                field: field::AVATAR_URL,
                url,
                reason: "not a valid URL".to_string(),
            }),
            other => Ok(other),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let path = expand_tilde(path);
    let template = super::toml::default_config_template();
    std::fs::write(&path, template).map_err(|e| ConfigError::FileWrite { path, source: e })
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a leading `~` component, or when no home directory is
/// known, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

/// Replaces the last path segment (the webhook token) with `***`.
fn redact_token(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if let Some((_, head)) = segments.split_last() {
        let path = head
            .iter()
            .copied()
            .chain(std::iter::once("***"))
            .collect::<Vec<_>>()
            .join("/");
        redacted.set_path(&path);
    }

    redacted.to_string()
}
