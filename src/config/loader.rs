//! Configuration file loading with precedence handling.

use crate::model::{PageSize, ResourceKind};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default remote provider.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "TABVIEW_CONFIG";

/// Env var overriding the provider base URL.
pub const BASE_URL_ENV: &str = "TABVIEW_BASE_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Config key.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabview/config.toml`.
///
/// ```toml
/// base_url = "https://dummyjson.com"
/// timeout_secs = 10
/// default_page_size = 10
/// default_resource = "products"
/// product_tabs = ["laptops", "smartphones"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Provider base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Rows per page at startup; one of 5, 10, 20, 50.
    #[serde(default)]
    pub default_page_size: Option<u32>,

    /// Table shown at startup.
    #[serde(default)]
    pub default_resource: Option<ResourceKind>,

    /// Product category slugs offered as tabs after `ALL`.
    #[serde(default)]
    pub product_tabs: Option<Vec<String>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Root URL of the remote API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Rows per page for both tables at startup.
    pub page_size: PageSize,
    /// Table shown first.
    pub resource: ResourceKind,
    /// Category slugs offered as product tabs after `ALL`.
    pub product_tabs: Vec<String>,
    /// Client-side search term applied at startup.
    pub initial_search: Option<String>,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: PageSize::default(),
            resource: ResourceKind::Users,
            product_tabs: vec!["laptops".to_string()],
            initial_search: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabview/tabview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("tabview").join("tabview.log"),
        None => PathBuf::from("tabview.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabview/config.toml` on Unix, appropriate path on other
/// platforms, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/tabview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `TABVIEW_CONFIG` is set to something that is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a page size outside
/// `{5, 10, 20, 50}` or a zero timeout.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.default_page_size {
        Some(raw) => PageSize::try_from(raw).map_err(|e| ConfigError::InvalidValue {
            field: "default_page_size",
            reason: e.to_string(),
        })?,
        None => defaults.page_size,
    };

    let timeout_secs = config.timeout_secs.unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "timeout_secs",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        timeout_secs,
        page_size,
        resource: config.default_resource.unwrap_or(defaults.resource),
        product_tabs: config.product_tabs.unwrap_or(defaults.product_tabs),
        initial_search: defaults.initial_search,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABVIEW_BASE_URL`: Override provider base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        config.base_url = base_url;
    }

    config
}

/// Command-line values that override every other source.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--resource`
    pub resource: Option<ResourceKind>,
    /// `--page-size`
    pub page_size: Option<PageSize>,
    /// `--search`
    pub search: Option<String>,
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--timeout-secs`
    pub timeout_secs: Option<u64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(resource) = cli.resource {
        config.resource = resource;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(search) = cli.search {
        config.initial_search = Some(search);
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
