//! Configuration snapshot for the template helpers.
//!
//! A [`HelperConfig`] is captured once when the helpers are registered and is
//! read, never written, by every helper call for the rest of the run. It can
//! be built programmatically or loaded from a YAML, JSON or TOML file.
//!
//! # Examples
//!
//! ```
//! use tsgen_helpers::core::config::{HelperConfig, HttpClient};
//!
//! let config = HelperConfig::new(HttpClient::Axios).with_use_union_types(true);
//! assert!(config.use_union_types);
//! assert!(!config.use_options);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Request transport flavor the generated client targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpClient {
    #[default]
    Fetch,
    Xhr,
    Node,
    Axios,
    Angular,
}

impl HttpClient {
    /// Get the identifier used in templates and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpClient::Fetch => "fetch",
            HttpClient::Xhr => "xhr",
            HttpClient::Node => "node",
            HttpClient::Axios => "axios",
            HttpClient::Angular => "angular",
        }
    }

    /// Get all supported transports
    pub fn all() -> Vec<HttpClient> {
        vec![
            HttpClient::Fetch,
            HttpClient::Xhr,
            HttpClient::Node,
            HttpClient::Axios,
            HttpClient::Angular,
        ]
    }
}

impl fmt::Display for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpClient {
    type Err = crate::core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpClient::all()
            .into_iter()
            .find(|client| client.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::core::Error::config(format!("Unknown HTTP client: {s}")))
    }
}

/// Read-only options threaded through every helper call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperConfig {
    /// Transport flavor; only forwarded to the type renderer
    #[serde(default, alias = "http_client")]
    pub http_client: HttpClient,

    /// Reserved; only forwarded to the type renderer
    #[serde(default, alias = "use_options")]
    pub use_options: bool,

    /// Inline enums as literal unions instead of referencing `Parent.Name`
    #[serde(default, alias = "use_union_types")]
    pub use_union_types: bool,
}

impl HelperConfig {
    /// Create a config for the given transport with every flag off
    pub fn new(http_client: HttpClient) -> Self {
        Self {
            http_client,
            ..Default::default()
        }
    }

    pub fn with_use_options(mut self, use_options: bool) -> Self {
        self.use_options = use_options;
        self
    }

    pub fn with_use_union_types(mut self, use_union_types: bool) -> Self {
        self.use_union_types = use_union_types;
        self
    }

    /// Load configuration from a file; the format follows the extension
    /// (`.json`, `.toml`, anything else is read as YAML)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::core::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        tracing::debug!(path = %path.display(), ?config, "loaded helper configuration");
        Ok(config)
    }

    /// Save configuration to a file in the format implied by its extension
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::core::Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::of(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}
