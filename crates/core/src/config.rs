//! Configuration management for the Grounded CLI.
//!
//! This module handles loading and merging configuration from multiple
//! sources:
//! - Built-in defaults
//! - Config file (`grounded.yaml` or `$GROUNDED_CONFIG`)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources win. The node options the flow recognizes (content field,
//! result limit, refusal text) are configuration values, never hardcoded at
//! the call sites.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default name of the document field holding chunk text.
pub const DEFAULT_CONTENT_FIELD: &str = "chunk";

/// Default result-count limit for retrieval.
pub const DEFAULT_TOP: u32 = 3;

/// Default refusal message returned when no context was found.
pub const DEFAULT_REFUSAL: &str =
    "I can only answer questions related to the indexed documents.";

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Search provider (e.g., "azure", "memory")
    pub provider: String,

    /// Base URL of the search service
    pub endpoint: Option<String>,

    /// Name of the index to query
    pub index: Option<String>,

    /// Access key for the search service
    pub api_key: Option<String>,

    /// Environment variable holding the access key
    pub api_key_env: Option<String>,

    /// Document field holding the chunk text
    pub content_field: String,

    /// Result-count limit passed to the search provider
    pub top: u32,

    /// Message returned when retrieval produced no context
    pub refusal: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    search: Option<SearchSection>,
    flow: Option<FlowSection>,
    logging: Option<LoggingSection>,
}

/// `search:` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchSection {
    provider: Option<String>,
    endpoint: Option<String>,
    index: Option<String>,
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
}

/// `flow:` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FlowSection {
    #[serde(rename = "contentField")]
    content_field: Option<String>,
    top: Option<u32>,
    refusal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "azure".to_string(),
            endpoint: None,
            index: None,
            api_key: None,
            api_key_env: None,
            content_field: DEFAULT_CONTENT_FIELD.to_string(),
            top: DEFAULT_TOP,
            refusal: DEFAULT_REFUSAL.to_string(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `GROUNDED_CONFIG`: Path to config file (default: `grounded.yaml`)
    /// - `GROUNDED_PROVIDER`: Search provider
    /// - `GROUNDED_SEARCH_ENDPOINT`: Search service URL
    /// - `GROUNDED_SEARCH_INDEX`: Index name
    /// - `GROUNDED_SEARCH_API_KEY`: Access key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("GROUNDED_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("grounded.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
            tracing::debug!("Merged config file {:?}", config_path);
        }

        // Environment variables override the config file
        if let Ok(provider) = std::env::var("GROUNDED_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(endpoint) = std::env::var("GROUNDED_SEARCH_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        if let Ok(index) = std::env::var("GROUNDED_SEARCH_INDEX") {
            config.index = Some(index);
        }

        if let Ok(api_key) = std::env::var("GROUNDED_SEARCH_API_KEY") {
            config.api_key = Some(api_key);
        }

        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(search) = config_file.search {
            if let Some(provider) = search.provider {
                result.provider = provider;
            }
            if let Some(endpoint) = search.endpoint {
                result.endpoint = Some(endpoint);
            }
            if let Some(index) = search.index {
                result.index = Some(index);
            }
            if let Some(api_key_env) = search.api_key_env {
                result.api_key_env = Some(api_key_env);
            }
        }

        if let Some(flow) = config_file.flow {
            if let Some(content_field) = flow.content_field {
                result.content_field = content_field;
            }
            if let Some(top) = flow.top {
                result.top = top;
            }
            if let Some(refusal) = flow.refusal {
                result.refusal = refusal;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        endpoint: Option<String>,
        index: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }

        if let Some(index) = index {
            self.index = Some(index);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Resolve the search access key.
    ///
    /// An explicit key (`GROUNDED_SEARCH_API_KEY`) wins; otherwise the
    /// variable named by `apiKeyEnv` in the config file is consulted.
    pub fn resolve_api_key(&self) -> AppResult<Option<String>> {
        if let Some(ref key) = self.api_key {
            return Ok(Some(key.clone()));
        }

        if let Some(ref env_var) = self.api_key_env {
            if let Ok(key) = std::env::var(env_var) {
                return Ok(Some(key));
            }
        }

        Ok(None)
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let provider = &self.provider;
        let known_providers = ["azure", "memory"];

        if !known_providers.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                provider,
                known_providers.join(", ")
            )));
        }

        if self.top == 0 {
            return Err(AppError::Config(
                "Result-count limit must be at least 1".to_string(),
            ));
        }

        // Hosted provider needs a complete connection
        if provider == "azure" {
            if self.endpoint.is_none() {
                return Err(AppError::Config(
                    "Search endpoint not set (GROUNDED_SEARCH_ENDPOINT or search.endpoint)"
                        .to_string(),
                ));
            }
            if self.index.is_none() {
                return Err(AppError::Config(
                    "Search index not set (GROUNDED_SEARCH_INDEX or search.index)".to_string(),
                ));
            }
            if self.resolve_api_key()?.is_none() {
                return Err(AppError::Config(
                    "Search API key not set (GROUNDED_SEARCH_API_KEY or search.apiKeyEnv)"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "azure");
        assert_eq!(config.content_field, DEFAULT_CONTENT_FIELD);
        assert_eq!(config.top, DEFAULT_TOP);
        assert_eq!(config.refusal, DEFAULT_REFUSAL);
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            None,
            Some("memory".to_string()),
            Some("https://search.example.net".to_string()),
            Some("docs".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.provider, "memory");
        assert_eq!(
            overridden.endpoint.as_deref(),
            Some("https://search.example.net")
        );
        assert_eq!(overridden.index.as_deref(), Some("docs"));
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "search:\n  endpoint: https://search.example.net\n  index: docs\n  \
             apiKeyEnv: MY_SEARCH_KEY\nflow:\n  contentField: body\n  top: 5\n  \
             refusal: Ask me about the docs.\nlogging:\n  level: warn\n  color: false\n"
        )
        .unwrap();

        let config = AppConfig::default().merge_yaml(file.path()).unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("https://search.example.net"));
        assert_eq!(config.index.as_deref(), Some("docs"));
        assert_eq!(config.api_key_env.as_deref(), Some("MY_SEARCH_KEY"));
        assert_eq!(config.content_field, "body");
        assert_eq!(config.top, 5);
        assert_eq!(config.refusal, "Ask me about the docs.");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_yaml_partial_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "search:\n  index: docs\n").unwrap();

        let config = AppConfig::default().merge_yaml(file.path()).unwrap();

        assert_eq!(config.index.as_deref(), Some("docs"));
        assert_eq!(config.content_field, DEFAULT_CONTENT_FIELD);
        assert_eq!(config.top, DEFAULT_TOP);
        assert_eq!(config.provider, "azure");
    }

    #[test]
    fn test_merge_yaml_rejects_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "search: [not, a, mapping").unwrap();

        assert!(AppConfig::default().merge_yaml(file.path()).is_err());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "unknown".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_azure_requires_connection() {
        let config = AppConfig::default();
        // Default config has no endpoint/index/key
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.endpoint = Some("https://search.example.net".to_string());
        config.index = Some("docs".to_string());
        config.api_key = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_memory_needs_no_connection() {
        let mut config = AppConfig::default();
        config.provider = "memory".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_top() {
        let mut config = AppConfig::default();
        config.provider = "memory".to_string();
        config.top = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_api_key_prefers_explicit() {
        let mut config = AppConfig::default();
        config.api_key = Some("explicit".to_string());
        config.api_key_env = Some("GROUNDED_TEST_KEY_UNSET".to_string());

        assert_eq!(config.resolve_api_key().unwrap().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = AppConfig::default();
        assert!(config.resolve_api_key().unwrap().is_none());
    }
}
