use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Backend search API settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Weather icon asset settings
    #[serde(default)]
    pub icons: IconConfig,
}

/// Backend search API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL for the `/search/weather/*` endpoints
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_search_base_url() -> String {
    "http://localhost:8008".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Weather icon asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Base URL under which `weather_icon/{code}.svg` assets are probed
    #[serde(default = "default_probe_base_url")]
    pub probe_base_url: String,

    /// Remote base URL for the today-popup icon images
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_probe_base_url() -> String {
    "http://localhost:8008".to_string()
}

fn default_image_base_url() -> String {
    "https://www.jma.go.jp/bosai/forecast/img".to_string()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            probe_base_url: default_probe_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tenkimap");

        Self {
            config_dir,
            search: SearchConfig::default(),
            icons: IconConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.search.base_url, "search.base_url", &mut result);
        self.validate_url(
            &self.icons.probe_base_url,
            "icons.probe_base_url",
            &mut result,
        );
        self.validate_url(
            &self.icons.image_base_url,
            "icons.image_base_url",
            &mut result,
        );

        if self.search.timeout_secs == 0 {
            result.add_error("search.timeout_secs", "Timeout must be greater than 0");
        } else if self.search.timeout_secs > 120 {
            result.add_warning(
                "search.timeout_secs",
                "Timeout is unusually long (>120 seconds)",
            );
        }

        result
    }

    fn validate_url(&self, value: &str, field: &str, result: &mut ValidationResult) {
        match Url::parse(value) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(field, format!("URL must be http or https: {}", value));
                }
            }
            Err(e) => {
                result.add_error(field, format!("Invalid URL '{}': {}", value, e));
            }
        }
    }

    /// Path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tenkimap");
        Ok(config_dir.join("config.toml"))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "{}", result.error_summary());
    }

    #[test]
    fn test_default_search_config() {
        let search = SearchConfig::default();
        assert_eq!(search.timeout_secs, 10);
        assert!(search.base_url.starts_with("http"));
    }

    #[test]
    fn test_default_icon_config_points_at_jma() {
        let icons = IconConfig::default();
        assert!(icons.image_base_url.contains("jma.go.jp"));
    }

    #[test]
    fn test_invalid_search_url_is_an_error() {
        let mut config = Config::default();
        config.search.base_url = "not a url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("search.base_url"));
    }

    #[test]
    fn test_zero_timeout_is_an_error() {
        let mut config = Config::default();
        config.search.timeout_secs = 0;
        let result = config.validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_long_timeout_is_a_warning() {
        let mut config = Config::default();
        config.search.timeout_secs = 300;
        let result = config.validate();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.search.base_url, config.search.base_url);
        assert_eq!(parsed.icons.image_base_url, config.icons.image_base_url);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("config_dir = \"/tmp/tenkimap\"").unwrap();
        assert_eq!(parsed.search.timeout_secs, 10);
        assert!(parsed.icons.image_base_url.contains("jma.go.jp"));
    }
}
