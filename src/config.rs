use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use kitchen_core::state::{INITIAL_VISIBLE, VISIBLE_STEP};
use kitchen_core::DEFAULT_BASE_URL;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Recipe API base URL
    pub api_base_url: ConfigValue<String>,
    /// Directory holding favorites, shopping list and the last search
    pub data_dir: ConfigValue<PathBuf>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: ConfigValue<u64>,
    /// Recipes shown after a search
    pub page_size: ConfigValue<usize>,
    /// Recipes revealed by `kitchen more`
    pub page_step: ConfigValue<usize>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    api_base_url: Option<String>,
    data_dir: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
    page_size: Option<usize>,
    page_step: Option<usize>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut api_base_url =
            ConfigValue::new(DEFAULT_BASE_URL.to_string(), ConfigSource::Default);
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut request_timeout_secs =
            ConfigValue::new(DEFAULT_REQUEST_TIMEOUT_SECS, ConfigSource::Default);
        let mut page_size = ConfigValue::new(INITIAL_VISIBLE, ConfigSource::Default);
        let mut page_step = ConfigValue::new(VISIBLE_STEP, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.api_base_url {
                api_base_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(dir) = file_config.data_dir {
                // Resolve relative paths against config file's directory
                let resolved = if dir.is_relative() {
                    path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
                } else {
                    dir
                };
                data_dir = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(secs) = file_config.request_timeout_secs {
                request_timeout_secs = ConfigValue::new(secs, ConfigSource::File);
            }
            if let Some(size) = file_config.page_size {
                page_size = ConfigValue::new(at_least_one("page_size", size)?, ConfigSource::File);
            }
            if let Some(step) = file_config.page_step {
                page_step = ConfigValue::new(at_least_one("page_step", step)?, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(url) = std::env::var("KITCHEN_API_BASE_URL") {
            api_base_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(dir) = std::env::var("KITCHEN_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(secs) = std::env::var("KITCHEN_REQUEST_TIMEOUT") {
            let secs = secs
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("KITCHEN_REQUEST_TIMEOUT", secs.clone()))?;
            request_timeout_secs = ConfigValue::new(secs, ConfigSource::Environment);
        }

        Ok(Self {
            api_base_url,
            data_dir,
            request_timeout_secs,
            page_size,
            page_step,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/kitchen/
    /// - macOS: ~/Library/Application Support/kitchen/
    /// - Windows: %APPDATA%/kitchen/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kitchen")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/kitchen/
    /// - macOS: ~/Library/Application Support/kitchen/
    /// - Windows: %APPDATA%/kitchen/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kitchen")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// Rejects paging counts of zero.
fn at_least_one(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue(key, "must be at least 1".to_string()));
    }
    Ok(value)
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidEnv(&'static str, String),
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidEnv(var, value) => {
                write!(f, "Invalid value for {}: '{}'", var, value)
            }
            ConfigError::InvalidValue(key, reason) => {
                write!(f, "Invalid config value for {}: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.api_base_url.value, DEFAULT_BASE_URL);
        assert_eq!(config.api_base_url.source, ConfigSource::Default);
        assert!(config.data_dir.value.ends_with("kitchen"));
        assert_eq!(config.page_size.value, 9);
        assert_eq!(config.page_step.value, 6);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "api_base_url: http://localhost:8080/api").unwrap();
        writeln!(file, "data_dir: /custom/kitchen").unwrap();
        writeln!(file, "request_timeout_secs: 3").unwrap();
        writeln!(file, "page_size: 12").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(config.api_base_url.value, "http://localhost:8080/api");
        assert_eq!(config.api_base_url.source, ConfigSource::File);
        assert_eq!(config.data_dir.value, PathBuf::from("/custom/kitchen"));
        assert_eq!(config.request_timeout_secs.value, 3);
        assert_eq!(config.page_size.value, 12);
        assert_eq!(config.page_step.source, ConfigSource::Default);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_data_dir_resolves_against_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_dir: data").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_dir.value, temp_dir.path().join("data"));
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "api_base_url: http://fromfile").unwrap();

        std::env::set_var("KITCHEN_API_BASE_URL", "http://fromenv");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.api_base_url.value, "http://fromenv");
        assert_eq!(config.api_base_url.source, ConfigSource::Environment);

        std::env::remove_var("KITCHEN_API_BASE_URL");
    }

    #[test]
    fn test_zero_paging_is_rejected() {
        let temp_dir = tempdir().unwrap();

        for (key, other) in [("page_step", "page_size"), ("page_size", "page_step")] {
            let config_path = temp_dir.path().join(format!("{}.yaml", key));
            let mut file = std::fs::File::create(&config_path).unwrap();
            writeln!(file, "{}: 0", key).unwrap();
            writeln!(file, "{}: 4", other).unwrap();

            let err = Config::load(Some(config_path)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(k, _) if k == key));
            assert!(err.to_string().contains(key));
        }
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
