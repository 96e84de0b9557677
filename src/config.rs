//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/boruto-heroes/config.toml`). Every section and field is
//! optional and falls back to its default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [logging]
//! level = "info"
//! format = "json"
//!
//! [catalog]
//! page_size = 5
//!
//! [http]
//! cache_max_age_days = 365
//! images_dir = "resources/images"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::storage::DEFAULT_PAGE_SIZE;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boruto-heroes")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds in-flight requests may take to drain on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// `max-age` of the default `Cache-Control` header, in days
    pub cache_max_age_days: u64,
    /// Directory served under `/images`
    pub images_dir: PathBuf,
    /// Serve Swagger UI at `/docs`
    pub enable_docs: bool,
    /// Record request metrics and serve `/metrics`
    pub enable_metrics: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cache_max_age_days: 365,
            images_dir: PathBuf::from("resources/images"),
            enable_docs: true,
            enable_metrics: true,
        }
    }
}

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

impl HttpConfig {
    /// Value of the default `Cache-Control` response header
    pub fn cache_control(&self) -> String {
        let max_age = self.cache_max_age_days.saturating_mul(SECONDS_PER_DAY);
        format!("public, max-age={}, immutable", max_age)
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.page_size == 0 {
            return Err(ConfigError::Invalid(
                "catalog.page_size must be at least 1".to_string(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("heroes-config-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_reference_server() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.catalog.page_size, 5);
        assert_eq!(
            cfg.http.cache_control(),
            "public, max-age=31536000, immutable"
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn huge_cache_max_age_saturates() {
        let http = HttpConfig {
            cache_max_age_days: u64::MAX,
            ..HttpConfig::default()
        };
        assert_eq!(
            http.cache_control(),
            format!("public, max-age={}, immutable", u64::MAX)
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = write_temp("[server]\nport = 9090\n\n[logging]\nformat = \"json\"\n");
        let cfg = AppConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.catalog.page_size, 5);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let path = write_temp("[catalog]\npage_size = 0\n");
        let err = AppConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = write_temp("[server\nport = ");
        let err = AppConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("heroes-config-does-not-exist.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }
}
