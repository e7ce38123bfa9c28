//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use forestal_db::DbConfig;
use serde::{Deserialize, Serialize};

/// Catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub http_host: String,

    /// HTTP port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size
    pub db_max_connections: u32,

    /// Upper bound on a single store call, in milliseconds
    pub db_query_timeout_ms: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,

    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            http_host: var("HTTP_HOST", "0.0.0.0"),

            http_port: var("HTTP_PORT", "5000")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: PathBuf::from(var("DATABASE_PATH", "./data/forestal.db")),

            db_max_connections: var("DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            db_query_timeout_ms: var("DB_QUERY_TIMEOUT_MS", "5000")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_QUERY_TIMEOUT_MS".to_string()))?,

            run_migrations: var("RUN_MIGRATIONS", "true")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RUN_MIGRATIONS".to_string()))?,

            log_level: var("LOG_LEVEL", "info"),

            cors_allow_any: var("CORS_ALLOW_ANY", "true").parse().unwrap_or(true),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        if config.db_query_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("DB_QUERY_TIMEOUT_MS".to_string()));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_HOST".to_string()))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .query_timeout(Duration::from_millis(self.db_query_timeout_ms))
            .run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.database_path, PathBuf::from("./data/forestal.db"));
        assert_eq!(config.db_max_connections, 5);
        assert!(config.run_migrations);
        assert!(config.cors_allow_any);
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides_reach_db_config() {
        let config = load(&[
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_QUERY_TIMEOUT_MS", "250"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();
        let db = config.db_config();
        assert_eq!(db.max_connections, 12);
        assert_eq!(db.query_timeout, Duration::from_millis(250));
        assert!(!db.run_migrations);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = load(&[("HTTP_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HTTP_PORT");

        let err = load(&[("DB_QUERY_TIMEOUT_MS", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_QUERY_TIMEOUT_MS");
    }
}
