//! Configuration module for the campus API.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key granting the admin and user roles
    pub admin_key: Option<String>,
    /// API key granting the user role
    pub user_key: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_key = lookup("UCSB_ADMIN_KEY").filter(|k| !k.is_empty());
        let user_key = lookup("UCSB_USER_KEY").filter(|k| !k.is_empty());

        let db_path = lookup("UCSB_DB_PATH")
            .unwrap_or_else(|| "./data/app.sqlite".to_string())
            .into();

        let bind_raw = lookup("UCSB_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                var: "UCSB_BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let log_level = lookup("UCSB_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("UCSB_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "UCSB_LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'text' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            admin_key,
            user_key,
            db_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = config_from(&[]).unwrap();

        assert!(config.admin_key.is_none());
        assert!(config.user_key.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("UCSB_ADMIN_KEY", "admin-secret"),
            ("UCSB_USER_KEY", "user-secret"),
            ("UCSB_DB_PATH", "/tmp/campus.sqlite"),
            ("UCSB_BIND_ADDR", "0.0.0.0:9000"),
            ("UCSB_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.admin_key.as_deref(), Some("admin-secret"));
        assert_eq!(config.user_key.as_deref(), Some("user-secret"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/campus.sqlite"));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_key_is_unset() {
        let config = config_from(&[("UCSB_ADMIN_KEY", "")]).unwrap();
        assert!(config.admin_key.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("UCSB_BIND_ADDR", "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("UCSB_BIND_ADDR"));
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(config_from(&[("UCSB_LOG_FORMAT", "xml")]).is_err());
    }
}
