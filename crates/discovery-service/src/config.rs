//! Discovery service configuration.
//!
//! Configuration is loaded from environment variables. The database URL is
//! redacted in Debug output.

use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default maximum number of pooled database connections.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Default per-statement timeout in seconds.
pub const DEFAULT_DB_STATEMENT_TIMEOUT_SECONDS: u32 = 5;

/// Discovery service configuration.
///
/// Loaded from environment variables with sensible defaults. The read-replica
/// URL is redacted in Debug output to prevent credential leakage.
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL read-replica connection URL.
    pub database_read_url: String,

    /// Maximum pooled connections (default: 20).
    pub db_max_connections: u32,

    /// Per-statement timeout in seconds (default: 5).
    pub db_statement_timeout_seconds: u32,
}

/// Custom Debug implementation that redacts sensitive fields.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_read_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field(
                "db_statement_timeout_seconds",
                &self.db_statement_timeout_seconds,
            )
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid max connections configuration: {0}")]
    InvalidMaxConnections(String),

    #[error("Invalid statement timeout configuration: {0}")]
    InvalidStatementTimeout(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        // Prefer the dedicated read-replica URL; fall back to the primary URL
        // for single-database deployments.
        let database_read_url = vars
            .get("DATABASE_READ_REPLICA_URL")
            .or_else(|| vars.get("DATABASE_URL"))
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_READ_REPLICA_URL".to_string()))?
            .clone();

        // Parse max connections with validation
        let db_max_connections = if let Some(value_str) = vars.get("DB_MAX_CONNECTIONS") {
            let value: u32 = value_str.parse().map_err(|e| {
                ConfigError::InvalidMaxConnections(format!(
                    "DB_MAX_CONNECTIONS must be a valid positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidMaxConnections(
                    "DB_MAX_CONNECTIONS must be greater than 0".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_DB_MAX_CONNECTIONS
        };

        // Parse statement timeout with validation
        let db_statement_timeout_seconds =
            if let Some(value_str) = vars.get("DB_STATEMENT_TIMEOUT_SECONDS") {
                let value: u32 = value_str.parse().map_err(|e| {
                    ConfigError::InvalidStatementTimeout(format!(
                        "DB_STATEMENT_TIMEOUT_SECONDS must be a valid positive integer, got '{}': {}",
                        value_str, e
                    ))
                })?;

                if value == 0 {
                    return Err(ConfigError::InvalidStatementTimeout(
                        "DB_STATEMENT_TIMEOUT_SECONDS must be greater than 0".to_string(),
                    ));
                }

                value
            } else {
                DEFAULT_DB_STATEMENT_TIMEOUT_SECONDS
            };

        Ok(Config {
            database_read_url,
            db_max_connections,
            db_statement_timeout_seconds,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base_vars() -> HashMap<String, String> {
        HashMap::from([(
            "DATABASE_READ_REPLICA_URL".to_string(),
            "postgresql://localhost/discovery_test".to_string(),
        )])
    }

    #[test]
    fn test_from_vars_success_with_defaults() {
        let vars = base_vars();

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(
            config.database_read_url,
            "postgresql://localhost/discovery_test"
        );
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(
            config.db_statement_timeout_seconds,
            DEFAULT_DB_STATEMENT_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_from_vars_success_with_custom_values() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "50".to_string());
        vars.insert("DB_STATEMENT_TIMEOUT_SECONDS".to_string(), "10".to_string());

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.db_max_connections, 50);
        assert_eq!(config.db_statement_timeout_seconds, 10);
    }

    #[test]
    fn test_falls_back_to_database_url() {
        let vars = HashMap::from([(
            "DATABASE_URL".to_string(),
            "postgresql://localhost/primary".to_string(),
        )]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(config.database_read_url, "postgresql://localhost/primary");
    }

    #[test]
    fn test_read_replica_url_wins_over_database_url() {
        let mut vars = base_vars();
        vars.insert(
            "DATABASE_URL".to_string(),
            "postgresql://localhost/primary".to_string(),
        );

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(
            config.database_read_url,
            "postgresql://localhost/discovery_test"
        );
    }

    #[test]
    fn test_from_vars_missing_database_url() {
        let vars = HashMap::new();

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "DATABASE_READ_REPLICA_URL")
        );
    }

    #[test]
    fn test_max_connections_rejects_zero() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "0".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidMaxConnections(msg)) if msg.contains("must be greater than 0"))
        );
    }

    #[test]
    fn test_max_connections_rejects_non_numeric() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "twenty".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidMaxConnections(msg)) if msg.contains("must be a valid positive integer"))
        );
    }

    #[test]
    fn test_statement_timeout_rejects_zero() {
        let mut vars = base_vars();
        vars.insert("DB_STATEMENT_TIMEOUT_SECONDS".to_string(), "0".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidStatementTimeout(msg)) if msg.contains("must be greater than 0"))
        );
    }

    #[test]
    fn test_statement_timeout_rejects_non_numeric() {
        let mut vars = base_vars();
        vars.insert(
            "DB_STATEMENT_TIMEOUT_SECONDS".to_string(),
            "five".to_string(),
        );

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidStatementTimeout(msg)) if msg.contains("must be a valid positive integer"))
        );
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let vars = base_vars();
        let config = Config::from_vars(&vars).expect("Config should load successfully");

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("postgresql://"));
        assert!(!debug_output.contains("discovery_test"));
    }
}
