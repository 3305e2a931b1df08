//! User service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

const SERVICE_NAME: &str = "user-service";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Store connection settings
    pub database: DatabaseConfig,
    /// HTTP listener and logging settings
    pub service: ServiceConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
                sql_logging: parse_var("DB_SQL_LOGGING").unwrap_or(defaults.database.sql_logging),
            },
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: parse_var("USER_SERVICE_PORT").unwrap_or(defaults.service.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.service.log_level),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
        }
    }
}
