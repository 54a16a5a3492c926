//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable selecting the per-environment config overlay
pub const ENVIRONMENT_VAR: &str = "MONSTERS_ENV";

/// Prefix for environment variable overrides (`MONSTERS__SERVER__PORT=9000`)
pub const ENV_PREFIX: &str = "MONSTERS";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_database_url() -> String {
    "sqlite://monsters.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// Listing cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_ttl() -> u64 {
    30
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from `config/` using the environment named by `MONSTERS_ENV`
    pub fn load() -> Result<Self> {
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::load_from_dir("config", &environment)
    }

    /// Load settings from `<dir>/default.yaml`, then `<dir>/<environment>.yaml`,
    /// then `MONSTERS__*` environment variables. Missing files are skipped.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P, environment: &str) -> Result<Self> {
        let dir = dir.as_ref();

        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("server.cors_enabled", true)?
            .set_default("database.url", default_database_url())?
            .set_default("database.max_connections", 5)?
            .set_default("database.create_if_missing", true)?
            .set_default("database.run_migrations", true)?
            .set_default("cache.enabled", true)?
            .set_default("cache.ttl_secs", 30)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "json")?
            .add_source(
                File::from(dir.join("default.yaml"))
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                File::from(dir.join(format!("{}.yaml", environment)))
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.database.url.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Database url cannot be empty".to_string(),
            )));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Database max_connections must be at least 1".to_string(),
            )));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_secs: default_request_timeout(),
                cors_enabled: true,
            },
            database: DatabaseConfig {
                url: default_database_url(),
                max_connections: default_max_connections(),
                create_if_missing: true,
                run_migrations: true,
            },
            cache: CacheConfig {
                enabled: true,
                ttl_secs: default_cache_ttl(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: LogFormat::default(),
            },
        }
    }
}
