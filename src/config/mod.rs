//! Configuration module

pub mod settings;

pub use settings::{
    CacheConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig, Settings,
};
