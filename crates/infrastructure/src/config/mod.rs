//! Application configuration module

pub mod app_config;

mod tests;

pub use app_config::{
    AppConfig, ConfigError, DatabaseConfig, LoggingConfig, Result, ServerConfig,
};
