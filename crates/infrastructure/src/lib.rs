//! Infrastructure Layer
//!
//! Contains the repository implementations and application configuration

pub mod config;
pub mod database;
pub mod repositories;

// Re-exports
pub use config::{AppConfig, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
pub use database::{DatabasePool, PostgresAppointmentRepository, PostgresProfessionalRepository};
pub use repositories::{InMemoryAppointmentRepository, InMemoryProfessionalRepository};
