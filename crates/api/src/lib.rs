//! HTTP API Layer
//!
//! This crate provides the REST API for the booking application:
//! DTOs, per-domain route modules, middleware and the OpenAPI document.

pub mod api_docs;
pub mod appointment_api;
pub mod dtos;
pub mod middleware;
pub mod professional_api;
pub mod router;

// Re-exports
pub use appointment_api::{AppointmentApiAppState, appointment_api_routes};
pub use professional_api::{ProfessionalApiAppState, professional_api_routes};
pub use router::create_api_router;
