//! Application Layer
//!
//! Orchestrates domain logic and coordinates between the HTTP transport
//! and the repository ports

pub mod appointment_service;
pub mod professional_service;

// Re-exports
pub use appointment_service::AppointmentService;
pub use professional_service::ProfessionalService;
