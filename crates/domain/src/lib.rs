//! Domain Core - Booking Business Logic
//!
//! This crate contains the appointment booking entities, value objects,
//! repository ports and shared error types.

pub mod booking;
pub mod shared_kernel;

// Re-exports
pub use booking::{
    Appointment, AppointmentRepository, NewAppointment, NewProfessional, Professional,
    ProfessionalRepository,
};
pub use shared_kernel::{
    AppointmentId, AppointmentStatus, DomainError, DomainResult, ProfessionalId,
};
