//! Booking Bounded Context
//!
//! Manages professionals and the appointments booked against them
//! - Appointment aggregate root and its status lifecycle
//! - Professional entity
//! - Creation payload value objects
//! - Repository ports

pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports
pub use entities::{Appointment, Professional};
pub use repositories::{AppointmentRepository, ProfessionalRepository};
pub use value_objects::{NewAppointment, NewProfessional};
