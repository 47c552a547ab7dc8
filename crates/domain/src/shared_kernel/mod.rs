//! Shared Kernel - Common types shared across the booking context
//!
//! This module contains:
//! - Error types and DomainResult
//! - Identifier value objects (AppointmentId, ProfessionalId)
//! - The appointment status enum

pub mod error;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use types::*;
