//! Booking Repository Ports
//!
//! Repository interfaces for persisting and retrieving appointments
//! and professionals

use super::entities::{Appointment, Professional};
use crate::shared_kernel::{AppointmentId, DomainResult, ProfessionalId};

/// Repository port for the Appointment aggregate
#[async_trait::async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Saves an appointment, inserting or overwriting by id
    async fn save(&self, appointment: &Appointment) -> DomainResult<()>;

    /// Finds an appointment by its ID
    async fn find_by_id(&self, id: &AppointmentId) -> DomainResult<Option<Appointment>>;

    /// Lists the appointments booked against one professional, oldest first
    async fn find_by_professional(
        &self,
        professional_id: &ProfessionalId,
    ) -> DomainResult<Vec<Appointment>>;
}

/// Repository port for Professional records
#[async_trait::async_trait]
pub trait ProfessionalRepository: Send + Sync {
    /// Saves a professional, inserting or overwriting by id
    async fn save(&self, professional: &Professional) -> DomainResult<()>;

    /// Finds a professional by its ID
    async fn find_by_id(&self, id: &ProfessionalId) -> DomainResult<Option<Professional>>;

    /// Finds a professional by email, first match in store order
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Professional>>;
}
