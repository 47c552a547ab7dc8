//! In-Memory Repositories
//!
//! Vec-backed implementations of the booking repository ports, used by
//! tests and local development. Listing preserves insertion order.

use domain::booking::{Appointment, Professional};
use domain::shared_kernel::{AppointmentId, DomainResult, ProfessionalId};
use tokio::sync::Mutex;

pub struct InMemoryAppointmentRepository {
    appointments: Mutex<Vec<Appointment>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            appointments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl domain::booking::AppointmentRepository for InMemoryAppointmentRepository {
    async fn save(&self, appointment: &Appointment) -> DomainResult<()> {
        let mut appointments = self.appointments.lock().await;

        if let Some(index) = appointments.iter().position(|a| a.id == appointment.id) {
            appointments[index] = appointment.clone();
        } else {
            appointments.push(appointment.clone());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AppointmentId) -> DomainResult<Option<Appointment>> {
        let appointments = self.appointments.lock().await;
        Ok(appointments.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_by_professional(
        &self,
        professional_id: &ProfessionalId,
    ) -> DomainResult<Vec<Appointment>> {
        let appointments = self.appointments.lock().await;
        Ok(appointments
            .iter()
            .filter(|a| a.professional.id == *professional_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryProfessionalRepository {
    professionals: Mutex<Vec<Professional>>,
}

impl InMemoryProfessionalRepository {
    pub fn new() -> Self {
        Self {
            professionals: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl domain::booking::ProfessionalRepository for InMemoryProfessionalRepository {
    async fn save(&self, professional: &Professional) -> DomainResult<()> {
        let mut professionals = self.professionals.lock().await;

        if let Some(index) = professionals.iter().position(|p| p.id == professional.id) {
            professionals[index] = professional.clone();
        } else {
            professionals.push(professional.clone());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfessionalId) -> DomainResult<Option<Professional>> {
        let professionals = self.professionals.lock().await;
        Ok(professionals.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Professional>> {
        let professionals = self.professionals.lock().await;
        Ok(professionals.iter().find(|p| p.email == email).cloned())
    }
}
