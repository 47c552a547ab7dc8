//! Application Service for Appointment Management

use domain::booking::{Appointment, AppointmentRepository, NewAppointment};
use domain::shared_kernel::{AppointmentId, DomainError, DomainResult, ProfessionalId};

pub struct AppointmentService {
    appointment_repo: Box<dyn AppointmentRepository>,
}

impl AppointmentService {
    pub fn new(appointment_repo: Box<dyn AppointmentRepository>) -> Self {
        Self { appointment_repo }
    }

    /// Books a new appointment, always starting in pending status
    ///
    /// Any status carried by the payload is discarded. The referenced
    /// professional is stored as given, without an existence check.
    pub async fn create_appointment(
        &self,
        new_appointment: NewAppointment,
    ) -> DomainResult<Appointment> {
        let appointment = Appointment::new(
            AppointmentId::new(uuid::Uuid::new_v4().to_string()),
            new_appointment.client_name,
            new_appointment.date,
            new_appointment.time,
            new_appointment.professional,
        );
        self.appointment_repo.save(&appointment).await?;
        Ok(appointment)
    }

    /// Lists the appointments booked against one professional
    ///
    /// Returns an empty list both for an unknown professional and for a
    /// known one with no bookings.
    pub async fn list_appointments_by_professional(
        &self,
        professional_id: &ProfessionalId,
    ) -> DomainResult<Vec<Appointment>> {
        self.appointment_repo
            .find_by_professional(professional_id)
            .await
    }

    pub async fn get_appointment(&self, id: &AppointmentId) -> DomainResult<Appointment> {
        self.appointment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Appointment not found".to_string()))
    }

    /// Confirms an appointment whatever its current status
    pub async fn confirm_appointment(&self, id: &AppointmentId) -> DomainResult<Appointment> {
        let mut appointment = self.get_appointment(id).await?;

        appointment.confirm();
        self.appointment_repo.save(&appointment).await?;

        Ok(appointment)
    }

    /// Cancels an appointment whatever its current status
    pub async fn cancel_appointment(&self, id: &AppointmentId) -> DomainResult<Appointment> {
        let mut appointment = self.get_appointment(id).await?;

        appointment.cancel();
        self.appointment_repo.save(&appointment).await?;

        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use domain::booking::Professional;
    use domain::shared_kernel::AppointmentStatus;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockAppointmentRepository {
        appointments: Arc<Mutex<Vec<Appointment>>>,
    }

    impl MockAppointmentRepository {
        fn new() -> Self {
            Self {
                appointments: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl AppointmentRepository for MockAppointmentRepository {
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

    fn professional(id: &str) -> Professional {
        Professional {
            id: ProfessionalId::new(id.to_string()),
            name: format!("Professional {}", id),
            email: format!("{}@clinic.example", id),
            password: "secret".to_string(),
        }
    }

    fn payload(client_name: &str, professional_id: &str) -> NewAppointment {
        NewAppointment::new(
            client_name.to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            professional(professional_id),
        )
    }

    fn service() -> AppointmentService {
        AppointmentService::new(Box::new(MockAppointmentRepository::new()))
    }

    #[tokio::test]
    async fn test_create_appointment_starts_pending() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert!(!appointment.id.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_create_appointment_discards_requested_status() {
        let service = service();

        let mut new_appointment = payload("Alice", "prof-1");
        new_appointment.status = Some(AppointmentStatus::Confirmed);

        let appointment = service.create_appointment(new_appointment).await.unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pending);

        let stored = service.get_appointment(&appointment.id).await.unwrap();
        assert_eq!(stored.status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_appointment_generates_unique_ids() {
        let service = service();

        let first = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();
        let second = service
            .create_appointment(payload("Bob", "prof-1"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_appointment_not_found() {
        let service = service();

        let missing = AppointmentId::new("nonexistent".to_string());
        let result = service.get_appointment(&missing).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_confirm_appointment_persists_new_status() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        let confirmed = service.confirm_appointment(&appointment.id).await.unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

        let stored = service.get_appointment(&appointment.id).await.unwrap();
        assert_eq!(stored.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_confirm_appointment_twice_is_idempotent() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        service.confirm_appointment(&appointment.id).await.unwrap();
        let again = service.confirm_appointment(&appointment.id).await.unwrap();

        assert_eq!(again.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_cancel_after_confirm_ends_cancelled() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        service.confirm_appointment(&appointment.id).await.unwrap();
        let cancelled = service.cancel_appointment(&appointment.id).await.unwrap();

        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_confirm_after_cancel_ends_confirmed() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        service.cancel_appointment(&appointment.id).await.unwrap();
        let confirmed = service.confirm_appointment(&appointment.id).await.unwrap();

        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_confirm_missing_appointment_fails() {
        let service = service();

        let missing = AppointmentId::new("nonexistent".to_string());
        let result = service.confirm_appointment(&missing).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cancel_missing_appointment_fails() {
        let service = service();

        let missing = AppointmentId::new("nonexistent".to_string());
        let result = service.cancel_appointment(&missing).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_transitions_keep_identifier() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();

        let confirmed = service.confirm_appointment(&appointment.id).await.unwrap();
        let cancelled = service.cancel_appointment(&appointment.id).await.unwrap();

        assert_eq!(confirmed.id, appointment.id);
        assert_eq!(cancelled.id, appointment.id);
    }

    #[tokio::test]
    async fn test_list_appointments_scoped_to_professional() {
        let service = service();

        let a1 = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();
        let a2 = service
            .create_appointment(payload("Bob", "prof-1"))
            .await
            .unwrap();
        let a3 = service
            .create_appointment(payload("Carol", "prof-2"))
            .await
            .unwrap();

        let for_p1 = service
            .list_appointments_by_professional(&ProfessionalId::new("prof-1".to_string()))
            .await
            .unwrap();
        let for_p2 = service
            .list_appointments_by_professional(&ProfessionalId::new("prof-2".to_string()))
            .await
            .unwrap();
        let for_p3 = service
            .list_appointments_by_professional(&ProfessionalId::new("prof-3".to_string()))
            .await
            .unwrap();

        assert_eq!(
            for_p1.iter().map(|a| a.id.clone()).collect::<Vec<_>>(),
            vec![a1.id.clone(), a2.id.clone()]
        );
        assert_eq!(for_p2.len(), 1);
        assert_eq!(for_p2[0].id, a3.id);
        assert!(for_p3.is_empty());
    }

    #[tokio::test]
    async fn test_booking_flow_create_confirm_list() {
        let service = service();

        let appointment = service
            .create_appointment(payload("Alice", "prof-1"))
            .await
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pending);

        service.confirm_appointment(&appointment.id).await.unwrap();

        let listed = service
            .list_appointments_by_professional(&ProfessionalId::new("prof-1".to_string()))
            .await
            .unwrap();

        let found = listed.iter().find(|a| a.id == appointment.id).unwrap();
        assert_eq!(found.status, AppointmentStatus::Confirmed);
    }
}
