//! Application Service for Professional Records
//!
//! Registration and lookup only. Credentials are stored as given and
//! never verified here.

use domain::booking::{NewProfessional, Professional, ProfessionalRepository};
use domain::shared_kernel::{DomainError, DomainResult, ProfessionalId};

pub struct ProfessionalService {
    professional_repo: Box<dyn ProfessionalRepository>,
}

impl ProfessionalService {
    pub fn new(professional_repo: Box<dyn ProfessionalRepository>) -> Self {
        Self { professional_repo }
    }

    pub async fn register_professional(
        &self,
        new_professional: NewProfessional,
    ) -> DomainResult<Professional> {
        let professional = Professional {
            id: ProfessionalId::new(uuid::Uuid::new_v4().to_string()),
            name: new_professional.name,
            email: new_professional.email,
            password: new_professional.password,
        };
        self.professional_repo.save(&professional).await?;
        Ok(professional)
    }

    pub async fn get_professional(&self, id: &ProfessionalId) -> DomainResult<Professional> {
        self.professional_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Professional not found".to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Professional> {
        self.professional_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound("Professional not found".to_string()))
    }
}
