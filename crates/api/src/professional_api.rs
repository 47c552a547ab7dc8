//! Professional REST API Module
//!
//! Provides REST endpoints for registering professionals and looking
//! them up by id or email.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use application::ProfessionalService;
use domain::shared_kernel::{DomainError, ProfessionalId};

use crate::dtos::*;

// ===== Application State =====

/// Application state for the Professional API
#[derive(Clone)]
pub struct ProfessionalApiAppState {
    pub professional_service: Arc<ProfessionalService>,
}

impl ProfessionalApiAppState {
    pub fn new(professional_service: Arc<ProfessionalService>) -> Self {
        Self {
            professional_service,
        }
    }
}

// ===== API Handlers =====

#[utoipa::path(
    post,
    path = "/api/professionals",
    request_body = RegisterProfessionalRequestDto,
    responses(
        (status = 200, description = "Professional registered successfully", body = ProfessionalDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "professionals"
)]
pub async fn register_professional_handler(
    State(state): State<ProfessionalApiAppState>,
    Json(request): Json<RegisterProfessionalRequestDto>,
) -> Result<Json<ProfessionalDto>, StatusCode> {
    info!("Registering professional: {}", request.email);

    match state
        .professional_service
        .register_professional(request.into())
        .await
    {
        Ok(professional) => {
            info!("Professional registered successfully: {}", professional.id);
            Ok(Json(professional.into()))
        }
        Err(e) => {
            error!("Failed to register professional: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/professionals/{id}",
    params(
        ("id" = String, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Professional details", body = ProfessionalDto),
        (status = 404, description = "Professional not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "professionals"
)]
pub async fn get_professional_handler(
    State(state): State<ProfessionalApiAppState>,
    Path(id): Path<ProfessionalId>,
) -> Result<Json<ProfessionalDto>, StatusCode> {
    info!("Getting professional: {}", id);

    match state.professional_service.get_professional(&id).await {
        Ok(professional) => {
            info!("Professional found: {}", id);
            Ok(Json(professional.into()))
        }
        Err(DomainError::NotFound(_)) => {
            warn!("Professional not found: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to get professional: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/professionals/email/{email}",
    params(
        ("email" = String, Path, description = "Professional email")
    ),
    responses(
        (status = 200, description = "Professional details", body = ProfessionalDto),
        (status = 404, description = "Professional not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "professionals"
)]
pub async fn find_professional_by_email_handler(
    State(state): State<ProfessionalApiAppState>,
    Path(email): Path<String>,
) -> Result<Json<ProfessionalDto>, StatusCode> {
    info!("Looking up professional by email: {}", email);

    match state.professional_service.find_by_email(&email).await {
        Ok(professional) => {
            info!("Professional found for email: {}", email);
            Ok(Json(professional.into()))
        }
        Err(DomainError::NotFound(_)) => {
            warn!("No professional registered with email: {}", email);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to look up professional by email: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ===== Router =====

pub fn professional_api_routes(state: ProfessionalApiAppState) -> Router {
    Router::new()
        .route("/", post(register_professional_handler))
        .route("/{id}", get(get_professional_handler))
        .route("/email/{email}", get(find_professional_by_email_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::booking::{Professional, ProfessionalRepository};
    use domain::shared_kernel::DomainResult;
    use pretty_assertions::assert_eq;
    use tokio::sync::Mutex;

    struct MockProfessionalRepository {
        professionals: Arc<Mutex<Vec<Professional>>>,
    }

    impl MockProfessionalRepository {
        fn new() -> Self {
            Self {
                professionals: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl ProfessionalRepository for MockProfessionalRepository {
        async fn save(&self, professional: &Professional) -> DomainResult<()> {
            let mut professionals = self.professionals.lock().await;
            match professionals.iter().position(|p| p.id == professional.id) {
                Some(index) => professionals[index] = professional.clone(),
                None => professionals.push(professional.clone()),
            }
            Ok(())
        }

        async fn find_by_id(&self, id: &ProfessionalId) -> DomainResult<Option<Professional>> {
            let professionals = self.professionals.lock().await;
            Ok(professionals.iter().find(|p| &p.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<Professional>> {
            let professionals = self.professionals.lock().await;
            Ok(professionals.iter().find(|p| p.email == email).cloned())
        }
    }

    fn test_state() -> ProfessionalApiAppState {
        let service = ProfessionalService::new(Box::new(MockProfessionalRepository::new()));
        ProfessionalApiAppState::new(Arc::new(service))
    }

    fn register_request() -> RegisterProfessionalRequestDto {
        RegisterProfessionalRequestDto {
            name: "Laura Gómez".to_string(),
            email: "laura@clinic.example".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_professional_handler_assigns_id() {
        let state = test_state();

        let response = register_professional_handler(State(state), Json(register_request()))
            .await
            .unwrap();

        assert!(!response.0.id.is_empty());
        assert_eq!(response.0.email, "laura@clinic.example");
        // The wire shape deliberately carries the stored password
        assert_eq!(response.0.password, "s3cret");
    }

    #[tokio::test]
    async fn test_get_professional_handler_finds_registered() {
        let state = test_state();

        let registered =
            register_professional_handler(State(state.clone()), Json(register_request()))
                .await
                .unwrap();

        let fetched = get_professional_handler(
            State(state),
            Path(ProfessionalId::new(registered.0.id.clone())),
        )
        .await
        .unwrap();

        assert_eq!(fetched.0.id, registered.0.id);
        assert_eq!(fetched.0.name, "Laura Gómez");
    }

    #[tokio::test]
    async fn test_get_professional_handler_returns_404_for_unknown_id() {
        let state = test_state();

        let result = get_professional_handler(
            State(state),
            Path(ProfessionalId::new("no-such-id".to_string())),
        )
        .await;

        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_find_by_email_handler() {
        let state = test_state();

        register_professional_handler(State(state.clone()), Json(register_request()))
            .await
            .unwrap();

        let found = find_professional_by_email_handler(
            State(state.clone()),
            Path("laura@clinic.example".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(found.0.name, "Laura Gómez");

        let missing = find_professional_by_email_handler(
            State(state),
            Path("nobody@clinic.example".to_string()),
        )
        .await;
        assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
    }
}
