//! Appointment REST API Module
//!
//! Provides REST endpoints for booking appointments and driving their
//! lifecycle (pending, confirmed, cancelled).

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use application::AppointmentService;
use domain::shared_kernel::{AppointmentId, DomainError, ProfessionalId};

use crate::dtos::*;

// ===== Application State =====

/// Application state for the Appointment API
#[derive(Clone)]
pub struct AppointmentApiAppState {
    pub appointment_service: Arc<AppointmentService>,
}

impl AppointmentApiAppState {
    pub fn new(appointment_service: Arc<AppointmentService>) -> Self {
        Self {
            appointment_service,
        }
    }
}

// ===== API Handlers =====

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentRequestDto,
    responses(
        (status = 200, description = "Appointment created successfully", body = AppointmentDto),
        (status = 500, description = "Internal server error")
    ),
    tag = "appointments"
)]
pub async fn create_appointment_handler(
    State(state): State<AppointmentApiAppState>,
    Json(request): Json<CreateAppointmentRequestDto>,
) -> Result<Json<AppointmentDto>, StatusCode> {
    info!("Creating appointment for client: {}", request.client_name);

    match state
        .appointment_service
        .create_appointment(request.into())
        .await
    {
        Ok(appointment) => {
            info!("Appointment created successfully: {}", appointment.id);
            Ok(Json(appointment.into()))
        }
        Err(e) => {
            error!("Failed to create appointment: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/appointments/professional/{professional_id}",
    params(
        ("professional_id" = String, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Appointments for the professional", body = Vec<AppointmentDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "appointments"
)]
pub async fn list_appointments_by_professional_handler(
    State(state): State<AppointmentApiAppState>,
    Path(professional_id): Path<ProfessionalId>,
) -> Result<Json<Vec<AppointmentDto>>, StatusCode> {
    info!("Listing appointments for professional: {}", professional_id);

    match state
        .appointment_service
        .list_appointments_by_professional(&professional_id)
        .await
    {
        Ok(appointments) => {
            info!("Retrieved {} appointments", appointments.len());
            Ok(Json(appointments.into_iter().map(Into::into).collect()))
        }
        Err(e) => {
            error!("Failed to list appointments: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(
        ("id" = String, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentDto),
        (status = 404, description = "Appointment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "appointments"
)]
pub async fn get_appointment_handler(
    State(state): State<AppointmentApiAppState>,
    Path(id): Path<AppointmentId>,
) -> Result<Json<AppointmentDto>, StatusCode> {
    info!("Getting appointment: {}", id);

    match state.appointment_service.get_appointment(&id).await {
        Ok(appointment) => {
            info!("Appointment found: {}", id);
            Ok(Json(appointment.into()))
        }
        Err(DomainError::NotFound(_)) => {
            warn!("Appointment not found: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to get appointment: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}/confirm",
    params(
        ("id" = String, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment confirmed", body = AppointmentDto),
        (status = 404, description = "Appointment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "appointments"
)]
pub async fn confirm_appointment_handler(
    State(state): State<AppointmentApiAppState>,
    Path(id): Path<AppointmentId>,
) -> Result<Json<AppointmentDto>, StatusCode> {
    info!("Confirming appointment: {}", id);

    match state.appointment_service.confirm_appointment(&id).await {
        Ok(appointment) => {
            info!("Appointment confirmed: {}", id);
            Ok(Json(appointment.into()))
        }
        Err(DomainError::NotFound(_)) => {
            warn!("Appointment not found: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to confirm appointment: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}/cancel",
    params(
        ("id" = String, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment cancelled", body = AppointmentDto),
        (status = 404, description = "Appointment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "appointments"
)]
pub async fn cancel_appointment_handler(
    State(state): State<AppointmentApiAppState>,
    Path(id): Path<AppointmentId>,
) -> Result<Json<AppointmentDto>, StatusCode> {
    info!("Cancelling appointment: {}", id);

    match state.appointment_service.cancel_appointment(&id).await {
        Ok(appointment) => {
            info!("Appointment cancelled: {}", id);
            Ok(Json(appointment.into()))
        }
        Err(DomainError::NotFound(_)) => {
            warn!("Appointment not found: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to cancel appointment: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ===== Router =====

pub fn appointment_api_routes(state: AppointmentApiAppState) -> Router {
    Router::new()
        .route("/", post(create_appointment_handler))
        .route(
            "/professional/{professional_id}",
            get(list_appointments_by_professional_handler),
        )
        .route("/{id}", get(get_appointment_handler))
        .route("/{id}/confirm", put(confirm_appointment_handler))
        .route("/{id}/cancel", put(cancel_appointment_handler))
        .with_state(state)
}
