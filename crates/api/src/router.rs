//! Centralized API Router
//!
//! This module provides a single point of entry for all API routes.
//! Used by both the main server and integration tests.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs::ApiDoc;
use crate::appointment_api::{AppointmentApiAppState, appointment_api_routes};
use crate::middleware::{add_request_id, cors_layer};
use crate::professional_api::{ProfessionalApiAppState, professional_api_routes};

/// Liveness probe endpoint
pub async fn health_check_handler() -> &'static str {
    "ok"
}

/// Create centralized API router
pub fn create_api_router(
    appointment_state: AppointmentApiAppState,
    professional_state: ProfessionalApiAppState,
) -> Router {
    info!("🔧 Setting up API routes...");

    let router = Router::new()
        .route("/health", get(health_check_handler))
        .nest(
            "/api/appointments",
            appointment_api_routes(appointment_state),
        )
        .nest(
            "/api/professionals",
            professional_api_routes(professional_state),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api/docs/spec.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(add_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    info!("✅ Appointment API routes initialized");
    info!("✅ Professional API routes initialized");

    router
}
