//! API Documentation using OpenAPI 3.0 with utoipa
//!
//! Access the interactive Swagger UI at: http://localhost:8080/swagger-ui/

use utoipa::OpenApi;

use crate::dtos::{
    AppointmentDto, CreateAppointmentRequestDto, ProfessionalDto, RegisterProfessionalRequestDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::appointment_api::create_appointment_handler,
        crate::appointment_api::list_appointments_by_professional_handler,
        crate::appointment_api::get_appointment_handler,
        crate::appointment_api::confirm_appointment_handler,
        crate::appointment_api::cancel_appointment_handler,
        crate::professional_api::register_professional_handler,
        crate::professional_api::get_professional_handler,
        crate::professional_api::find_professional_by_email_handler,
    ),
    components(
        schemas(
            AppointmentDto,
            CreateAppointmentRequestDto,
            ProfessionalDto,
            RegisterProfessionalRequestDto,
        )
    ),
    tags(
        (name = "appointments", description = "Appointment booking and lifecycle endpoints"),
        (name = "professionals", description = "Professional registration and lookup endpoints")
    )
)]
pub struct ApiDoc;
