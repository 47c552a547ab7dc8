//! Wire DTOs for the REST API
//!
//! The HTTP layer speaks camelCase JSON; these types translate between
//! that wire shape and the domain entities.

use chrono::{NaiveDate, NaiveTime};
use domain::booking::{Appointment, NewAppointment, NewProfessional, Professional};
use domain::shared_kernel::ProfessionalId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Professional ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<Professional> for ProfessionalDto {
    fn from(p: Professional) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            email: p.email,
            password: p.password,
        }
    }
}

impl From<ProfessionalDto> for Professional {
    fn from(dto: ProfessionalDto) -> Self {
        Self {
            id: ProfessionalId::new(dto.id),
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfessionalRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterProfessionalRequestDto> for NewProfessional {
    fn from(dto: RegisterProfessionalRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

// --- Appointment ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub professional: ProfessionalDto,
}

impl From<Appointment> for AppointmentDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id.0,
            client_name: a.client_name,
            date: a.date,
            time: a.time,
            status: a.status.to_string(),
            professional: a.professional.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequestDto {
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Accepted for wire compatibility; new appointments always start pending
    pub status: Option<String>,
    pub professional: ProfessionalDto,
}

impl From<CreateAppointmentRequestDto> for NewAppointment {
    fn from(dto: CreateAppointmentRequestDto) -> Self {
        Self {
            client_name: dto.client_name,
            date: dto.date,
            time: dto.time,
            status: dto.status.as_deref().and_then(|s| s.parse().ok()),
            professional: dto.professional.into(),
        }
    }
}
