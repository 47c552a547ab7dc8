//! Value Objects for Booking
//!
//! Immutable payload objects used when creating entities

use super::entities::Professional;
use crate::shared_kernel::AppointmentStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Creation payload for an appointment
///
/// Carries everything a caller may submit. The status field is accepted
/// for wire compatibility but creation always discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: Option<AppointmentStatus>,
    pub professional: Professional,
}

impl NewAppointment {
    /// Creates a new appointment payload with no requested status
    pub fn new(
        client_name: String,
        date: NaiveDate,
        time: NaiveTime,
        professional: Professional,
    ) -> Self {
        Self {
            client_name,
            date,
            time,
            status: None,
            professional,
        }
    }
}

/// Creation payload for a professional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfessional {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewProfessional {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}
