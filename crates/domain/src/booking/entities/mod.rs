//! Booking Entities
//!
//! The Appointment entity is the aggregate root for booking management.
//! Professionals are plain records that appointments reference.

use crate::shared_kernel::{AppointmentId, AppointmentStatus, ProfessionalId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A service professional that clients book appointments with
///
/// The password is an opaque stored credential; nothing in this crate
/// reads or verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Appointment aggregate root
///
/// Represents a client booking against a professional. Dates and times
/// are plain calendar values with no time zone attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub professional: Professional,
}

impl Appointment {
    /// Creates a new appointment in Pending status
    pub fn new(
        id: AppointmentId,
        client_name: String,
        date: NaiveDate,
        time: NaiveTime,
        professional: Professional,
    ) -> Self {
        Self {
            id,
            client_name,
            date,
            time,
            status: AppointmentStatus::Pending,
            professional,
        }
    }

    /// Marks the appointment as confirmed
    ///
    /// Overwrites the previous status unconditionally; a cancelled
    /// appointment can be confirmed again.
    pub fn confirm(&mut self) {
        self.status = AppointmentStatus::Confirmed;
    }

    /// Marks the appointment as cancelled
    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
    }
}
