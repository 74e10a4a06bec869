// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use dentist_cell::models::Dentist;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A patient record. Patients have no HTTP surface of their own; rows are
/// seeded independently and appear here embedded in appointment listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}

/// A stored appointment. The dentist and patient references are optional:
/// an appointment with no dentist is never considered a booking conflict.
/// The `dentist` and `patient` objects are populated only when a listing
/// asks the store to embed the related rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub appointment_date: DateTime<Utc>,
    pub dentist_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub dentist: Option<Dentist>,
    #[serde(default)]
    pub patient: Option<Patient>,
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub appointment_date: DateTime<Utc>,
    pub dentist_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub notes: Option<String>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Dentist is not available at this time.")]
    DentistNotAvailable,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_row_without_embedded_relations_parses() {
        // Shape PostgREST returns for a plain select or an insert
        // representation: relation keys absent entirely.
        let row = serde_json::json!({
            "id": 42,
            "appointment_date": "2026-03-02T10:00:00+00:00",
            "dentist_id": 1,
            "patient_id": null,
            "notes": "first visit"
        });

        let appointment: Appointment = serde_json::from_value(row).unwrap();
        assert_eq!(appointment.id, 42);
        assert_eq!(appointment.dentist_id, Some(1));
        assert_eq!(appointment.patient_id, None);
        assert!(appointment.dentist.is_none());
        assert!(appointment.patient.is_none());
    }

    #[test]
    fn conflict_message_is_the_api_contract_string() {
        assert_eq!(
            AppointmentError::DentistNotAvailable.to_string(),
            "Dentist is not available at this time."
        );
    }
}
