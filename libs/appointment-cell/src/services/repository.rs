// libs/appointment-cell/src/services/repository.rs
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use chrono::{DateTime, Utc};

use std::sync::Arc;
use shared_database::supabase::SupabaseClient;

use crate::models::{Appointment, BookAppointmentRequest, AppointmentError};

/// Storage access for appointment rows. Everything here is a single
/// PostgREST call; the booking rules live in the service above it.
pub struct AppointmentRepository {
    supabase: Arc<SupabaseClient>,
}

impl AppointmentRepository {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    /// Fetch all stored appointments in storage order. With
    /// `include_related` the dentist and patient rows are embedded in the
    /// same query instead of being resolved by follow-up lookups.
    pub async fn list_appointments(
        &self,
        include_related: bool,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let path = if include_related {
            "/rest/v1/appointments?select=*,dentist:dentists(*),patient:patients(*)"
        } else {
            "/rest/v1/appointments?select=*"
        };
        debug!("Fetching appointments (include_related: {})", include_related);

        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            path,
            None,
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        let appointments: Vec<Appointment> = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse appointments: {}", e)))?;

        Ok(appointments)
    }

    /// True iff a stored appointment has exactly this dentist id and exactly
    /// this timestamp. Equality only: a booking shifted by a minute is not a
    /// conflict.
    pub async fn exists_conflict(
        &self,
        dentist_id: i64,
        at: DateTime<Utc>,
    ) -> Result<bool, AppointmentError> {
        let date_str = at.to_rfc3339();
        let encoded_date = urlencoding::encode(&date_str);
        let path = format!(
            "/rest/v1/appointments?dentist_id=eq.{}&appointment_date=eq.{}&select=id&limit=1",
            dentist_id, encoded_date
        );
        debug!("Checking booking conflict for dentist {} at {}", dentist_id, date_str);

        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Ok(!result.is_empty())
    }

    /// Insert an appointment row and return the stored record with its
    /// assigned id.
    pub async fn insert_appointment(
        &self,
        request: &BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Inserting appointment for dentist {:?} at {}",
               request.dentist_id, request.appointment_date);

        let appointment_data = json!({
            "appointment_date": request.appointment_date.to_rfc3339(),
            "dentist_id": request.dentist_id,
            "patient_id": request.patient_id,
            "notes": request.notes,
        });

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Prefer", reqwest::header::HeaderValue::from_static("return=representation"));

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/appointments",
            Some(appointment_data),
            Some(headers),
        ).await.map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.is_empty() {
            return Err(AppointmentError::DatabaseError(
                "Insert returned no representation".to_string(),
            ));
        }

        let appointment: Appointment = serde_json::from_value(result[0].clone())
            .map_err(|e| AppointmentError::DatabaseError(format!("Failed to parse appointment: {}", e)))?;

        Ok(appointment)
    }
}
