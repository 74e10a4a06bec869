// libs/appointment-cell/src/services/booking.rs
use tracing::{info, warn};
use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Appointment, BookAppointmentRequest, AppointmentError};
use crate::services::repository::AppointmentRepository;

pub struct AppointmentBookingService {
    repository: AppointmentRepository,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        let supabase = Arc::new(SupabaseClient::new(config));
        Self {
            repository: AppointmentRepository::new(supabase),
        }
    }

    /// Book an appointment, refusing when the dentist already has one at the
    /// requested instant.
    ///
    /// The conflict check and the insert are two separate storage calls, not
    /// a transaction: two requests racing for the same slot can both pass
    /// the check. Sequential callers get the contract the API promises.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Booking appointment for dentist {:?} at {}",
              request.dentist_id, request.appointment_date);

        // An appointment without a dentist reference cannot collide with
        // anything; the check is keyed on dentist id equality.
        if let Some(dentist_id) = request.dentist_id {
            if self.repository.exists_conflict(dentist_id, request.appointment_date).await? {
                warn!("Booking conflict for dentist {} at {}",
                      dentist_id, request.appointment_date);
                return Err(AppointmentError::DentistNotAvailable);
            }
        }

        let appointment = self.repository.insert_appointment(&request).await?;

        info!("Appointment {} booked successfully", appointment.id);
        Ok(appointment)
    }

    /// List every stored appointment with its dentist and patient resolved.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        self.repository.list_appointments(true).await
    }
}
