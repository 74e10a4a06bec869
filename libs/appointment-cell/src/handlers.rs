// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, AppointmentError};
use crate::services::booking::AppointmentBookingService;

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let appointments = booking_service.list_appointments()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let appointment = booking_service.book_appointment(request)
        .await
        .map_err(|e| match e {
            AppointmentError::DentistNotAvailable => AppError::BadRequest(e.to_string()),
            AppointmentError::DatabaseError(msg) => AppError::Database(msg),
        })?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}
