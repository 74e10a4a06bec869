use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::CreateDentistRequest;
use crate::services::DentistService;

#[axum::debug_handler]
pub async fn list_dentists(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let service = DentistService::new(&config);

    let dentists = service.list_dentists()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(dentists)))
}

#[axum::debug_handler]
pub async fn create_dentist(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<CreateDentistRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = DentistService::new(&config);

    let dentist = service.create_dentist(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(json!(dentist))))
}
