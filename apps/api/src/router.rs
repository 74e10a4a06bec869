use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use dentist_cell::router::dentist_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Dental Clinic API is running!" }))
        .nest("/api/dentists", dentist_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state.clone()))
}
