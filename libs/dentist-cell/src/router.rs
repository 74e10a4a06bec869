use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn dentist_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_dentists))
        .route("/", post(handlers::create_dentist))
        .with_state(state)
}
