use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/{appointment_id}/status", patch(handlers::update_appointment_status))
        .route("/{appointment_id}/transitions", get(handlers::get_valid_transitions))
        .with_state(state)
}
