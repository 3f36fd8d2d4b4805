use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn schedule_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}/schedule", get(handlers::get_doctor_schedule))
        .route("/doctors/{doctor_id}/export", get(handlers::export_doctor_schedule))
        .with_state(state)
}
