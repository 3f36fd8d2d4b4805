use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use schedule_cell::router::schedule_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/schedule", schedule_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
}
