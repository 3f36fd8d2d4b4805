use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_gateway::{ClinicApi, ClinicApiClient};
use shared_models::{AppError, FilterCriteria};

use crate::models::UpdateStatusRequest;
use crate::services::{filter, lifecycle::LifecycleService};

/// Upper bound on one coarse fetch from the collaborator before client-side
/// filtering takes over. Lists past this size are truncated and the totals
/// cover only the fetched window; the handler logs when that happens.
const MAX_FETCH_PAGE_SIZE: i64 = 500;

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<Value>, AppError> {
    let api = ClinicApiClient::new(&state);

    // The collaborator handles the structured predicates; free-text search
    // and final pagination are applied to the fetched list so the filter
    // contract holds regardless of what the backend supports.
    let mut fetch_criteria = criteria.clone();
    fetch_criteria.query = None;
    fetch_criteria.page = Some(1);
    fetch_criteria.page_size = Some(MAX_FETCH_PAGE_SIZE);

    let page = api.list_appointments(fetch_criteria).await?;
    if page.pagination.total > page.items.len() as i64 {
        warn!(
            "Collaborator reports {} matching appointments but only {} were fetched; \
             totals are computed from the fetched window",
            page.pagination.total,
            page.items.len()
        );
    }
    let filtered = filter::apply(&page.items, &criteria);

    Ok(Json(json!(filtered)))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let api: Arc<dyn ClinicApi> = Arc::new(ClinicApiClient::new(&state));

    let mut appointment = api.get_appointment(appointment_id).await?;

    let service = LifecycleService::with_api(api);
    let updated = service.transition(&mut appointment, request.status).await?;

    Ok(Json(json!(updated)))
}

#[axum::debug_handler]
pub async fn get_valid_transitions(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let api = ClinicApiClient::new(&state);
    let appointment = api.get_appointment(appointment_id).await?;

    Ok(Json(json!({
        "current_status": appointment.status,
        "valid_transitions": LifecycleService::valid_transitions(&appointment.status)
    })))
}
