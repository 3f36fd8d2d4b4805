use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::AppError;

use crate::services::view::ScheduleService;

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);
    let doctors = service.list_doctors().await?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_schedule(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);
    let view = service.get_view(doctor_id, query.date).await?;

    Ok(Json(json!(view)))
}

#[axum::debug_handler]
pub async fn export_doctor_schedule(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);
    let export = service
        .export(doctor_id, query.start_date, query.end_date)
        .await?;

    Ok(Json(json!(export)))
}
