use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{
    Appointment, AppointmentStatus, AppError, DoctorProfile, FilterCriteria, ScheduleStats,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub is_available: bool,
}

/// Raw schedule payload for one (doctor, date) pair. The doctor profile and
/// stats are optional on the wire; callers substitute documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub doctor: Option<DoctorProfile>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    pub stats: Option<ScheduleStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentPage {
    pub items: Vec<Appointment>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleExport {
    pub doctor_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub stats: ScheduleStats,
}

/// The one canonical contract to the clinic backend. Everything this core
/// fetches or mutates goes through here; there are no alternate endpoints.
#[async_trait]
pub trait ClinicApi: Send + Sync {
    async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, AppError>;

    async fn get_schedule(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
    ) -> Result<SchedulePayload, AppError>;

    async fn get_appointment(&self, appointment_id: Uuid) -> Result<Appointment, AppError>;

    async fn update_appointment_status(
        &self,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError>;

    async fn list_appointments(
        &self,
        criteria: FilterCriteria,
    ) -> Result<AppointmentPage, AppError>;

    async fn export_schedule(
        &self,
        doctor_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ScheduleExport, AppError>;
}

pub struct ClinicApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.clinic_api_url.clone(),
            api_key: config.clinic_api_key.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("x-api-key", value);
        }
        headers
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.get_headers())
            .timeout(self.timeout);

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| AppError::Network(format!("clinic API unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Clinic API error ({}): {}", status, error_text);

            return Err(match status {
                StatusCode::NOT_FOUND => AppError::NotFound(error_text),
                StatusCode::BAD_REQUEST => AppError::Validation(error_text),
                _ => AppError::Network(format!("clinic API error ({}): {}", status, error_text)),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Network(format!("malformed clinic API response: {}", e)))
    }
}

#[async_trait]
impl ClinicApi for ClinicApiClient {
    async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, AppError> {
        self.request(Method::GET, "/v1/doctors", &[], None).await
    }

    async fn get_schedule(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
    ) -> Result<SchedulePayload, AppError> {
        let path = format!("/v1/doctors/{}/schedule", doctor_id);
        let query = vec![("date".to_string(), date.to_string())];
        self.request(Method::GET, &path, &query, None).await
    }

    async fn get_appointment(&self, appointment_id: Uuid) -> Result<Appointment, AppError> {
        let path = format!("/v1/appointments/{}", appointment_id);
        self.request(Method::GET, &path, &[], None).await
    }

    async fn update_appointment_status(
        &self,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let path = format!("/v1/appointments/{}/status", appointment_id);
        let body = json!({ "status": new_status });
        self.request(Method::PATCH, &path, &[], Some(body)).await
    }

    async fn list_appointments(
        &self,
        criteria: FilterCriteria,
    ) -> Result<AppointmentPage, AppError> {
        let mut query = Vec::new();
        if let Some(status) = &criteria.status {
            query.push(("status".to_string(), status.to_string()));
        }
        if let Some(date) = criteria.date {
            query.push(("date".to_string(), date.to_string()));
        }
        if let Some(from) = criteria.date_from {
            query.push(("date_from".to_string(), from.to_string()));
        }
        if let Some(to) = criteria.date_to {
            query.push(("date_to".to_string(), to.to_string()));
        }
        if let Some(doctor_id) = criteria.doctor_id {
            query.push(("doctor_id".to_string(), doctor_id.to_string()));
        }
        if let Some(patient_id) = criteria.patient_id {
            query.push(("patient_id".to_string(), patient_id.to_string()));
        }
        if let Some(page) = criteria.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = criteria.page_size {
            query.push(("page_size".to_string(), page_size.to_string()));
        }

        self.request(Method::GET, "/v1/appointments", &query, None)
            .await
    }

    async fn export_schedule(
        &self,
        doctor_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ScheduleExport, AppError> {
        let path = format!("/v1/doctors/{}/export", doctor_id);
        let query = vec![
            ("start_date".to_string(), start_date.to_string()),
            ("end_date".to_string(), end_date.to_string()),
        ];
        self.request(Method::GET, &path, &query, None).await
    }
}
