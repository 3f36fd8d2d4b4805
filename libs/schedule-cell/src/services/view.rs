use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_gateway::{ClinicApi, ClinicApiClient, DoctorSummary, ScheduleExport};
use shared_models::{AppError, DoctorProfile};

use crate::models::ScheduleView;
use crate::services::aggregate::aggregate;
use crate::services::slots::{default_slots, generate_slots, DEFAULT_SLOT_MINUTES};

/// Orchestrates generator + aggregator + doctor defaults into one view per
/// (doctor, date) pair.
///
/// Rapid doctor/date switching can leave older fetches in flight; the
/// sequence counter makes the last request win. A response that comes back
/// after a newer fetch has started is discarded with `StaleResponse` so stale
/// data can never overwrite a newer view.
pub struct ScheduleService {
    api: Arc<dyn ClinicApi>,
    fetch_seq: AtomicU64,
}

impl ScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_api(Arc::new(ClinicApiClient::new(config)))
    }

    pub fn with_api(api: Arc<dyn ClinicApi>) -> Self {
        Self {
            api,
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, AppError> {
        self.api.list_doctors().await
    }

    pub async fn get_view(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
    ) -> Result<ScheduleView, AppError> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fetching schedule for doctor {} on {}", doctor_id, date);

        let payload = self.api.get_schedule(doctor_id, date).await;

        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            warn!(
                "Discarding stale schedule response for doctor {} on {}",
                doctor_id, date
            );
            return Err(AppError::StaleResponse);
        }

        match payload {
            Ok(payload) => {
                let doctor = payload.doctor.unwrap_or_else(|| {
                    warn!("Doctor profile missing for {}, using defaults", doctor_id);
                    DoctorProfile::default()
                });

                let templates = generate_slots(
                    doctor.working_hours.start,
                    doctor.working_hours.end,
                    DEFAULT_SLOT_MINUTES,
                )
                .unwrap_or_else(|e| {
                    warn!("Invalid working hours for doctor {}: {}", doctor_id, e);
                    default_slots()
                });

                let day = aggregate(&templates, payload.appointments);

                Ok(ScheduleView {
                    time_slots: day.slots,
                    unscheduled: day.unscheduled,
                    stats: day.stats,
                    doctor,
                    error: None,
                })
            }
            Err(e @ (AppError::Network(_) | AppError::NotFound(_))) => {
                // Never leave the caller without a usable schedule: default
                // slots, zeroed stats, and the failure surfaced as a flag.
                warn!(
                    "Schedule fetch failed for doctor {} on {}: {}",
                    doctor_id, date, e
                );
                let day = aggregate(&default_slots(), Vec::new());
                Ok(ScheduleView {
                    time_slots: day.slots,
                    unscheduled: day.unscheduled,
                    stats: day.stats,
                    doctor: DoctorProfile::default(),
                    error: Some(e.to_string()),
                })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn export(
        &self,
        doctor_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ScheduleExport, AppError> {
        if end_date < start_date {
            return Err(AppError::Validation(
                "export end date must not be before start date".to_string(),
            ));
        }
        self.api.export_schedule(doctor_id, start_date, end_date).await
    }
}
