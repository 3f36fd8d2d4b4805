use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_gateway::{ClinicApi, ClinicApiClient};
use shared_models::{AppError, Appointment, AppointmentStatus};

/// Validates and applies status changes against the canonical forward
/// progression: scheduled -> confirmed -> checked-in -> in-progress ->
/// completed. Cancelled and no-show are terminal and reachable from any
/// non-terminal state; completed accepts nothing further.
///
/// The transition graph is enforced here deliberately. The system this was
/// rebuilt from accepted arbitrary status writes through a flat selector;
/// that laxity is a defect, not a design, so out-of-order and post-terminal
/// changes are rejected with InvalidTransition.
pub struct LifecycleService {
    api: Arc<dyn ClinicApi>,
}

impl LifecycleService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_api(Arc::new(ClinicApiClient::new(config)))
    }

    pub fn with_api(api: Arc<dyn ClinicApi>) -> Self {
        Self { api }
    }

    /// All valid next statuses for a given current status.
    pub fn valid_transitions(current: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Scheduled => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::CheckedIn,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::CheckedIn => vec![
                AppointmentStatus::InProgress,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::InProgress => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            // Terminal states - no transitions allowed
            AppointmentStatus::Completed => vec![],
            AppointmentStatus::Cancelled => vec![],
            AppointmentStatus::NoShow => vec![],
        }
    }

    /// Validate that a status transition is allowed.
    pub fn validate_transition(
        current: &AppointmentStatus,
        new_status: &AppointmentStatus,
    ) -> Result<(), AppError> {
        debug!(
            "Validating status transition from {} to {}",
            current, new_status
        );

        if !Self::valid_transitions(current).contains(new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current, new_status
            );
            return Err(AppError::InvalidTransition(
                current.clone(),
                new_status.clone(),
            ));
        }

        Ok(())
    }

    /// Apply a validated transition through the persistence collaborator.
    ///
    /// The in-memory appointment is mutated only after the collaborator has
    /// confirmed the update; on any failure it is left untouched and the
    /// error surfaces to the caller. No optimistic update.
    pub async fn transition(
        &self,
        appointment: &mut Appointment,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        Self::validate_transition(&appointment.status, &new_status)?;

        let updated = self
            .api
            .update_appointment_status(appointment.id, new_status.clone())
            .await?;

        info!(
            "Appointment {} transitioned {} -> {}",
            appointment.id, appointment.status, new_status
        );
        *appointment = updated.clone();

        Ok(updated)
    }
}
