use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::doctor::DoctorRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient: PatientSummary,
    pub doctor: DoctorRef,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i32,
    pub appointment_type: AppointmentType,
    pub purpose: String,
    pub priority: Priority,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Time-of-day label used to line the appointment up with a schedule slot.
    pub fn slot_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl PatientSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Terminal statuses accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::CheckedIn => write!(f, "checked-in"),
            AppointmentStatus::InProgress => write!(f, "in-progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no-show"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    Therapy,
    Emergency,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Consultation => write!(f, "consultation"),
            AppointmentType::FollowUp => write!(f, "follow-up"),
            AppointmentType::Therapy => write!(f, "therapy"),
            AppointmentType::Emergency => write!(f, "emergency"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}

/// Aggregate counts by status for a schedule or list. Always derived from the
/// full appointment list, never persisted on its own.
///
/// Bucketing: `pending` counts scheduled appointments; `confirmed` covers
/// confirmed, checked-in and in-progress, so the counts always satisfy
/// `total == pending + confirmed + completed + cancelled + no_show`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub no_show: i64,
}

/// Predicate set for narrowing an appointment list before pagination.
/// Every field is optional; an absent field is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: Option<AppointmentStatus>,
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub doctor_id: Option<Uuid>,
    pub patient_id: Option<Uuid>,
    pub query: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
