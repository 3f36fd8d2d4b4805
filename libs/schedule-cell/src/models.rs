use serde::{Deserialize, Serialize};

use shared_models::{Appointment, DoctorProfile, ScheduleStats};

/// A fixed time-of-day bucket within a doctor's working hours, carrying at
/// most one appointment. The slot set for a schedule is exactly what the
/// generator produced; aggregation never adds or drops slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub appointment: Option<Appointment>,
}

impl TimeSlot {
    pub fn is_available(&self) -> bool {
        self.appointment.is_none()
    }
}

/// Merged slots + appointments for one doctor on one date.
///
/// Appointments whose time lines up with no generated slot land in
/// `unscheduled` rather than disappearing; stats always cover the full list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub slots: Vec<TimeSlot>,
    pub unscheduled: Vec<Appointment>,
    pub stats: ScheduleStats,
}

/// What the UI collaborator receives for a (doctor, date) pair. `error` is
/// set when the view fell back to defaults after a failed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub time_slots: Vec<TimeSlot>,
    pub unscheduled: Vec<Appointment>,
    pub stats: ScheduleStats,
    pub doctor: DoctorProfile,
    pub error: Option<String>,
}
