use chrono::{NaiveTime, Timelike};
use tracing::debug;

use shared_models::{AppError, WorkingHours};

pub const DEFAULT_SLOT_MINUTES: i32 = 30;

/// Generate the canonical ordered slot labels for a working-hours window.
///
/// Slots start at `start`, are spaced `duration_minutes` apart and stop
/// before `end` (half-open interval). Labels are zero-padded "HH:MM".
pub fn generate_slots(
    start: NaiveTime,
    end: NaiveTime,
    duration_minutes: i32,
) -> Result<Vec<String>, AppError> {
    if end <= start {
        return Err(AppError::Validation(
            "slot window end must be after start".to_string(),
        ));
    }
    if duration_minutes <= 0 {
        return Err(AppError::Validation(
            "slot duration must be positive".to_string(),
        ));
    }

    // Minutes-since-midnight arithmetic; NaiveTime addition wraps at midnight.
    let start_minutes = (start.hour() * 60 + start.minute()) as i32;
    let end_minutes = (end.hour() * 60 + end.minute()) as i32;

    let mut slots = Vec::new();
    let mut current = start_minutes;
    while current < end_minutes {
        slots.push(format!("{:02}:{:02}", current / 60, current % 60));
        current += duration_minutes;
    }

    debug!(
        "Generated {} slots for {} - {} at {} minute cadence",
        slots.len(),
        start,
        end,
        duration_minutes
    );
    Ok(slots)
}

/// Fallback slot set: 09:00-17:00 at the default 30-minute cadence.
pub fn default_slots() -> Vec<String> {
    let hours = WorkingHours::default();
    // Defaults are valid by construction
    generate_slots(hours.start, hours.end, DEFAULT_SLOT_MINUTES).unwrap_or_default()
}
