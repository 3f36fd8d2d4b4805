use tracing::debug;

use shared_models::{Appointment, AppointmentStatus, ScheduleStats};

use crate::models::{DaySchedule, TimeSlot};

/// Merge generated slot templates with a doctor's appointments for one date.
///
/// Output slot count always equals template count. Each appointment whose
/// normalized time matches a slot label attaches to exactly one slot (first
/// match wins on time equality). Appointments aligned with no slot go to the
/// `unscheduled` bucket so granularity mismatches stay visible rather than
/// silently vanishing. Stats are computed from the raw appointment list, not
/// from attached slots, so dashboard counts stay trustworthy either way.
pub fn aggregate(templates: &[String], appointments: Vec<Appointment>) -> DaySchedule {
    let stats = compute_stats(&appointments);

    let mut slots: Vec<TimeSlot> = templates
        .iter()
        .map(|time| TimeSlot {
            time: time.clone(),
            appointment: None,
        })
        .collect();

    let mut unscheduled = Vec::new();

    for appointment in appointments {
        let label = appointment.slot_label();
        match slots
            .iter_mut()
            .find(|slot| slot.time == label && slot.appointment.is_none())
        {
            Some(slot) => slot.appointment = Some(appointment),
            None => unscheduled.push(appointment),
        }
    }

    debug!(
        "Aggregated schedule: {} slots, {} unscheduled, {} total appointments",
        slots.len(),
        unscheduled.len(),
        stats.total
    );

    DaySchedule {
        slots,
        unscheduled,
        stats,
    }
}

/// Derive aggregate counts from the full appointment list. Recomputed every
/// time the list changes; never persisted independently.
pub fn compute_stats(appointments: &[Appointment]) -> ScheduleStats {
    let mut stats = ScheduleStats::default();

    for appointment in appointments {
        stats.total += 1;
        match appointment.status {
            AppointmentStatus::Scheduled => stats.pending += 1,
            AppointmentStatus::Confirmed
            | AppointmentStatus::CheckedIn
            | AppointmentStatus::InProgress => stats.confirmed += 1,
            AppointmentStatus::Completed => stats.completed += 1,
            AppointmentStatus::Cancelled => stats.cancelled += 1,
            AppointmentStatus::NoShow => stats.no_show += 1,
        }
    }

    stats
}
