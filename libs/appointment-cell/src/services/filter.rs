use tracing::debug;

use shared_models::{Appointment, FilterCriteria};

use crate::models::FilteredPage;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Filter an appointment list against the criteria, then paginate.
///
/// Equivalent to `apply_predicates` followed by `paginate`; the predicate
/// stage is idempotent, so reapplying the same criteria to an
/// already-filtered list is a no-op.
pub fn apply(appointments: &[Appointment], criteria: &FilterCriteria) -> FilteredPage {
    let matched = apply_predicates(appointments, criteria);
    paginate(matched, criteria.page, criteria.page_size)
}

/// Apply each predicate independently; an absent criterion is a no-op.
pub fn apply_predicates(
    appointments: &[Appointment],
    criteria: &FilterCriteria,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| matches_criteria(appointment, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(appointment: &Appointment, criteria: &FilterCriteria) -> bool {
    if let Some(status) = &criteria.status {
        if appointment.status != *status {
            return false;
        }
    }

    if let Some(date) = criteria.date {
        if appointment.date != date {
            return false;
        }
    }

    if let Some(from) = criteria.date_from {
        if appointment.date < from {
            return false;
        }
    }

    if let Some(to) = criteria.date_to {
        if appointment.date > to {
            return false;
        }
    }

    if let Some(doctor_id) = criteria.doctor_id {
        // Resolved through DoctorRef whether the store sent an id or a
        // populated profile.
        if appointment.doctor.id() != doctor_id {
            return false;
        }
    }

    if let Some(patient_id) = criteria.patient_id {
        if appointment.patient.id != patient_id {
            return false;
        }
    }

    if let Some(query) = &criteria.query {
        let query = query.trim().to_lowercase();
        if !query.is_empty() && !matches_free_text(appointment, &query) {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match across patient name, doctor name,
/// purpose, type and appointment id.
fn matches_free_text(appointment: &Appointment, query: &str) -> bool {
    appointment.patient.full_name().to_lowercase().contains(query)
        || appointment
            .doctor
            .display_name()
            .map(|name| name.to_lowercase().contains(query))
            .unwrap_or(false)
        || appointment.purpose.to_lowercase().contains(query)
        || appointment
            .appointment_type
            .to_string()
            .to_lowercase()
            .contains(query)
        || appointment.id.to_string().to_lowercase().contains(query)
}

/// Slice the matched list to the requested page.
///
/// `page` is clamped to at least 1 and a missing or non-positive `page_size`
/// falls back to the default. A page past the end yields an empty slice,
/// never an error.
pub fn paginate(matched: Vec<Appointment>, page: Option<i64>, page_size: Option<i64>) -> FilteredPage {
    let page = page.unwrap_or(1).max(1);
    let page_size = match page_size {
        Some(size) if size > 0 => size,
        _ => DEFAULT_PAGE_SIZE,
    };

    let total = matched.len() as i64;
    let total_pages = if total == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    };

    let start = ((page - 1) * page_size) as usize;
    let items = if start >= matched.len() {
        Vec::new()
    } else {
        let end = (start + page_size as usize).min(matched.len());
        matched[start..end].to_vec()
    };

    debug!(
        "Filtered page {}/{}: {} of {} appointments",
        page,
        total_pages,
        items.len(),
        total
    );

    FilteredPage {
        items,
        total,
        total_pages,
        current_page: page,
        page_size,
    }
}
