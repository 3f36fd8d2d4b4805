use serde::{Deserialize, Serialize};

use shared_models::{Appointment, AppointmentStatus};

/// A filtered, paginated slice of an appointment list. `total` counts every
/// appointment that matched the predicates, not just the returned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredPage {
    pub items: Vec<Appointment>,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}
