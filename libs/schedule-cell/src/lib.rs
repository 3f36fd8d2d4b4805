pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{DaySchedule, ScheduleView, TimeSlot};
pub use services::aggregate::{aggregate, compute_stats};
pub use services::slots::{default_slots, generate_slots, DEFAULT_SLOT_MINUTES};
pub use services::view::ScheduleService;
