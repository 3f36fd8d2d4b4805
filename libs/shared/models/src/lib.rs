pub mod appointment;
pub mod doctor;
pub mod error;

pub use appointment::{
    Appointment, AppointmentStatus, AppointmentType, FilterCriteria, PatientSummary, Priority,
    ScheduleStats,
};
pub use doctor::{DoctorProfile, DoctorRef, WorkingHours};
pub use error::AppError;
