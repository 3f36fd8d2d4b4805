pub mod clinic;

pub use clinic::{
    AppointmentPage, ClinicApi, ClinicApiClient, DoctorSummary, Pagination, ScheduleExport,
    SchedulePayload,
};
