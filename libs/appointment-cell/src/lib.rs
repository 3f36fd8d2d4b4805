pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::FilteredPage;
pub use services::debounce::Debouncer;
pub use services::filter::{apply, apply_predicates, DEFAULT_PAGE_SIZE};
pub use services::lifecycle::LifecycleService;
