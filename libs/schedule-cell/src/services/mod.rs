pub mod aggregate;
pub mod slots;
pub mod view;
