pub mod field_error;
pub mod loading;
pub mod page_header;
pub mod status_badge;
pub mod status_stepper;
