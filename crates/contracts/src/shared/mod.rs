pub mod api_error;
pub mod csv_export;
pub mod endpoints;
pub mod submission;
pub mod upload;
pub mod validation;
pub mod workflow;
