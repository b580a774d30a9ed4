pub mod details;
pub mod form;
pub mod list;
pub mod request;
pub mod summary;
