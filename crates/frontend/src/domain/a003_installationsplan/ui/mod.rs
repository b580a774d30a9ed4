pub mod form;
pub mod summary;
