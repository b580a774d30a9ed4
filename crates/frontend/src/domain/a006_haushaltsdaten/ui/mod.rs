pub mod form;
pub mod freigaben;
pub mod summary;
