pub mod overview;
pub mod upload;
