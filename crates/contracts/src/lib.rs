//! Types shared by the dashboard: backend DTOs, form validation and the
//! workflow rules deciding which view a page renders.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
