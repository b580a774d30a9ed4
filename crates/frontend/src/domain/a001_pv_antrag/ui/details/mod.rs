//! Application detail pages. The view model loads the application and the
//! household data once; each role page hands both to the workflow gate.

mod abnahme;
mod genehmigung;
mod view;
mod view_model;

pub use view::{HaushaltAntragPage, NetzbetreiberAntragPage, SolarteurAntragPage};
pub use view_model::AntragDetailsViewModel;
