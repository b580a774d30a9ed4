pub mod anlage;
pub mod gebaeude;
pub mod prozess_status;
pub mod user_role;

pub use anlage::{Ausrichtung, Montagesystem, Verschattung};
pub use gebaeude::{Daemmqualitaet, Effizienzklasse, Heizungsart};
pub use prozess_status::ProzessStatus;
pub use user_role::UserRole;
