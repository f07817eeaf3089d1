pub mod models;
pub mod profile;
pub mod services;
pub mod vitals;

pub use models::*;
pub use profile::ProfileController;
pub use vitals::VitalsController;
