pub mod controller;
pub mod models;
pub mod services;

pub use controller::MedicationController;
pub use models::*;
