pub mod controller;
pub mod models;
pub mod services;

pub use controller::AppointmentController;
pub use models::*;
