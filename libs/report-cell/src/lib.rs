pub mod controller;
pub mod models;
pub mod services;

pub use controller::ReportController;
pub use models::*;
