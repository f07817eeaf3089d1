pub mod controller;
pub mod models;
pub mod services;

pub use controller::LifestyleController;
pub use models::*;
