pub mod controller;
pub mod models;
pub mod services;

pub use controller::WomensHealthController;
pub use models::*;
