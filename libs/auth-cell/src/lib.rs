// Auth Cell - login/signup, session storage and page routing
pub mod controller;
pub mod models;
pub mod navigation;
pub mod services;
pub mod session;

pub use controller::AuthController;
pub use models::{AuthTab, Gender, LoginForm, SignupForm};
pub use navigation::{Navigator, Route};
pub use session::{FileStorage, MemoryStorage, SessionManager, SessionStorage};

pub mod api {
    pub use crate::services::auth::AuthService;
}
