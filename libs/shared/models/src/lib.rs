pub mod auth;
pub mod error;
pub mod number;
pub mod toast;

pub use auth::{AuthResponse, Session};
pub use error::{AppError, AppResult};
pub use toast::{Toast, ToastKind};
