pub mod assistant;
pub mod chat;
pub mod models;
pub mod services;

pub use assistant::AssistantController;
pub use chat::ChatController;
pub use models::*;
