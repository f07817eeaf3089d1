use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Not signed in")]
    NotSignedIn,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn missing_field(label: &str) -> Self {
        AppError::Validation(format!("{} is required", label))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Text shown to the user in an error toast.
    ///
    /// Validation errors and server-provided messages are shown as-is; every
    /// other failure collapses to the caller's fallback.
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            AppError::NotSignedIn => "Please log in to continue".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
