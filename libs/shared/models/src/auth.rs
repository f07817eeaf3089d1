use serde::{Deserialize, Serialize};

/// An authenticated user as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
}

impl Session {
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// Body returned by both `/auth/login` and `/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub message: Option<String>,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            token: response.token,
            user_id: response.user_id,
            email: response.email,
            full_name: response.full_name,
        }
    }
}
