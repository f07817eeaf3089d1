use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::{AppResult, AuthResponse, Session};

use crate::models::{LoginRequest, SignupRequest};

pub struct AuthService {
    client: MedSageClient,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<Session> {
        debug!("Logging in: {}", request.email);

        let response: AuthResponse = self.client.request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({
                "email": request.email,
                "password": request.password
            })),
        ).await?;

        Ok(response.into())
    }

    pub async fn signup(&self, request: &SignupRequest) -> AppResult<Session> {
        debug!("Creating account for: {}", request.email);

        let response: AuthResponse = self.client.request(
            Method::POST,
            "/auth/signup",
            None,
            Some(serde_json::to_value(request)?),
        ).await?;

        Ok(response.into())
    }
}
