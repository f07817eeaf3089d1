use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{MessageResponse, ProfileResponse, ProfileUpdate, UserProfile};

pub struct ProfileService {
    client: MedSageClient,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_profile(&self, auth_token: &str) -> AppResult<UserProfile> {
        debug!("Fetching user profile");

        let response: ProfileResponse = self.client.request(
            Method::GET,
            "/user/profile",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.profile)
    }

    /// Returns the server's confirmation message, if it sent one.
    pub async fn update_profile(&self, update: &ProfileUpdate, auth_token: &str) -> AppResult<Option<String>> {
        debug!("Updating user profile");

        let response: MessageResponse = self.client.request(
            Method::PUT,
            "/user/profile",
            Some(auth_token),
            Some(serde_json::to_value(update)?),
        ).await?;

        Ok(response.message)
    }
}
