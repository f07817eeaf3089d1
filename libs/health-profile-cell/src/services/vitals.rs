use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{HealthScore, HealthScoreResponse, MessageResponse, NewVitals, VitalSigns, VitalsListResponse};

pub struct VitalsService {
    client: MedSageClient,
}

impl VitalsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn record_vitals(&self, vitals: &NewVitals, auth_token: &str) -> AppResult<Option<String>> {
        debug!("Recording vital signs");

        let response: MessageResponse = self.client.request(
            Method::POST,
            "/health/vital-signs",
            Some(auth_token),
            Some(serde_json::to_value(vitals)?),
        ).await?;

        Ok(response.message)
    }

    /// Readings from the last `days` days.
    pub async fn get_vitals(&self, days: u32, auth_token: &str) -> AppResult<Vec<VitalSigns>> {
        debug!("Fetching vital signs for the last {} days", days);

        let response: VitalsListResponse = self.client.request(
            Method::GET,
            &format!("/health/vitals?days={}", days),
            Some(auth_token),
            None,
        ).await?;

        Ok(response.vitals)
    }

    pub async fn get_health_score(&self, auth_token: &str) -> AppResult<HealthScore> {
        debug!("Fetching health score");

        let response: HealthScoreResponse = self.client.request(
            Method::GET,
            "/health/score",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.health_score)
    }
}
