use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{
    NewPeriod, NewSymptom, PeriodListResponse, PeriodLog, PeriodLoggedResponse,
    SymptomListResponse, SymptomLog, SymptomLoggedResponse,
};

pub struct WomensHealthService {
    client: MedSageClient,
}

impl WomensHealthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_periods(&self, auth_token: &str) -> AppResult<Vec<PeriodLog>> {
        debug!("Fetching period logs");

        let response: PeriodListResponse = self.client.request(
            Method::GET,
            "/womens-health/periods",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.periods)
    }

    pub async fn get_symptoms(&self, auth_token: &str) -> AppResult<Vec<SymptomLog>> {
        debug!("Fetching symptom logs");

        let response: SymptomListResponse = self.client.request(
            Method::GET,
            "/womens-health/symptoms",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.symptoms)
    }

    pub async fn log_period(&self, period: &NewPeriod, auth_token: &str) -> AppResult<PeriodLog> {
        debug!("Logging period starting {}", period.start_date);

        let response: PeriodLoggedResponse = self.client.request(
            Method::POST,
            "/womens-health/period",
            Some(auth_token),
            Some(serde_json::to_value(period)?),
        ).await?;

        Ok(response.period)
    }

    pub async fn log_symptom(&self, symptom: &NewSymptom, auth_token: &str) -> AppResult<SymptomLog> {
        debug!("Logging symptom: {} (severity {})", symptom.symptom_type, symptom.severity);

        let response: SymptomLoggedResponse = self.client.request(
            Method::POST,
            "/womens-health/symptom",
            Some(auth_token),
            Some(serde_json::to_value(symptom)?),
        ).await?;

        Ok(response.symptom)
    }
}
