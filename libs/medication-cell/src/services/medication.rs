use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{
    DoseLoggedResponse, Medication, MedicationCreatedResponse, MedicationListResponse, NewMedication,
};

pub struct MedicationService {
    client: MedSageClient,
}

impl MedicationService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_active_medications(&self, auth_token: &str) -> AppResult<Vec<Medication>> {
        debug!("Fetching active medications");

        let response: MedicationListResponse = self.client.request(
            Method::GET,
            "/medication/active",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.medications)
    }

    pub async fn add_medication(&self, medication: &NewMedication, auth_token: &str) -> AppResult<Medication> {
        debug!("Adding medication: {}", medication.name);

        let response: MedicationCreatedResponse = self.client.request(
            Method::POST,
            "/medication/add",
            Some(auth_token),
            Some(serde_json::to_value(medication)?),
        ).await?;

        Ok(response.medication)
    }

    /// Records one dose taken; returns the server's new dose count.
    pub async fn log_dose(&self, medication_id: &str, auth_token: &str) -> AppResult<u32> {
        debug!("Logging dose for medication: {}", medication_id);

        let response: DoseLoggedResponse = self.client.request(
            Method::POST,
            "/medication/log-dose",
            Some(auth_token),
            Some(json!({ "medication_id": medication_id })),
        ).await?;

        Ok(response.doses_logged)
    }
}
