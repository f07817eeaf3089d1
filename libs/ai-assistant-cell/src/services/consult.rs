use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{ConsultRequest, ConsultResponse, Consultation, HistoryResponse};

pub struct ConsultService {
    client: MedSageClient,
}

impl ConsultService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_history(&self, auth_token: &str) -> AppResult<Vec<Consultation>> {
        debug!("Fetching consultation history");

        let response: HistoryResponse = self.client.request(
            Method::GET,
            "/ai/history",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.conversations)
    }

    /// The answer text is displayed verbatim; nothing is interpreted client-side.
    pub async fn consult(&self, request: &ConsultRequest, auth_token: &str) -> AppResult<Consultation> {
        debug!("Sending consultation question ({} chars)", request.question.len());

        let response: ConsultResponse = self.client.request(
            Method::POST,
            "/ai/consult",
            Some(auth_token),
            Some(serde_json::to_value(request)?),
        ).await?;

        response.into_consultation(&request.question)
    }
}
