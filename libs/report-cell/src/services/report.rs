use reqwest::{multipart::{Form, Part}, Method};
use serde_json::Value;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::{AppError, AppResult};

use crate::models::{
    MedicalReport, ReportDeletedResponse, ReportListResponse, ReportUploadedResponse, UploadReportRequest,
};

pub struct ReportService {
    client: MedSageClient,
}

impl ReportService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn list_reports(&self, auth_token: &str) -> AppResult<Vec<MedicalReport>> {
        debug!("Fetching medical reports");

        let response: ReportListResponse = self.client.request(
            Method::GET,
            "/report/list",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.reports)
    }

    pub async fn upload_report(
        &self,
        request: &UploadReportRequest,
        auth_token: &str,
    ) -> AppResult<MedicalReport> {
        debug!("Uploading report {} ({} bytes)", request.file.file_name(), request.file.size());

        let file_part = Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.file_name().to_string())
            .mime_str(request.file.mime_type())
            .map_err(|e| AppError::validation(format!("Invalid file type: {}", e)))?;

        let form = Form::new()
            .part("file", file_part)
            .text("name", request.name.clone())
            .text("report_type", request.report_type.as_str())
            .text("notes", request.notes.clone().unwrap_or_default());

        let response: ReportUploadedResponse = self.client
            .upload("/report/upload", auth_token, form)
            .await?;

        Ok(response.report)
    }

    pub async fn delete_report(&self, report_id: &str, auth_token: &str) -> AppResult<()> {
        debug!("Deleting report: {}", report_id);

        let path = format!("/report/{}", report_id);
        let response: ReportDeletedResponse = self.client.request(
            Method::DELETE,
            &path,
            Some(auth_token),
            None::<Value>,
        ).await?;

        debug!("Delete result: {:?}", response.message);
        Ok(())
    }
}
