use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{
    Appointment, AppointmentListResponse, AppointmentScheduledResponse, ScheduleAppointmentRequest,
};

pub struct AppointmentService {
    client: MedSageClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_upcoming_appointments(&self, auth_token: &str) -> AppResult<Vec<Appointment>> {
        debug!("Fetching upcoming appointments");

        let response: AppointmentListResponse = self.client.request(
            Method::GET,
            "/appointment/upcoming",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.appointments)
    }

    pub async fn schedule_appointment(
        &self,
        request: &ScheduleAppointmentRequest,
        auth_token: &str,
    ) -> AppResult<Appointment> {
        debug!("Scheduling appointment with {} on {}", request.doctor, request.date);

        let response: AppointmentScheduledResponse = self.client.request(
            Method::POST,
            "/appointment/schedule",
            Some(auth_token),
            Some(serde_json::to_value(request)?),
        ).await?;

        Ok(response.appointment)
    }
}
