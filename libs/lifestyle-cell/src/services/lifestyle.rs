use reqwest::Method;
use tracing::debug;

use shared_api_client::MedSageClient;
use shared_config::AppConfig;
use shared_models::AppResult;

use crate::models::{
    ActivityEntry, ActivityLoggedResponse, LifestyleStats, MealEntry, MealLoggedResponse, NewActivity,
    NewMeal, StatsResponse,
};

pub struct LifestyleService {
    client: MedSageClient,
}

impl LifestyleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: MedSageClient::new(config),
        }
    }

    pub async fn get_stats(&self, auth_token: &str) -> AppResult<LifestyleStats> {
        debug!("Fetching lifestyle stats");

        let response: StatsResponse = self.client.request(
            Method::GET,
            "/lifestyle/stats",
            Some(auth_token),
            None,
        ).await?;

        Ok(response.summary)
    }

    pub async fn log_activity(&self, activity: &NewActivity, auth_token: &str) -> AppResult<ActivityEntry> {
        debug!("Logging activity: {} for {} min", activity.activity_type, activity.duration);

        let response: ActivityLoggedResponse = self.client.request(
            Method::POST,
            "/lifestyle/activity",
            Some(auth_token),
            Some(serde_json::to_value(activity)?),
        ).await?;

        Ok(response.activity)
    }

    pub async fn log_meal(&self, meal: &NewMeal, auth_token: &str) -> AppResult<MealEntry> {
        debug!("Logging meal: {}", meal.meal_type);

        let response: MealLoggedResponse = self.client.request(
            Method::POST,
            "/lifestyle/meal",
            Some(auth_token),
            Some(serde_json::to_value(meal)?),
        ).await?;

        Ok(response.meal)
    }
}
