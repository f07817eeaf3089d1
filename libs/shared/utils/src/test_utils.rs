use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::Session;

use crate::context::SectionContext;
use crate::toast::ToastQueue;

pub struct TestConfig {
    pub api_base_url: String,
    pub session_file: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            session_file: std::env::temp_dir()
                .join(format!("medsage-test-{}.json", Uuid::new_v4()))
                .to_string_lossy()
                .into_owned(),
        }
    }
}

impl TestConfig {
    pub fn with_api_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::new(&self.api_base_url, &self.session_file)
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestSession {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
}

impl Default for TestSession {
    fn default() -> Self {
        Self {
            token: format!("test-token-{}", Uuid::new_v4().simple()),
            user_id: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            full_name: "Test User".to_string(),
        }
    }
}

impl TestSession {
    pub fn to_session(&self) -> Session {
        Session {
            token: self.token.clone(),
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// A context pointed at `api_base_url` plus the queue its toasts land in.
    pub fn context(&self, api_base_url: &str) -> (SectionContext, Arc<ToastQueue>) {
        let toasts = Arc::new(ToastQueue::new());
        let ctx = SectionContext::new(
            TestConfig::with_api_url(api_base_url).to_arc(),
            self.to_session(),
            toasts.clone(),
        );
        (ctx, toasts)
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn auth_response(email: &str, full_name: &str) -> serde_json::Value {
        json!({
            "success": true,
            "user_id": Uuid::new_v4().to_string(),
            "email": email,
            "full_name": full_name,
            "token": format!("jwt-{}", Uuid::new_v4().simple()),
            "message": "Login successful!"
        })
    }

    pub fn medication(name: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "name": name,
            "dosage": "500mg",
            "frequency": "twice_daily",
            "start_date": "2024-01-01",
            "end_date": null,
            "notes": null,
            "doses_logged": 0,
            "added_at": Utc::now().to_rfc3339()
        })
    }

    pub fn appointment(doctor: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "date": "2024-12-25",
            "time": "10:00",
            "doctor": doctor,
            "purpose": "Annual checkup",
            "location": "City Clinic",
            "notes": null,
            "status": "scheduled",
            "scheduled_at": Utc::now().to_rfc3339()
        })
    }

    pub fn report(name: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "name": name,
            "report_type": "blood_test",
            "file_name": "results.pdf",
            "file_path": "uploads/results.pdf",
            "file_size": 2048,
            "notes": "",
            "uploaded_at": Utc::now().to_rfc3339()
        })
    }

    pub fn period(start_date: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "start_date": start_date,
            "end_date": null,
            "flow": "medium",
            "notes": null,
            "logged_at": Utc::now().to_rfc3339()
        })
    }

    pub fn symptom(symptom_type: &str, severity: u8) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "symptom_type": symptom_type,
            "severity": severity,
            "notes": null,
            "date": "2024-03-02",
            "logged_at": Utc::now().to_rfc3339()
        })
    }

    pub fn activity(activity_type: &str, duration: u32) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "activity_type": activity_type,
            "duration": duration,
            "intensity": "medium",
            "calories": 250,
            "notes": null,
            "date": "2024-03-02",
            "logged_at": Utc::now().to_rfc3339()
        })
    }

    pub fn meal(meal_type: &str, calories: u32) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "meal_type": meal_type,
            "description": "Oatmeal with berries",
            "calories": calories,
            "protein": 8,
            "carbs": 45,
            "fat": 5,
            "notes": null,
            "date": "2024-03-02",
            "logged_at": Utc::now().to_rfc3339()
        })
    }

    pub fn consultation(question: &str, response: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "question": question,
            "response": response,
            "timestamp": Utc::now().to_rfc3339()
        })
    }

    /// The document signup creates, with an age and gender filled in.
    pub fn profile(user_id: &str, gender: &str) -> serde_json::Value {
        json!({
            "user_id": user_id,
            "personal_info": {
                "age": 34,
                "gender": gender,
                "blood_type": null,
                "height_cm": null,
                "weight_kg": null
            },
            "medical_history": {
                "chronic_conditions": [],
                "allergies": [],
                "current_medications": [],
                "past_surgeries": [],
                "family_history": []
            },
            "lifestyle": {
                "smoking": null,
                "alcohol": null,
                "exercise_frequency": null,
                "diet_type": null
            },
            "tracking_preferences": {
                "track_womens_health": gender == "female",
                "track_mens_health": gender == "male"
            },
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        })
    }

    pub fn vital_signs(blood_pressure: &str, heart_rate: u32) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "blood_pressure": blood_pressure,
            "heart_rate": heart_rate,
            "temperature": 36.8,
            "blood_sugar": null,
            "bmi": null,
            "recorded_at": Utc::now().to_rfc3339()
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({
            "success": false,
            "error": message
        })
    }
}
