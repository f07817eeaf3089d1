// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_models::AppResult;
use shared_utils::form::{optional, require, require_date, require_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentTab {
    #[default]
    Schedule,
    View,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub purpose: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub scheduled_at: Option<String>,
}

/// Displayed only; the client never changes an appointment's status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Other => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentForm {
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub purpose: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleAppointmentRequest {
    pub date: NaiveDate,
    pub time: String,
    pub doctor: String,
    pub purpose: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl AppointmentForm {
    pub fn validate(&self) -> AppResult<ScheduleAppointmentRequest> {
        Ok(ScheduleAppointmentRequest {
            date: require_date(&self.date, "Date")?,
            time: require_time(&self.time, "Time")?,
            doctor: require(&self.doctor, "Doctor")?,
            purpose: require(&self.purpose, "Purpose")?,
            location: optional(&self.location),
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentScheduledResponse {
    pub appointment: Appointment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_status_does_not_fail() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": "a1", "date": "2024-12-25", "time": "10:00", "doctor": "Dr. Lee",
            "purpose": "Checkup", "status": "no_show"
        }))
        .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Other);
    }

    #[test]
    fn test_missing_status_defaults_to_scheduled() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": "a1", "date": "2024-12-25", "time": "10:00", "doctor": "Dr. Lee",
            "purpose": "Checkup"
        }))
        .unwrap();
        assert_eq!(appointment.status.to_string(), "scheduled");
    }

    #[test]
    fn test_form_requires_core_fields() {
        let form = AppointmentForm {
            date: "2024-12-25".to_string(),
            time: "10:00".to_string(),
            doctor: "Dr. Lee".to_string(),
            purpose: String::new(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().toast_message(""), "Purpose is required");

        let complete = AppointmentForm { purpose: "Checkup".to_string(), ..form };
        let body = serde_json::to_value(complete.validate().unwrap()).unwrap();
        assert_eq!(body["date"], "2024-12-25");
        assert_eq!(body["time"], "10:00");
        assert!(body["location"].is_null());
    }
}
