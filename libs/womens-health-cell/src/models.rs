use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::number::lenient_f64;
use shared_models::{AppError, AppResult};
use shared_utils::form::{optional, optional_date, optional_number, require, require_date};

pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 10;
pub const DEFAULT_SEVERITY: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WomensHealthTab {
    #[default]
    Period,
    Symptoms,
    History,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlowLevel {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl FromStr for FlowLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(FlowLevel::Light),
            "medium" => Ok(FlowLevel::Medium),
            "heavy" => Ok(FlowLevel::Heavy),
            other => Err(AppError::validation(format!("Unknown flow level: {}", other))),
        }
    }
}

impl fmt::Display for FlowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowLevel::Light => write!(f, "light"),
            FlowLevel::Medium => write!(f, "medium"),
            FlowLevel::Heavy => write!(f, "heavy"),
        }
    }
}

// ==============================================================================
// RECORDS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodLog {
    pub id: String,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub flow: FlowLevel,
    pub notes: Option<String>,
    pub logged_at: Option<String>,
}

/// `date` may carry a time component when the server defaulted it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomLog {
    pub id: String,
    pub symptom_type: String,
    #[serde(default = "default_severity", deserialize_with = "lenient_severity")]
    pub severity: u8,
    pub date: Option<String>,
    pub notes: Option<String>,
    pub logged_at: Option<String>,
}

fn default_severity() -> u8 {
    DEFAULT_SEVERITY
}

/// Accepts `7` or `"7"`. Unreadable values fall back to the default and
/// stored values are clamped into range.
fn lenient_severity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?
        .map(|v| v.round().clamp(MIN_SEVERITY as f64, MAX_SEVERITY as f64) as u8)
        .unwrap_or(DEFAULT_SEVERITY))
}

// ==============================================================================
// FORMS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodForm {
    pub start_date: String,
    pub end_date: String,
    pub flow: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewPeriod {
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub flow: FlowLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PeriodForm {
    pub fn validate(&self) -> AppResult<NewPeriod> {
        let start_date = require_date(&self.start_date, "Start date")?;
        let end_date = optional_date(&self.end_date, "End date")?;

        if let Some(end) = end_date {
            if end < start_date {
                return Err(AppError::validation("End date cannot be before start date"));
            }
        }

        let flow = match optional(&self.flow) {
            Some(raw) => raw.parse()?,
            None => FlowLevel::default(),
        };

        Ok(NewPeriod {
            start_date,
            end_date,
            flow,
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymptomForm {
    pub symptom_type: String,
    pub severity: String,
    pub date: String,
    pub notes: String,
}

impl Default for SymptomForm {
    fn default() -> Self {
        Self {
            symptom_type: String::new(),
            severity: DEFAULT_SEVERITY.to_string(),
            date: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewSymptom {
    pub symptom_type: String,
    pub severity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SymptomForm {
    pub fn validate(&self) -> AppResult<NewSymptom> {
        let symptom_type = require(&self.symptom_type, "Symptom type")?;
        let severity = optional_number::<u8>(&self.severity, "Severity")?
            .unwrap_or(DEFAULT_SEVERITY);

        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
            return Err(AppError::validation(format!(
                "Severity must be between {} and {}",
                MIN_SEVERITY, MAX_SEVERITY
            )));
        }

        Ok(NewSymptom {
            symptom_type,
            severity,
            date: optional_date(&self.date, "Date")?,
            notes: optional(&self.notes),
        })
    }
}

// ==============================================================================
// RESPONSES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct PeriodListResponse {
    #[serde(default)]
    pub periods: Vec<PeriodLog>,
}

#[derive(Debug, Deserialize)]
pub struct SymptomListResponse {
    #[serde(default)]
    pub symptoms: Vec<SymptomLog>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodLoggedResponse {
    pub period: PeriodLog,
}

#[derive(Debug, Deserialize)]
pub struct SymptomLoggedResponse {
    pub symptom: SymptomLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_period_form() {
        let form = PeriodForm {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-05".to_string(),
            flow: "Heavy".to_string(),
            ..Default::default()
        };

        let body = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(body, json!({
            "start_date": "2024-03-01",
            "end_date": "2024-03-05",
            "flow": "heavy"
        }));

        let backwards = PeriodForm { end_date: "2024-02-27".to_string(), ..form.clone() };
        assert!(backwards.validate().unwrap_err().is_validation());

        let missing = PeriodForm { start_date: " ".to_string(), ..form };
        assert_eq!(missing.validate().unwrap_err().toast_message(""), "Start date is required");
    }

    #[test]
    fn test_symptom_severity_bounds() {
        let mut form = SymptomForm {
            symptom_type: "cramps".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().severity, DEFAULT_SEVERITY);

        form.severity = "10".to_string();
        assert_eq!(form.validate().unwrap().severity, 10);

        form.severity = "0".to_string();
        assert_eq!(
            form.validate().unwrap_err().toast_message(""),
            "Severity must be between 1 and 10"
        );

        form.severity = "11".to_string();
        assert!(form.validate().is_err());

        form.severity = String::new();
        assert_eq!(form.validate().unwrap().severity, DEFAULT_SEVERITY);
    }

    #[test]
    fn test_records_tolerate_server_defaults() {
        let period: PeriodLog = serde_json::from_value(json!({
            "id": "p1",
            "start_date": "2024-03-01",
            "end_date": null,
            "notes": null,
            "logged_at": "2024-03-01T09:00:00"
        }))
        .unwrap();
        assert_eq!(period.flow, FlowLevel::Medium);

        let symptom: SymptomLog = serde_json::from_value(json!({
            "id": "s1",
            "symptom_type": "headache",
            "date": "2024-03-02T08:15:00.123456"
        }))
        .unwrap();
        assert_eq!(symptom.severity, 5);
    }

    #[test]
    fn test_symptom_severity_sent_as_text() {
        let symptoms: Vec<SymptomLog> = serde_json::from_value(json!([
            {"id": "s1", "symptom_type": "cramps", "severity": "7"},
            {"id": "s2", "symptom_type": "fatigue", "severity": 3},
            {"id": "s3", "symptom_type": "bloating", "severity": "severe"},
            {"id": "s4", "symptom_type": "headache", "severity": null}
        ]))
        .unwrap();

        let severities: Vec<u8> = symptoms.iter().map(|s| s.severity).collect();
        assert_eq!(severities, vec![7, 3, DEFAULT_SEVERITY, DEFAULT_SEVERITY]);
    }
}
