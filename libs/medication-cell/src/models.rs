use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::AppResult;
use shared_utils::form::{optional, optional_date, require};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedicationTab {
    #[default]
    Add,
    View,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub doses_logged: DoseCount,
    pub added_at: Option<String>,
}

/// The server reports doses either as a running count or as a list of
/// dose records, depending on version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DoseCount {
    Count(u32),
    Entries(Vec<Value>),
}

impl DoseCount {
    pub fn count(&self) -> usize {
        match self {
            DoseCount::Count(n) => *n as usize,
            DoseCount::Entries(entries) => entries.len(),
        }
    }
}

impl Default for DoseCount {
    fn default() -> Self {
        DoseCount::Count(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl MedicationForm {
    pub fn validate(&self) -> AppResult<NewMedication> {
        Ok(NewMedication {
            name: require(&self.name, "Medication name")?,
            dosage: require(&self.dosage, "Dosage")?,
            frequency: require(&self.frequency, "Frequency")?,
            start_date: optional_date(&self.start_date, "Start date")?,
            end_date: optional_date(&self.end_date, "End date")?,
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MedicationListResponse {
    #[serde(default)]
    pub medications: Vec<Medication>,
}

#[derive(Debug, Deserialize)]
pub struct MedicationCreatedResponse {
    pub medication: Medication,
}

#[derive(Debug, Deserialize)]
pub struct DoseLoggedResponse {
    pub doses_logged: u32,
}
