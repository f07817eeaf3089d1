use serde::{Deserialize, Deserializer, Serialize};

use shared_models::number::lenient_f64;
use shared_models::{AppError, AppResult};
use shared_utils::form::{optional, optional_number};

pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const DEFAULT_VITALS_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    View,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VitalsTab {
    #[default]
    Record,
    History,
    Score,
}

// ==============================================================================
// PROFILE
// ==============================================================================

/// The profile document created at signup and edited section by section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UserProfile {
    pub user_id: Option<String>,
    pub personal_info: PersonalInfo,
    pub medical_history: MedicalHistory,
    pub lifestyle: LifestyleHabits,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient_f64")]
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub height_cm: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MedicalHistory {
    #[serde(deserialize_with = "string_list")]
    pub chronic_conditions: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub allergies: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub current_medications: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub past_surgeries: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub family_history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LifestyleHabits {
    pub smoking: Option<String>,
    pub alcohol: Option<String>,
    pub exercise_frequency: Option<String>,
    pub diet_type: Option<String>,
}

// Lists are stored as written; a null reads as empty.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    /// Body mass index from the stored height and weight, if both are set.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.personal_info.height_cm? / 100.0;
        let weight = self.personal_info.weight_kg?;
        (height_m > 0.0).then(|| weight / (height_m * height_m))
    }
}

/// Blank fields are left unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub blood_type: String,
    pub height_cm: String,
    pub weight_kg: String,
    /// Comma-separated.
    pub chronic_conditions: String,
    /// Comma-separated.
    pub allergies: String,
    pub smoking: String,
    pub alcohol: String,
    pub exercise_frequency: String,
    pub diet_type: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PersonalInfoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct MedicalHistoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronic_conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LifestyleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
}

/// Partial update; only the groups that carry a value are sent.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfoUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<MedicalHistoryUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<LifestyleUpdate>,
}

impl ProfileForm {
    pub fn validate(&self) -> AppResult<ProfileUpdate> {
        let personal = PersonalInfoUpdate {
            blood_type: optional(&self.blood_type),
            height_cm: bounded(&self.height_cm, "Height", MAX_HEIGHT_CM)?,
            weight_kg: bounded(&self.weight_kg, "Weight", MAX_WEIGHT_KG)?,
        };
        let medical = MedicalHistoryUpdate {
            chronic_conditions: comma_list(&self.chronic_conditions),
            allergies: comma_list(&self.allergies),
        };
        let lifestyle = LifestyleUpdate {
            smoking: optional(&self.smoking),
            alcohol: optional(&self.alcohol),
            exercise_frequency: optional(&self.exercise_frequency),
            diet_type: optional(&self.diet_type),
        };

        let update = ProfileUpdate {
            personal_info: (personal != PersonalInfoUpdate::default()).then_some(personal),
            medical_history: (medical != MedicalHistoryUpdate::default()).then_some(medical),
            lifestyle: (lifestyle != LifestyleUpdate::default()).then_some(lifestyle),
        };

        if update == ProfileUpdate::default() {
            return Err(AppError::validation("No updates provided"));
        }
        Ok(update)
    }
}

fn bounded(value: &str, label: &str, max: f64) -> AppResult<Option<f64>> {
    match optional_number::<f64>(value, label)? {
        Some(v) if v <= 0.0 || v > max => Err(AppError::validation(format!(
            "{} must be between 0 and {}",
            label, max
        ))),
        other => Ok(other),
    }
}

fn comma_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}

// ==============================================================================
// VITALS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalSigns {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub heart_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub blood_sugar: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bmi: Option<f64>,
    #[serde(default, alias = "timestamp", alias = "created_at")]
    pub recorded_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsForm {
    /// `systolic/diastolic`, e.g. `120/80`.
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub blood_sugar: String,
    pub bmi: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewVitals {
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<u32>,
    pub temperature: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub bmi: Option<f64>,
}

impl VitalsForm {
    pub fn validate(&self) -> AppResult<NewVitals> {
        let vitals = NewVitals {
            blood_pressure: optional(&self.blood_pressure)
                .map(|raw| parse_blood_pressure(&raw))
                .transpose()?,
            heart_rate: positive(optional_number(&self.heart_rate, "Heart rate")?, "Heart rate")?,
            temperature: positive(optional_number(&self.temperature, "Temperature")?, "Temperature")?,
            blood_sugar: positive(optional_number(&self.blood_sugar, "Blood sugar")?, "Blood sugar")?,
            bmi: positive(optional_number(&self.bmi, "BMI")?, "BMI")?,
        };

        let empty = vitals.blood_pressure.is_none()
            && vitals.heart_rate.is_none()
            && vitals.temperature.is_none()
            && vitals.blood_sugar.is_none()
            && vitals.bmi.is_none();
        if empty {
            return Err(AppError::validation("Please enter at least one vital sign"));
        }
        Ok(vitals)
    }
}

fn positive<T: PartialOrd + Default>(value: Option<T>, label: &str) -> AppResult<Option<T>> {
    match value {
        Some(v) if v <= T::default() => {
            Err(AppError::validation(format!("{} must be greater than 0", label)))
        }
        other => Ok(other),
    }
}

/// Normalizes `120 / 80` to `120/80`.
pub fn parse_blood_pressure(raw: &str) -> AppResult<String> {
    let invalid = || AppError::validation("Blood pressure must look like 120/80");
    let (systolic, diastolic) = raw.split_once('/').ok_or_else(invalid)?;
    let systolic: u32 = systolic.trim().parse().map_err(|_| invalid())?;
    let diastolic: u32 = diastolic.trim().parse().map_err(|_| invalid())?;
    if systolic == 0 || diastolic == 0 || diastolic >= systolic {
        return Err(invalid());
    }
    Ok(format!("{}/{}", systolic, diastolic))
}

// ==============================================================================
// HEALTH SCORE
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct HealthScore {
    #[serde(alias = "overall_score", deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    #[serde(alias = "category", alias = "status")]
    pub rating: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub recommendations: Vec<String>,
}

/// The score arrives either bare or as an object with a breakdown.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HealthScoreBody {
    Detailed(HealthScore),
    Bare(f64),
}

impl From<HealthScoreBody> for HealthScore {
    fn from(body: HealthScoreBody) -> Self {
        match body {
            HealthScoreBody::Detailed(score) => score,
            HealthScoreBody::Bare(score) => HealthScore { score: Some(score), ..Default::default() },
        }
    }
}

fn health_score<'de, D>(deserializer: D) -> Result<HealthScore, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HealthScoreBody>::deserialize(deserializer)?
        .map(HealthScore::from)
        .unwrap_or_default())
}

// ==============================================================================
// RESPONSES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VitalsListResponse {
    #[serde(default)]
    pub vitals: Vec<VitalSigns>,
}

#[derive(Debug, Deserialize)]
pub struct HealthScoreResponse {
    #[serde(default, deserialize_with = "health_score")]
    pub health_score: HealthScore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_reads_signup_document() {
        let profile: UserProfile = serde_json::from_value(json!({
            "user_id": "u1",
            "personal_info": {"age": 34, "gender": "female", "blood_type": null, "height_cm": "165", "weight_kg": 60},
            "medical_history": {"chronic_conditions": [], "allergies": ["penicillin"], "current_medications": null},
            "lifestyle": {"smoking": null},
            "tracking_preferences": {"track_womens_health": true},
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert_eq!(profile.personal_info.height_cm, Some(165.0));
        assert_eq!(profile.medical_history.allergies, vec!["penicillin"]);
        assert!(profile.medical_history.current_medications.is_empty());
        let bmi = profile.bmi().unwrap();
        assert!((bmi - 22.04).abs() < 0.01);
    }

    #[test]
    fn test_profile_form_sends_only_filled_groups() {
        let form = ProfileForm {
            blood_type: "O+".to_string(),
            allergies: "peanuts, , latex ".to_string(),
            ..Default::default()
        };

        let body = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(body, json!({
            "personal_info": {"blood_type": "O+"},
            "medical_history": {"allergies": ["peanuts", "latex"]}
        }));
    }

    #[test]
    fn test_profile_form_rejects_empty_and_out_of_range() {
        let err = ProfileForm::default().validate().unwrap_err();
        assert_eq!(err.toast_message(""), "No updates provided");

        let tall = ProfileForm { height_cm: "320".to_string(), ..Default::default() };
        assert_eq!(tall.validate().unwrap_err().toast_message(""), "Height must be between 0 and 300");

        let heavy = ProfileForm { weight_kg: "heavy".to_string(), ..Default::default() };
        assert_eq!(heavy.validate().unwrap_err().toast_message(""), "Weight must be a number");
    }

    #[test]
    fn test_vitals_form() {
        let form = VitalsForm {
            blood_pressure: " 120 / 80 ".to_string(),
            heart_rate: "72".to_string(),
            ..Default::default()
        };
        let vitals = form.validate().unwrap();
        assert_eq!(vitals.blood_pressure.as_deref(), Some("120/80"));
        assert_eq!(vitals.heart_rate, Some(72));
        assert_eq!(vitals.temperature, None);

        let err = VitalsForm::default().validate().unwrap_err();
        assert_eq!(err.toast_message(""), "Please enter at least one vital sign");

        for bad in ["120", "80/120", "abc/80", "0/0"] {
            assert!(parse_blood_pressure(bad).is_err(), "{} should be rejected", bad);
        }

        let cold = VitalsForm { temperature: "0".to_string(), ..Default::default() };
        assert_eq!(cold.validate().unwrap_err().toast_message(""), "Temperature must be greater than 0");
    }

    #[test]
    fn test_health_score_bare_or_detailed() {
        let bare: HealthScoreResponse =
            serde_json::from_value(json!({"success": true, "health_score": 82})).unwrap();
        assert_eq!(bare.health_score.score, Some(82.0));

        let detailed: HealthScoreResponse = serde_json::from_value(json!({
            "success": true,
            "health_score": {"overall_score": "74.5", "category": "Good", "recommendations": ["Sleep more"]}
        }))
        .unwrap();
        assert_eq!(detailed.health_score.score, Some(74.5));
        assert_eq!(detailed.health_score.rating.as_deref(), Some("Good"));
        assert_eq!(detailed.health_score.recommendations, vec!["Sleep more"]);

        let missing: HealthScoreResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(missing.health_score, HealthScore::default());
    }
}
