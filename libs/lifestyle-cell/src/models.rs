use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::number::{lenient_f64, lenient_u32};
use shared_models::{AppError, AppResult};
use shared_utils::form::{optional, optional_date, optional_number, require, require_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifestyleTab {
    #[default]
    Activity,
    Meal,
    Summary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "light" => Ok(Intensity::Low),
            "medium" | "moderate" => Ok(Intensity::Medium),
            "high" | "vigorous" => Ok(Intensity::High),
            other => Err(AppError::validation(format!("Unknown intensity: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(AppError::validation(format!("Unknown meal type: {}", other))),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::Snack => write!(f, "snack"),
        }
    }
}

// ==============================================================================
// RECORDS
// ==============================================================================

/// Daily activity log. `duration` is exercise minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub activity_type: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    pub intensity: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub water_glasses: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub steps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sleep_hours: Option<f64>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: String,
    pub meal_type: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: Option<f64>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

/// The stats endpoint returns activities and meals interleaved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LifestyleEntry {
    Activity(ActivityEntry),
    Meal(MealEntry),
}

impl LifestyleEntry {
    pub fn id(&self) -> &str {
        match self {
            LifestyleEntry::Activity(a) => &a.id,
            LifestyleEntry::Meal(m) => &m.id,
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            LifestyleEntry::Activity(a) => a.calories.unwrap_or(0.0),
            LifestyleEntry::Meal(m) => m.calories.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LifestyleStats {
    #[serde(deserialize_with = "lenient_u32")]
    pub total_activities: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub total_meals: u32,
    #[serde(deserialize_with = "lenient_total")]
    pub total_calories: f64,
    #[serde(deserialize_with = "lenient_total")]
    pub average_calories_per_meal: f64,
    pub entries: Vec<LifestyleEntry>,
}

fn lenient_total<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.unwrap_or(0.0))
}

// ==============================================================================
// FORMS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityForm {
    pub activity_type: String,
    pub duration: String,
    pub intensity: String,
    pub calories: String,
    pub water_glasses: String,
    pub steps: String,
    pub sleep_hours: String,
    pub notes: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewActivity {
    pub activity_type: String,
    pub duration: u32,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_glasses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ActivityForm {
    pub fn validate(&self) -> AppResult<NewActivity> {
        let activity_type = require(&self.activity_type, "Activity type")?;
        let duration = require_number::<u32>(&self.duration, "Duration")?;
        let intensity = match optional(&self.intensity) {
            Some(raw) => raw.parse()?,
            None => Intensity::default(),
        };

        Ok(NewActivity {
            activity_type,
            duration,
            intensity,
            calories: optional_number(&self.calories, "Calories")?,
            water_glasses: optional_number(&self.water_glasses, "Water")?,
            steps: optional_number(&self.steps, "Steps")?,
            sleep_hours: optional_number(&self.sleep_hours, "Sleep hours")?,
            notes: optional(&self.notes),
            date: optional_date(&self.date, "Date")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealForm {
    pub meal_type: String,
    pub description: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub notes: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMeal {
    pub meal_type: MealType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl MealForm {
    pub fn validate(&self) -> AppResult<NewMeal> {
        Ok(NewMeal {
            meal_type: require(&self.meal_type, "Meal type")?.parse()?,
            description: require(&self.description, "Description")?,
            calories: optional_number(&self.calories, "Calories")?,
            protein: optional_number(&self.protein, "Protein")?,
            carbs: optional_number(&self.carbs, "Carbs")?,
            fat: optional_number(&self.fat, "Fat")?,
            notes: optional(&self.notes),
            date: optional_date(&self.date, "Date")?,
        })
    }
}

// ==============================================================================
// RESPONSES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub summary: LifestyleStats,
}

#[derive(Debug, Deserialize)]
pub struct ActivityLoggedResponse {
    pub activity: ActivityEntry,
}

#[derive(Debug, Deserialize)]
pub struct MealLoggedResponse {
    pub meal: MealEntry,
}
