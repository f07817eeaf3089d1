// Field helpers used by every form's `validate()`.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use shared_models::{AppError, AppResult};

use crate::section::non_blank;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn require(value: &str, label: &str) -> AppResult<String> {
    non_blank(value).ok_or_else(|| AppError::missing_field(label))
}

pub fn optional(value: &str) -> Option<String> {
    non_blank(value)
}

pub fn require_number<T: FromStr>(value: &str, label: &str) -> AppResult<T> {
    let raw = require(value, label)?;
    raw.parse::<T>()
        .map_err(|_| AppError::validation(format!("{} must be a number", label)))
}

pub fn optional_number<T: FromStr>(value: &str, label: &str) -> AppResult<Option<T>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{} must be a number", label))),
    }
}

pub fn require_date(value: &str, label: &str) -> AppResult<NaiveDate> {
    let raw = require(value, label)?;
    parse_date(&raw, label)
}

pub fn optional_date(value: &str, label: &str) -> AppResult<Option<NaiveDate>> {
    non_blank(value).map(|raw| parse_date(&raw, label)).transpose()
}

/// Validates an `HH:MM` wall-clock time and returns it normalized.
pub fn require_time(value: &str, label: &str) -> AppResult<String> {
    let raw = require(value, label)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| AppError::validation(format!("{} must be in HH:MM format", label)))
}

fn parse_date(raw: &str, label: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("{} must be a date (YYYY-MM-DD)", label)))
}
