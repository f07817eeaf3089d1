//! Lenient numeric fields.
//!
//! The API stores log entries exactly as clients sent them, so a number may
//! come back as `30`, `30.5` or `"30"`. Use with
//! `#[serde(default, deserialize_with = "shared_models::number::lenient_f64")]`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Reads a number or numeric string. Null, blank or non-numeric text reads
/// as `None` so one malformed entry cannot fail a whole list.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// Whole-number counterpart of [`lenient_f64`] for totals. Anything
/// unreadable or negative reads as zero.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?
        .filter(|v| *v >= 0.0)
        .map(|v| v.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}
