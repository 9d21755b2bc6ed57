//! Category model definition and interval coercion.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// Watering interval used when a plant has no usable category.
pub const DEFAULT_WATERING_DAYS: u32 = 3;

/// Feeding interval used when a plant has no usable category.
pub const DEFAULT_FEEDING_DAYS: u32 = 7;

/// Display color given to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#5a8a5e";

/// Name given to categories created without one.
pub const DEFAULT_CATEGORY_NAME: &str = "Unnamed";

/// A group of plants sharing a care schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier for the category
    pub id: u64,

    /// Display name
    pub name: String,

    /// Days between waterings
    #[serde(
        default = "default_watering_days",
        deserialize_with = "deserialize_watering_days"
    )]
    pub watering_days: u32,

    /// Days between feedings
    #[serde(
        default = "default_feeding_days",
        deserialize_with = "deserialize_feeding_days"
    )]
    pub feeding_days: u32,

    /// Display color (CSS hex)
    #[serde(default = "default_color")]
    pub color: String,

    /// Timestamp when the category was created (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Category {
    /// Effective watering interval; non-positive values fall back to the
    /// default.
    pub fn watering_interval(&self) -> u32 {
        positive_or(self.watering_days, DEFAULT_WATERING_DAYS)
    }

    /// Effective feeding interval; non-positive values fall back to the
    /// default.
    pub fn feeding_interval(&self) -> u32 {
        positive_or(self.feeding_days, DEFAULT_FEEDING_DAYS)
    }
}

fn positive_or(value: u32, default: u32) -> u32 {
    if value > 0 {
        value
    } else {
        default
    }
}

fn default_watering_days() -> u32 {
    DEFAULT_WATERING_DAYS
}

fn default_feeding_days() -> u32 {
    DEFAULT_FEEDING_DAYS
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// Interval value as it may appear in a request body or an older data file:
/// a JSON number, a numeric string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntervalInput {
    /// A JSON number (fractional values are truncated)
    Number(f64),
    /// A string such as `"5"`
    Text(String),
}

impl IntervalInput {
    /// Coerce to a positive whole number of days, or `None` if the value is
    /// not numeric or not positive.
    pub fn to_days(&self) -> Option<u32> {
        let value = match self {
            IntervalInput::Number(n) => *n,
            IntervalInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        if value.is_finite() && value >= 1.0 && value <= f64::from(u32::MAX) {
            Some(value.trunc() as u32)
        } else {
            None
        }
    }
}

/// Coerce an optional interval input, falling back to `default`.
pub fn coerce_interval(input: Option<&IntervalInput>, default: u32) -> u32 {
    input.and_then(IntervalInput::to_days).unwrap_or(default)
}

fn deserialize_watering_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<IntervalInput>::deserialize(deserializer)?;
    Ok(coerce_interval(input.as_ref(), DEFAULT_WATERING_DAYS))
}

fn deserialize_feeding_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<IntervalInput>::deserialize(deserializer)?;
    Ok(coerce_interval(input.as_ref(), DEFAULT_FEEDING_DAYS))
}
