//! Activity model definition and timestamp handling.

use jiff::{civil, tz::TimeZone, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ActivityKind;

/// A single care event recorded against a plant.
///
/// The timestamp is kept as the raw text that was stored so that imported
/// data with malformed values survives a load/save cycle untouched. Use
/// [`Activity::occurred_at`] or [`Activity::date_in`] to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier for the activity
    #[serde(default)]
    pub id: u64,

    /// What was done
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Creation time as stored (RFC 3339 for records written by this crate).
    /// Non-string values load as their JSON text, `null` as an empty string.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: String,

    /// Name of the caretaker who logged the activity
    #[serde(default, alias = "profile", skip_serializing_if = "Option::is_none")]
    pub caretaker: Option<String>,

    /// URLs of photos attached to the activity
    #[serde(default, alias = "photos")]
    pub images: Vec<String>,
}

impl Activity {
    /// Parses the stored timestamp as an absolute instant.
    ///
    /// Returns `None` for anything that is not RFC 3339 with an offset.
    pub fn occurred_at(&self) -> Option<Timestamp> {
        self.timestamp.trim().parse::<Timestamp>().ok()
    }

    /// Calendar date of the activity in the given time zone.
    ///
    /// Absolute timestamps are converted into `tz`. Offset-less values
    /// (`2024-01-01T08:00:00` or a bare `2024-01-01`) are read as local
    /// civil times. Anything else yields `None`.
    pub fn date_in(&self, tz: &TimeZone) -> Option<civil::Date> {
        if let Some(ts) = self.occurred_at() {
            return Some(ts.to_zoned(tz.clone()).date());
        }

        let raw = self.timestamp.trim();
        raw.parse::<civil::DateTime>()
            .map(|dt| dt.date())
            .or_else(|_| raw.parse::<civil::Date>())
            .ok()
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
