//! Caretaker profile model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Colors handed out to new profiles in turn when none is chosen.
pub const PROFILE_COLORS: [&str; 10] = [
    "#5a8a5e", "#81a684", "#43a047", "#66bb6a", "#2e7d32", "#558b2f", "#7cb342", "#8bc34a",
    "#689f38", "#33691e",
];

/// A person who looks after the plants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: u64,

    /// Display name
    pub name: String,

    /// Display color (CSS hex)
    #[serde(default)]
    pub color: String,

    /// Timestamp when the profile was created (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Color for the profile created after `existing` others.
pub fn profile_color_for(existing: usize) -> &'static str {
    PROFILE_COLORS[existing % PROFILE_COLORS.len()]
}
