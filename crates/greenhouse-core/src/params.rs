//! Parameter structures for tracker operations
//!
//! These structures are shared by every interface (HTTP API, CLI) without
//! framework-specific derives beyond serde. The HTTP layer deserializes them
//! straight from request bodies, so field names follow the camelCase JSON
//! used by the browser UI; the CLI builds them from its own clap argument
//! structs.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   JSON bodies   │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (this module)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{ActivityKind, GrowthStage, IntervalInput},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlant {
    /// Display name of the plant
    pub name: String,
    /// Optional strain or variety
    #[serde(default)]
    pub strain: Option<String>,
    /// Growth stage (seedling when omitted)
    #[serde(default)]
    pub stage: Option<GrowthStage>,
    /// Category providing the care schedule
    #[serde(default)]
    pub category_id: Option<u64>,
}

impl CreatePlant {
    /// Checks that the plant has a usable name.
    pub fn validate(&self) -> Result<()> {
        require_name("name", &self.name)
    }
}

/// Parameters for recording a care activity against a plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivity {
    /// What was done
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
    /// Name of the caretaker doing the work
    #[serde(default, alias = "profile")]
    pub caretaker: Option<String>,
    /// URLs returned by the upload endpoint
    #[serde(default, alias = "photos")]
    pub images: Vec<String>,
}

/// Parameters for creating a caretaker profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfile {
    /// Display name
    pub name: String,
    /// Display color; one is picked from the palette when omitted
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateProfile {
    /// Checks that the profile has a usable name.
    pub fn validate(&self) -> Result<()> {
        require_name("name", &self.name)
    }
}

/// A category as submitted by a client, before defaults and coercion.
///
/// Used both for creating a single category and for bulk replacement. Every
/// field is optional; interval fields accept numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    /// Existing ID to keep (bulk replacement only)
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub watering_days: Option<IntervalInput>,
    #[serde(default)]
    pub feeding_days: Option<IntervalInput>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update for an existing category; absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub watering_days: Option<IntervalInput>,
    #[serde(default)]
    pub feeding_days: Option<IntervalInput>,
    #[serde(default)]
    pub color: Option<String>,
}

impl UpdateCategory {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.watering_days.is_none()
            && self.feeding_days.is_none()
            && self.color.is_none()
    }
}

/// Parameters for setting or clearing one task assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTask {
    /// Task key in `<plantId>:<water|feed>:<YYYY-MM-DD>` form
    pub key: String,
    /// Profile to assign; `None` returns the task to automatic rotation
    #[serde(default)]
    pub profile_id: Option<u64>,
}

/// Query parameters for the schedule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// Days ahead to look (14 when omitted)
    #[serde(default)]
    pub horizon: Option<u32>,
}

fn require_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}
