//! Plant model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Activity, ActivityKind, GrowthStage};

/// Represents a tracked plant together with its care history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Unique, creation-ordered identifier (also encoded in printed barcodes)
    pub id: u64,

    /// Display name
    pub name: String,

    /// Optional strain or variety
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,

    /// Current growth stage
    #[serde(default)]
    pub stage: GrowthStage,

    /// Category providing the care schedule (may dangle after a category is
    /// deleted)
    #[serde(default)]
    pub category_id: Option<u64>,

    /// Care history, newest first
    #[serde(default)]
    pub activities: Vec<Activity>,

    /// Timestamp when the plant was created (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Plant {
    /// Returns the most recent activity of the given kind.
    ///
    /// Activities are stored newest first, so this is the first match when
    /// scanning from the head; no sorting is involved.
    pub fn last_activity(&self, kind: ActivityKind) -> Option<&Activity> {
        self.activities.iter().find(|a| a.kind == kind)
    }

    /// Iterates over activities of the given kind, newest first.
    pub fn activities_of(&self, kind: ActivityKind) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(move |a| a.kind == kind)
    }
}
