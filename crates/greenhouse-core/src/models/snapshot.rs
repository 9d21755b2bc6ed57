//! The top-level document persisted in the data file.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{Category, Plant, Profile};

/// Explicit caretaker overrides keyed by task key.
///
/// A `None` value means "unset": the schedule falls back to automatic
/// assignment for that task.
pub type TaskAssignments = BTreeMap<String, Option<u64>>;

/// Every collection stored in the data file.
///
/// Missing or `null` collections deserialize as empty so that files written
/// by older versions keep loading. Unrecognized top-level keys are carried
/// along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// All plants, in creation order
    #[serde(default, deserialize_with = "null_as_default")]
    pub plants: Vec<Plant>,

    /// All caretaker profiles
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<Profile>,

    /// All care categories
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,

    /// Explicit task assignment overrides
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_assignments: TaskAssignments,

    /// Top-level keys this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A partial snapshot: each present key replaces the stored collection,
/// absent keys leave it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plants: Option<Vec<Plant>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<Profile>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_assignments: Option<TaskAssignments>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snapshot {
    /// Applies a shallow, top-level merge of `patch` onto this snapshot.
    pub fn apply(&mut self, patch: SnapshotPatch) {
        if let Some(plants) = patch.plants {
            self.plants = plants;
        }
        if let Some(profiles) = patch.profiles {
            self.profiles = profiles;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(task_assignments) = patch.task_assignments {
            self.task_assignments = task_assignments;
        }
        self.extra.extend(patch.extra);
    }

    /// Finds a plant by ID.
    pub fn plant(&self, id: u64) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Finds a category by ID.
    pub fn category(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Finds a profile by ID.
    pub fn profile(&self, id: u64) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
