//! Data models for plants, care activities, categories and caretakers.
//!
//! This module contains the domain models persisted in the tracker's data
//! file. Field names serialize in camelCase so the file stays readable by the
//! browser UI that shares it. Display implementations for these models are
//! located in [`crate::display::models`] to keep presentation apart from the
//! data structures.
//!
//! # Ownership
//!
//! - A [`Plant`] owns its [`Activity`] list (newest first, prepend only).
//! - A plant references a [`Category`] by ID; deleting the category orphans
//!   the reference instead of deleting the plant.
//! - [`Profile`]s form an independent collection.
//! - [`TaskAssignments`] maps task keys to explicitly chosen profiles.
//!
//! # Examples
//!
//! ```rust
//! use greenhouse_core::models::{Snapshot, SnapshotPatch};
//!
//! // Older files without categories still load
//! let snapshot: Snapshot = serde_json::from_str(r#"{"plants": [], "profiles": []}"#).unwrap();
//! assert!(snapshot.categories.is_empty());
//! assert!(snapshot.task_assignments.is_empty());
//! ```

pub mod activity;
pub mod category;
pub mod plant;
pub mod profile;
pub mod snapshot;
pub mod status;


pub use activity::Activity;
pub use category::{
    coerce_interval, Category, IntervalInput, DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_NAME,
    DEFAULT_FEEDING_DAYS, DEFAULT_WATERING_DAYS,
};
pub use plant::Plant;
pub use profile::{profile_color_for, Profile, PROFILE_COLORS};
pub use snapshot::{Snapshot, SnapshotPatch, TaskAssignments};
pub use status::{ActivityKind, GrowthStage};
