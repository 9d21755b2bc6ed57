//! Core library for the Greenhouse plant-care tracker.
//!
//! This crate provides the business logic for tracking plants, their care
//! history, caretaker profiles and care categories, and for projecting the
//! resulting watering and feeding schedule. State lives in a single JSON data
//! file shared with the browser UI.
//!
//! # Layers
//!
//! - **Models** ([`models`]): The persisted document and its parts
//! - **Schedule** ([`schedule`]): The pure schedule projector, task keys and
//!   caretaker rotation
//! - **Store** ([`store`]): Blocking persistence for the data file and photo
//!   uploads
//! - **Tracker** ([`tracker`]): Async facade used by the CLI and HTTP server
//! - **Display** ([`display`]): Markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use greenhouse_core::{params::CreatePlant, params::ScheduleQuery, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_data_path(Some("data.json"))
//!     .build()
//!     .await?;
//!
//! let plant = tracker
//!     .create_plant(&CreatePlant {
//!         name: "Basil".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{plant}");
//!
//! let schedule = tracker.schedule_display(&ScheduleQuery::default()).await?;
//! println!("{schedule}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use display::{
    Categories, CreateResult, DeleteResult, OperationStatus, Plants, Profiles, Schedule,
    UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    Activity, ActivityKind, Category, GrowthStage, Plant, Profile, Snapshot, SnapshotPatch,
    TaskAssignments,
};
pub use schedule::{project, CareAction, DueTask, ScheduleOptions, TaskKey};
pub use store::{Store, UploadStore};
pub use tracker::{Tracker, TrackerBuilder};
