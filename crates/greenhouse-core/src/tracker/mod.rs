//! High-level tracker API for plants, caretakers and the care schedule.
//!
//! This module provides the main [`Tracker`] interface used by both the CLI
//! and the HTTP server. The tracker is a thin async facade over the blocking
//! [`Store`](crate::store::Store) and [`UploadStore`](crate::store::UploadStore).
//! Every call runs on a blocking thread and re-reads the data file. Clones of
//! a tracker share one store handle, so their writes are serialized; separate
//! trackers (or processes) on one file get last-write-wins semantics.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │      Store      │
//! │   (handlers)    │───▶│ (plant_ops,     │───▶│   (via store/)  │
//! │                 │    │  care_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Display wrappers        spawn_blocking          JSON data file
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Tracker`] instances with configuration
//! - [`plant_ops`]: Plant and activity operations
//! - [`care_ops`]: Profiles, categories, assignments and the schedule
//! - [`upload_ops`]: Photo storage
//! - [`handlers`]: Operations returning display wrappers
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use greenhouse_core::{params::CreatePlant, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_data_path(Some("/tmp/greenhouse/data.json"))
//!     .build()
//!     .await?;
//!
//! let plant = tracker
//!     .create_plant(&CreatePlant {
//!         name: "Basil".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! let schedule = tracker.schedule(&Default::default()).await?;
//! assert!(schedule.iter().any(|t| t.plant_id == plant.id));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{JoinResultExt, Result},
    store::{Store, UploadStore},
};

pub mod builder;
pub mod care_ops;
pub mod handlers;
pub mod plant_ops;
pub mod upload_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) store: Store,
    pub(crate) upload_dir: PathBuf,
}

impl Tracker {
    pub(crate) fn new(store: Store, upload_dir: PathBuf) -> Self {
        Self { store, upload_dir }
    }

    /// Path of the JSON data file.
    pub fn data_path(&self) -> &Path {
        self.store.path()
    }

    /// Directory holding uploaded photos.
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Runs `op` against the data file on a blocking thread.
    pub(crate) async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || op(&store))
            .await
            .join_context()
    }

    /// Runs `op` against the upload directory on a blocking thread.
    pub(crate) async fn with_uploads<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&UploadStore) -> Result<T> + Send + 'static,
    {
        let upload_dir = self.upload_dir.clone();
        task::spawn_blocking(move || {
            let uploads = UploadStore::open(&upload_dir)?;
            op(&uploads)
        })
        .await
        .join_context()
    }
}
