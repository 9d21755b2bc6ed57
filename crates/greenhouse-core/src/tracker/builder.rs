//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    error::{JoinResultExt, Result, TrackerError},
    store::{Store, UploadStore},
};

const APP_PREFIX: &str = "greenhouse";
const DATA_FILE_NAME: &str = "data.json";
const UPLOAD_DIR_NAME: &str = "uploads";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    data_path: Option<PathBuf>,
    upload_dir: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/greenhouse/data.json` or
    /// `~/.local/share/greenhouse/data.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom directory for uploaded photos.
    ///
    /// If not specified, an `uploads` directory next to a custom data file is
    /// used, or `$XDG_DATA_HOME/greenhouse/uploads` otherwise.
    pub fn with_upload_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.upload_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker, creating the data file and upload
    /// directory when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::XdgDirectory` if no default location can be
    /// determined, `TrackerError::FileSystem` if the paths are unusable and
    /// `TrackerError::Serialization` if an existing data file is corrupt.
    pub async fn build(self) -> Result<Tracker> {
        let data_path = match self.data_path {
            Some(path) => path,
            None => default_path(DATA_FILE_NAME)?,
        };
        let upload_dir = match self.upload_dir {
            Some(dir) => dir,
            None => upload_dir_for(&data_path)?,
        };

        let upload_clone = upload_dir.clone();
        let store = task::spawn_blocking(move || {
            let store = Store::open(&data_path)?;
            store.load()?;
            UploadStore::open(&upload_clone)?;
            Ok(store)
        })
        .await
        .join_context()?;

        debug!(
            "Tracker ready (data: {}, uploads: {})",
            store.path().display(),
            upload_dir.display()
        );
        Ok(Tracker::new(store, upload_dir))
    }
}

/// Places `name` under the XDG data directory for the application.
fn default_path(name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_data_file(name)
        .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
}

fn upload_dir_for(data_path: &Path) -> Result<PathBuf> {
    match data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => Ok(parent.join(UPLOAD_DIR_NAME)),
        None => default_path(UPLOAD_DIR_NAME),
    }
}
