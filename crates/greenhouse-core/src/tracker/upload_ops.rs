//! Photo upload operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    store::{IncomingFile, StoredFile, UploadedFile},
};

impl Tracker {
    /// Stores a batch of uploaded photos.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for more than
    /// [`MAX_UPLOAD_BATCH`](crate::store::MAX_UPLOAD_BATCH) files.
    pub async fn save_uploads(&self, files: Vec<IncomingFile>) -> Result<Vec<UploadedFile>> {
        self.with_uploads(move |uploads| uploads.save(files)).await
    }

    /// Reads back a stored photo by file name.
    pub async fn open_upload(&self, filename: &str) -> Result<Option<StoredFile>> {
        let filename = filename.to_string();
        self.with_uploads(move |uploads| uploads.open_file(&filename)).await
    }
}
