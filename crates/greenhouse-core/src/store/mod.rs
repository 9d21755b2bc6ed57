//! JSON-file persistence for plants, profiles, categories and assignments.
//!
//! The whole tracker state lives in one pretty-printed JSON document. Every
//! operation is a read-modify-write of that document: callers hand in whole
//! snapshots or narrowly scoped changes, and the last write wins. Writes go
//! to a uniquely named sibling temporary file first and are persisted into
//! place, so a crash never leaves a half-written document behind. Clones of
//! one [`Store`] share a write lock that covers each read-modify-write.
//!
//! Operations are grouped by collection:
//!
//! - [`file`]: opening, loading, saving and shallow merging
//! - [`plant_queries`]: plants and their activity logs
//! - [`profile_queries`]: caretaker profiles
//! - [`category_queries`]: care categories, including bulk replacement
//! - [`assignment_queries`]: the task-assignment override map and schedule
//! - [`uploads`]: the photo [`UploadStore`], kept apart from the document

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use jiff::Timestamp;

pub mod assignment_queries;
pub mod category_queries;
pub mod file;
pub mod plant_queries;
pub mod profile_queries;
pub mod uploads;

#[cfg(test)]
mod tests;

pub use uploads::{
    IncomingFile, StoredFile, UploadStore, UploadedFile, MAX_UPLOAD_BATCH, UPLOAD_URL_PREFIX,
};

/// Handle on the data file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes writers sharing this handle. The guarded value is `()`, so
    /// a poisoned lock carries no broken state and is simply taken over.
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Allocates a creation-ordered ID: the current Unix time in milliseconds,
/// bumped past every ID already in use.
pub(crate) fn next_id<I>(existing: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let now = u64::try_from(Timestamp::now().as_millisecond()).unwrap_or_default();
    let floor = existing
        .into_iter()
        .max()
        .map_or(0, |max| max.saturating_add(1));
    now.max(floor)
}
