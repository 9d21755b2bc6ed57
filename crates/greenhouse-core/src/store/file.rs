//! Data file lifecycle: creation, loading, atomic saving and merging.

use std::{
    fs,
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};

use log::debug;
use tempfile::NamedTempFile;

use super::Store;
use crate::{
    error::{FileSystemResultExt, Result},
    models::{Snapshot, SnapshotPatch},
};

impl Store {
    /// Opens the data file at `path`, creating its directory and an empty
    /// document when it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        let store = Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        };
        if !store.path.exists() {
            debug!("Initializing data file at {}", store.path.display());
            store.save(&Snapshot::default())?;
        }
        Ok(store)
    }

    /// Reads the whole document. Missing collections come back empty.
    pub fn load(&self) -> Result<Snapshot> {
        let text = fs::read_to_string(&self.path).fs_context(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Snapshot::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Replaces the whole document.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let _guard = self.lock_writes();
        self.write(snapshot)
    }

    /// Shallow-merges top-level keys: collections present in `patch` replace
    /// the stored ones, the rest are preserved.
    pub fn merge(&self, patch: SnapshotPatch) -> Result<Snapshot> {
        self.update(|snapshot| {
            snapshot.apply(patch);
            Ok(snapshot.clone())
        })
    }

    /// Loads, mutates and saves the document in one step while holding the
    /// write lock. Nothing is written when `mutate` fails.
    pub(crate) fn update<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Snapshot) -> Result<T>,
    {
        let _guard = self.lock_writes();
        let mut snapshot = self.load()?;
        let output = mutate(&mut snapshot)?;
        self.write(&snapshot)?;
        Ok(output)
    }

    /// Writes through a fresh temporary file in the same directory, then
    /// persists it over the data file. Callers hold the write lock.
    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).fs_context(dir)?;
        tmp.write_all(json.as_bytes()).fs_context(tmp.path())?;
        tmp.as_file().sync_all().fs_context(tmp.path())?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .fs_context(&self.path)?;

        debug!(
            "Saved {} plants, {} profiles, {} categories to {}",
            snapshot.plants.len(),
            snapshot.profiles.len(),
            snapshot.categories.len(),
            self.path.display()
        );
        Ok(())
    }
}
