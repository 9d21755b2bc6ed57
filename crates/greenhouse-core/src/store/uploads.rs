//! Photo storage on the local file system.
//!
//! Uploaded blobs are kept in a flat directory next to the data file. They
//! are named by arrival time plus a random suffix, so the original file name
//! only contributes its extension.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FileSystemResultExt, Result, TrackerError};

/// Maximum number of files accepted in one upload.
pub const MAX_UPLOAD_BATCH: usize = 10;

/// URL prefix under which stored files are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads/";

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file received from a client, before it is stored.
#[derive(Debug, Clone, Default)]
pub struct IncomingFile {
    /// Name the client gave the file, if any
    pub original_name: Option<String>,
    /// Content type the client declared, if any
    pub content_type: Option<String>,
    /// Raw contents
    pub bytes: Vec<u8>,
}

/// Description of a stored file, as reported back to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub url: String,
    pub mimetype: String,
    pub size: u64,
}

/// A stored file read back for serving.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub bytes: Vec<u8>,
    pub mimetype: String,
}

/// Handle on the upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Opens the upload directory, creating it if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).fs_context(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores a batch of files and describes each one.
    pub fn save(&self, files: Vec<IncomingFile>) -> Result<Vec<UploadedFile>> {
        if files.len() > MAX_UPLOAD_BATCH {
            return Err(TrackerError::invalid_input("photos").with_reason(format!(
                "at most {MAX_UPLOAD_BATCH} files per upload, got {}",
                files.len()
            )));
        }

        let mut rng = rand::thread_rng();
        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            let extension = file
                .original_name
                .as_deref()
                .map(lowercase_extension)
                .unwrap_or_default();
            let filename = format!(
                "{}-{}{}",
                Timestamp::now().as_millisecond(),
                rng.gen_range(0..1_000_000_000u32),
                extension
            );

            let path = self.dir.join(&filename);
            fs::write(&path, &file.bytes).fs_context(&path)?;
            debug!("Stored upload {} ({} bytes)", filename, file.bytes.len());

            let mimetype = file
                .content_type
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| guess_mime(&filename));

            stored.push(UploadedFile {
                url: format!("{UPLOAD_URL_PREFIX}{filename}"),
                filename,
                mimetype,
                size: file.bytes.len() as u64,
            });
        }

        info!("Stored {} uploaded file(s)", stored.len());
        Ok(stored)
    }

    /// Reads a stored file for serving. Returns `None` if it does not exist.
    pub fn open_file(&self, filename: &str) -> Result<Option<StoredFile>> {
        validate_filename(filename)?;

        let path = self.dir.join(filename);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(StoredFile {
                bytes,
                mimetype: guess_mime(filename),
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::FileSystem { path, source: e }),
        }
    }
}

/// `.JPG` becomes `.jpg`; names without an extension yield an empty string.
fn lowercase_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

fn guess_mime(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

fn validate_filename(filename: &str) -> Result<()> {
    let invalid = filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..");
    if invalid {
        return Err(TrackerError::invalid_input("filename").with_reason("not a stored file name"));
    }
    Ok(())
}
