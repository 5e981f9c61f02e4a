use super::*;

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Stores the video list as a JSON array of `{"name", "time"}` objects.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where unreadable content is copied before it gets overwritten.
    pub fn backup_path(&self) -> PathBuf {
        let mut backup = OsString::from(self.path.as_os_str());
        backup.push(".corrupt");
        PathBuf::from(backup)
    }

    fn preserve_malformed(&self, data: &[u8]) {
        let backup = self.backup_path();

        match fs::write(&backup, data) {
            Ok(()) => warn!("Kept the unreadable content in '{}'", backup.display()),
            Err(err) => warn!(
                error = %err,
                "Could not keep a copy of the unreadable content in '{}'",
                backup.display()
            ),
        }
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl VideoStore for JsonStore {
    fn load(&self) -> Result<Vec<Video>, AppError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        // serde_json errors on empty input
        if String::from_utf8_lossy(&data).trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_slice::<Vec<Video>>(&data) {
            Ok(videos) => {
                debug!(path = %self.path.display(), count = videos.len(), "loaded videos");
                Ok(videos)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "The content of '{}' is not valid JSON. Starting with an empty list.",
                    self.path.display()
                );
                self.preserve_malformed(&data);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, videos: &[Video]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_videos = serde_json::to_string(videos)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_videos.as_bytes())?;

        debug!(path = %self.path.display(), count = videos.len(), "saved videos");
        Ok(())
    }
}
