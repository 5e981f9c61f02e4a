pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemStore;

use crate::domain::video::Video;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "youtube.txt";

/// Persistence boundary for the video list. `save` always writes the
/// complete list.
pub trait VideoStore {
    fn load(&self) -> Result<Vec<Video>, AppError>;

    fn save(&self, videos: &[Video]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
