use super::*;

use std::cell::{Cell, RefCell};

/// Keeps the list in memory. Used by tests and benches in place of a file.
#[derive(Default)]
pub struct MemStore {
    data: RefCell<Vec<Video>>,
    saves: Cell<usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_videos(videos: Vec<Video>) -> Self {
        Self {
            data: RefCell::new(videos),
            saves: Cell::new(0),
        }
    }

    /// Snapshot of what was last saved (or seeded).
    pub fn data(&self) -> Vec<Video> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl VideoStore for MemStore {
    fn load(&self) -> Result<Vec<Video>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, videos: &[Video]) -> Result<(), AppError> {
        *self.data.borrow_mut() = videos.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
