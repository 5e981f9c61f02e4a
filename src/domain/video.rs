use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookmarked video. It has no id; a video is addressed by its
/// position in the [`Library`](super::library::Library).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub name: String,
    pub time: String,
}

impl Video {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Video {
            name: name.into(),
            time: time.into(),
        }
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Duration: {}", self.name, self.time)
    }
}
