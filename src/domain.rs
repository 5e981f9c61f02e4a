pub mod library;
pub mod video;
