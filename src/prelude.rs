pub use crate::cli::{
    command::{self, Cli, MenuChoice},
    console::Console,
    run::{Controller, SessionState, run_app},
};
pub use crate::domain::{library::Library, video::Video};
pub use crate::errors::AppError;
pub use crate::store::{self, JsonStore, MemStore, VideoStore};
