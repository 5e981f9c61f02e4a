use crate::errors::AppError;
use crate::store::DEFAULT_DATA_FILE;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "youtube-manager",
    version,
    about = "Keep a list of favourite YouTube videos"
)]
pub struct Cli {
    /// File the video list is stored in
    #[arg(long, env = "YOUTUBE_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log filter (warn, debug, youtube_manager=trace, ...)
    #[arg(long, env = "YOUTUBE_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::List),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}
