use crate::{
    cli::{
        command::{Cli, MenuChoice},
        console::Console,
    },
    domain::{library::Library, video::Video},
    errors::AppError,
    store::{JsonStore, VideoStore},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub const SEPARATOR_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

/// Drives the menu loop over an owned [`Library`], saving through `store`
/// after every change.
pub struct Controller<S, R, W> {
    library: Library,
    store: S,
    console: Console<R, W>,
}

impl<S: VideoStore, R: BufRead, W: Write> Controller<S, R, W> {
    pub fn new(store: S, console: Console<R, W>) -> Result<Self, AppError> {
        let library = Library::from_videos(store.load()?);
        info!(count = library.len(), "video list loaded");

        Ok(Self {
            library,
            store,
            console,
        })
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (Library, S, Console<R, W>) {
        (self.library, self.store, self.console)
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        while self.step()? == SessionState::Running {}
        debug!("session ended");
        Ok(())
    }

    /// Shows the menu once and handles a single choice.
    pub fn step(&mut self) -> Result<SessionState, AppError> {
        self.show_menu()?;

        let Some(input) = self.console.prompt("Enter your choice: ")? else {
            return Ok(SessionState::Exited);
        };

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::List) => {
                self.list_videos()?;
                Ok(SessionState::Running)
            }
            Ok(MenuChoice::Add) => self.add_video(),
            Ok(MenuChoice::Update) => self.update_video(),
            Ok(MenuChoice::Delete) => self.delete_video(),
            Ok(MenuChoice::Exit) => Ok(SessionState::Exited),
            Err(err) => {
                debug!(%err, "menu choice rejected");
                self.console.say("Invalid Choice")?;
                Ok(SessionState::Running)
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        self.console.say("\nYouTube Manager | Choose an option")?;
        self.console.say("1. List all favourite videos")?;
        self.console.say("2. Add a YouTube video")?;
        self.console.say("3. Update a YouTube video details")?;
        self.console.say("4. Delete a YouTube video")?;
        self.console.say("5. Exit the app")?;
        Ok(())
    }

    pub fn list_videos(&mut self) -> Result<(), AppError> {
        let separator = "*".repeat(SEPARATOR_WIDTH);

        self.console.say("\n")?;
        self.console.say(&separator)?;
        for (number, video) in self.library.numbered() {
            self.console.say(format_args!("{number}. {video}"))?;
        }
        self.console.say("\n")?;
        self.console.say(&separator)?;
        Ok(())
    }

    fn add_video(&mut self) -> Result<SessionState, AppError> {
        let Some(video) = self.read_video("Enter video name: ", "Enter video time: ")? else {
            return Ok(SessionState::Exited);
        };

        debug!(name = %video.name, "adding video");
        self.library.add_video(video);
        self.persist()?;
        Ok(SessionState::Running)
    }

    fn update_video(&mut self) -> Result<SessionState, AppError> {
        self.list_videos()?;

        let Some(index) = self.read_index("Enter the video number to update: ")? else {
            return Ok(SessionState::Exited);
        };
        let Some(index) = index else {
            return Ok(SessionState::Running);
        };

        if self.library.position(index).is_err() {
            debug!(index, len = self.library.len(), "update index out of range");
            self.console.say("Invalid index selected")?;
            return Ok(SessionState::Running);
        }

        let Some(video) =
            self.read_video("Enter the new video name: ", "Enter the new video time: ")?
        else {
            return Ok(SessionState::Exited);
        };

        let old = self.library.update_video(index, video)?;
        debug!(index, old = %old.name, "updated video");
        self.persist()?;
        Ok(SessionState::Running)
    }

    fn delete_video(&mut self) -> Result<SessionState, AppError> {
        self.list_videos()?;

        let Some(index) = self.read_index("Enter the video number to be deleted: ")? else {
            return Ok(SessionState::Exited);
        };
        let Some(index) = index else {
            return Ok(SessionState::Running);
        };

        match self.library.delete_video(index) {
            Ok(removed) => {
                debug!(index, name = %removed.name, "deleted video");
                self.persist()?;
                self.console
                    .say(format_args!("Video {index} is successfully deleted!"))?;
            }
            Err(err) => {
                debug!(%err, "delete index out of range");
                self.console.say("Invalid video index selected")?;
            }
        }
        Ok(SessionState::Running)
    }

    /// Outer `None` means input ended. Inner `None` means the line was not a
    /// number; the error has already been shown. Integers too large for
    /// `i64` saturate so they land in the out-of-range branch.
    fn read_index(&mut self, message: &str) -> Result<Option<Option<i64>>, AppError> {
        let Some(raw) = self.console.prompt(message)? else {
            return Ok(None);
        };

        match raw.trim().parse::<i64>() {
            Ok(index) => Ok(Some(Some(index))),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(Some(Some(i64::MAX))),
            Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(Some(Some(i64::MIN))),
            Err(err) => {
                self.console.say(AppError::from(err))?;
                Ok(Some(None))
            }
        }
    }

    fn read_video(
        &mut self,
        name_prompt: &str,
        time_prompt: &str,
    ) -> Result<Option<Video>, AppError> {
        let Some(name) = self.console.prompt(name_prompt)? else {
            return Ok(None);
        };
        let Some(time) = self.console.prompt(time_prompt)? else {
            return Ok(None);
        };
        Ok(Some(Video { name, time }))
    }

    fn persist(&self) -> Result<(), AppError> {
        self.store.save(self.library.videos())
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let store = JsonStore::new(cli.data_file);
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut controller = Controller::new(store, console)?;
    controller.run()
}
