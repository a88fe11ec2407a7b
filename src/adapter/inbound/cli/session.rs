//! Interactive session: the top-level menu loop.
//!
//! The session owns the store for its whole lifetime. It stays `Running`
//! until the user picks Exit or input ends, and every user mistake is shown
//! as a banner rather than returned as an error.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::application::ConfigurationStore;
use crate::domain::Configuration;
use crate::error::Result;

use super::input::{Choice, LineReader};
use super::output::{Notice, Output};
use super::wizard;

/// Title shown above the top-level menu.
pub const TITLE: &str = "Tesla Vehicle Configurator";

const DELETE_PROMPT: &str = "Enter the full description of the configuration to delete: ";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Configure,
    View,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Entries in menu order; entry `i` answers to `i + 1`.
    pub const ALL: [Self; 4] = [Self::Configure, Self::View, Self::Delete, Self::Exit];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Configure => "Configure a New Tesla",
            Self::View => "View Saved Configurations",
            Self::Delete => "Delete a Saved Configuration",
            Self::Exit => "Exit",
        }
    }

    /// Map an answer onto a menu entry. Anything outside 1-4 is `None`.
    #[must_use]
    pub fn from_choice(choice: &Choice) -> Option<Self> {
        match choice.number()? {
            1 => Some(Self::Configure),
            2 => Some(Self::View),
            3 => Some(Self::Delete),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Lifecycle of a session. `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Exited,
}

/// One user's interactive session over an input and an output stream.
#[derive(Debug)]
pub struct Session<R, W> {
    input: LineReader<R>,
    output: Output<W>,
    store: ConfigurationStore,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty store.
    pub fn new(input: R, output: Output<W>) -> Self {
        Self {
            input: LineReader::new(input),
            output,
            store: ConfigurationStore::new(),
            state: SessionState::Running,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn store(&self) -> &ConfigurationStore {
        &self.store
    }

    /// Tear the session down into its store and output writer.
    pub fn into_parts(self) -> (ConfigurationStore, W) {
        (self.store, self.output.into_inner())
    }

    /// Drive the menu until the session exits.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        while self.step()? == SessionState::Running {}
        info!(saved = self.store.len(), "session ended");
        Ok(())
    }

    /// Present the menu once and handle a single answer.
    pub fn step(&mut self) -> Result<SessionState> {
        if self.state == SessionState::Exited {
            return Ok(self.state);
        }

        let labels = MenuChoice::ALL.map(MenuChoice::label);
        self.output.menu(TITLE, &labels)?;

        let Some(choice) = self.input.read_choice()? else {
            debug!("input closed at menu");
            self.state = SessionState::Exited;
            return Ok(self.state);
        };

        match MenuChoice::from_choice(&choice) {
            Some(MenuChoice::Configure) => self.configure()?,
            Some(MenuChoice::View) => self.view()?,
            Some(MenuChoice::Delete) => self.delete()?,
            Some(MenuChoice::Exit) => {
                self.output.notice(Notice::Exiting)?;
                self.state = SessionState::Exited;
            }
            None => {
                debug!(input = ?choice, "invalid menu choice");
                self.output.notice(Notice::InvalidChoice)?;
            }
        }

        Ok(self.state)
    }

    /// Run the wizard and save the result.
    fn configure(&mut self) -> Result<()> {
        let Some(build) = wizard::run(&mut self.input, &mut self.output)? else {
            debug!("input closed during configuration; nothing saved");
            self.state = SessionState::Exited;
            return Ok(());
        };

        let config = Configuration::from(build);
        self.output.notice(Notice::Saved)?;
        self.output.summary(&config)?;
        info!(
            description = config.description(),
            price = %config.price(),
            "configuration saved"
        );
        self.store.insert(config);
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let sorted = self.store.list_sorted_by_price();
        if sorted.is_empty() {
            return self.output.notice(Notice::NoneSaved);
        }
        self.output.listing(&sorted)
    }

    fn delete(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.output.notice(Notice::NothingToDelete);
        }

        self.output.ask(DELETE_PROMPT)?;
        let Some(description) = self.input.read_line()? else {
            debug!("input closed during delete");
            self.state = SessionState::Exited;
            return Ok(());
        };

        if self.store.delete_by_description(&description) {
            info!(description = %description, "configuration deleted");
            self.output.notice(Notice::Deleted)
        } else {
            debug!(description = %description, "no configuration matched");
            self.output.notice(Notice::NotFound)
        }
    }
}
