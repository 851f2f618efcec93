//! Interactive menu controller for Monkey Console.
//!
//! [`MenuController`] owns the catalog service, a [`Console`], and the
//! theme. It is a two-state machine: while [`MenuState::Running`] it renders
//! the menu, reads one command, dispatches it, and waits for an
//! acknowledgement; an exit command (or end of input) moves it to
//! [`MenuState::Terminated`] and nothing more is read.

use std::io::{self, Write};

use monkey_core::error::{CatalogError, Result};
use monkey_runtime::catalog_service::{CatalogService, BLANK_NAME_MESSAGE};

use crate::console::Console;
use crate::themes::Theme;
use crate::views;

// ── MenuState / MenuCommand ───────────────────────────────────────────────────

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// A parsed menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// `1`
    ListAll,
    /// `2`
    FindByName,
    /// `3`
    Random,
    /// `4`
    About,
    /// `5`, `q`, `quit`, `exit`
    Exit,
    /// Anything else, trimmed.
    Invalid(String),
}

impl MenuCommand {
    /// Parse a raw input line; surrounding whitespace is ignored and the exit
    /// aliases are matched case-insensitively.
    pub fn parse(input: &str) -> Self {
        let choice = input.trim();
        match choice {
            "1" => MenuCommand::ListAll,
            "2" => MenuCommand::FindByName,
            "3" => MenuCommand::Random,
            "4" => MenuCommand::About,
            "5" => MenuCommand::Exit,
            other => match other.to_lowercase().as_str() {
                "q" | "quit" | "exit" => MenuCommand::Exit,
                _ => MenuCommand::Invalid(other.to_string()),
            },
        }
    }
}

// ── MenuController ────────────────────────────────────────────────────────────

/// Drives the menu loop over a [`Console`].
pub struct MenuController<C: Console> {
    service: CatalogService,
    console: C,
    theme: Theme,
    state: MenuState,
}

impl<C: Console> MenuController<C> {
    pub fn new(service: CatalogService, console: C, theme: Theme) -> Self {
        Self {
            service,
            console,
            theme,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Hand the console back once the loop is done.
    pub fn into_console(self) -> C {
        self.console
    }

    // ── Public event loop ─────────────────────────────────────────────────

    /// Show the welcome banner and run until terminated.
    ///
    /// Only console I/O failures end the loop early, as
    /// [`CatalogError::Io`]; query errors are reported on screen and the
    /// menu is shown again.
    pub async fn run(&mut self) -> Result<()> {
        self.console.clear()?;
        views::render_welcome(self.console.out(), &self.theme)?;
        tracing::info!(species = self.service.count(), "menu loop started");

        while self.state == MenuState::Running {
            self.step().await?;
        }

        tracing::info!("menu loop terminated");
        Ok(())
    }

    /// One pass of the loop: render, read, dispatch, acknowledge.
    pub async fn step(&mut self) -> Result<MenuState> {
        if self.state == MenuState::Terminated {
            return Ok(self.state);
        }

        views::render_menu(self.console.out(), &self.theme)?;

        let command = match self.console.read_line()? {
            Some(line) => MenuCommand::parse(&line),
            None => {
                tracing::debug!("end of input; treating as exit");
                MenuCommand::Exit
            }
        };
        writeln!(self.console.out())?;
        tracing::debug!(?command, "dispatching menu command");

        match command {
            MenuCommand::ListAll => self.list_all().await?,
            MenuCommand::FindByName => self.find_by_name().await?,
            MenuCommand::Random => self.random().await?,
            MenuCommand::About => {
                views::render_about(self.console.out(), &self.theme, self.service.count())?
            }
            MenuCommand::Exit => {
                self.state = MenuState::Terminated;
                self.console.clear()?;
                views::render_goodbye(self.console.out(), &self.theme)?;
                return Ok(self.state);
            }
            MenuCommand::Invalid(choice) => {
                tracing::debug!(choice, "invalid menu option");
                views::render_invalid_option(self.console.out(), &self.theme)?;
            }
        }

        views::render_continue_prompt(self.console.out())?;
        self.console.wait_for_key()?;
        self.console.clear()?;
        Ok(self.state)
    }

    // ── Actions ───────────────────────────────────────────────────────────

    async fn list_all(&mut self) -> io::Result<()> {
        match self.service.list_all().await {
            Ok(records) => views::render_list(self.console.out(), &self.theme, &records),
            Err(e) => self.report("Error loading monkeys", &e),
        }
    }

    async fn find_by_name(&mut self) -> io::Result<()> {
        views::render_search_prompt(self.console.out(), &self.theme)?;
        let name = self.console.read_line()?.unwrap_or_default();
        let name = name.trim();

        if name.is_empty() {
            return views::render_error(self.console.out(), &self.theme, BLANK_NAME_MESSAGE);
        }

        match self.service.find_by_name(name).await {
            Ok(record) => views::render_found(self.console.out(), &self.theme, &record),
            Err(CatalogError::NotFound(missing)) => {
                views::render_not_found(self.console.out(), &self.theme, &missing)
            }
            Err(CatalogError::Validation(message)) => {
                views::render_error(self.console.out(), &self.theme, &message)
            }
            Err(e) => self.report("Error searching for monkey", &e),
        }
    }

    async fn random(&mut self) -> io::Result<()> {
        views::render_random_heading(self.console.out(), &self.theme)?;
        match self.service.random().await {
            Ok(record) => views::render_random(self.console.out(), &self.theme, &record),
            Err(e) => self.report("Error getting random monkey", &e),
        }
    }

    /// Show a recovered query failure and keep going.
    fn report(&mut self, context: &str, error: &CatalogError) -> io::Result<()> {
        tracing::warn!(error = %error, "{}", context);
        views::render_error(
            self.console.out(),
            &self.theme,
            &format!("{}: {}", context, error),
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
