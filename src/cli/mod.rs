//! Command-line interface for the `disastersafe` binary.

mod shell;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

pub use shell::{parse_input, Flow, Input, Session};

use crate::config::Config;
use crate::controller::ViewController;
use crate::logging::Verbosity;
use crate::output::OutputMode;
use crate::page::PageId;
use crate::render::Frontend;
use crate::storage::FileStore;

/// disastersafe - disaster preparedness training for Indian schools
///
/// Browse learning modules, virtual drills, the admin dashboard and
/// emergency alerts in the terminal.
#[derive(Debug, Parser)]
#[command(name = "disastersafe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output mode: auto, term, text or term-debug
    #[arg(long, global = true, value_name = "MODE")]
    pub output: Option<OutputMode>,

    /// Preference file to keep the theme choice in
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Layout width in columns
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// The command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse interactively
    Run,

    /// Print one page and exit
    Show {
        /// Page identifier (unknown identifiers show the welcome page)
        page: String,
    },

    /// Show or toggle the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// List page identifiers
    Pages,
}

/// Theme subcommands.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeCommand {
    /// Print the theme a new session would start in
    Show,
    /// Switch between light and dark and remember the choice
    Toggle,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Applies command-line overrides on top of loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when the resulting configuration is invalid.
    pub fn apply_to(&self, mut config: Config) -> crate::Result<Config> {
        if let Some(output) = self.output {
            config.display.output = output;
        }
        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(store) = &self.store {
            config.storage.preferences_path = Some(store.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Executes the parsed command line.
pub fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let config = cli.apply_to(config)?;
    let store = FileStore::new(config.preferences_path());

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let frontend = Frontend::new(config.display.output, config.display.width)
                .context("failed to build page templates")?;
            let mut session = Session::new(ViewController::new(store), frontend);
            session.run()?;
        }
        Command::Show { page } => {
            let frontend = Frontend::new(config.display.output, config.display.width)
                .context("failed to build page templates")?;
            let mut controller = ViewController::new(store);
            controller.navigate_to(&page);
            println!("{}", frontend.render(controller.state())?);
        }
        Command::Theme { action } => {
            let mut controller = ViewController::new(store);
            match action.unwrap_or(ThemeCommand::Show) {
                ThemeCommand::Show => println!("{}", controller.state().theme_mode),
                ThemeCommand::Toggle => println!("{}", controller.toggle_theme()),
            }
        }
        Command::Pages => {
            for page in PageId::ALL {
                let marker = if page.shows_navigation() { "" } else { "  (no navigation bar)" };
                println!("{:<10} {}{}", page.as_str(), page.label(), marker);
            }
        }
    }
    Ok(())
}
