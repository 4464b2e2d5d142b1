//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for tack using clap's
//! derive API. Each command has its own argument struct; running `tack`
//! without a subcommand renders the board with its default view (grouped by
//! status, sorted by priority), matching the board's initial state.
//!
//! # Commands
//!
//! - `board`: Fetch the feed and render the grouped, sorted columns
//! - `show`: Show one ticket's full card
//! - `users`: List users with assigned-ticket counts
//! - `fetch`: Save the feed document for offline viewing
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! tack board --group-by user --sort-by title
//! tack board --collapse Done --collapse Cancelled
//! tack show CAM-4
//! tack fetch --output board.json && tack board --file board.json
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{BoardArgs, FetchArgs, ShowArgs, SourceArgs, UsersArgs};

// Re-export types
pub use types::{GroupingArg, SortArg};

// Re-export validators for external use
pub use validators::{validate_endpoint, validate_ticket_id};

/// Tack - a terminal ticket board
///
/// Fetches tickets and users from the board API, groups and sorts the
/// tickets client-side, and renders them as cards within collapsible
/// columns.
#[derive(Parser, Debug)]
#[command(name = "tack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the ticket board
    ///
    /// Fetches the feed, partitions tickets into columns by the selected
    /// grouping, sorts each column, and prints the result. This is also
    /// what runs when no subcommand is given.
    Board(BoardArgs),

    /// Show detailed information about one ticket
    ///
    /// Displays the ticket's status, priority label, resolved assignee,
    /// and tags.
    Show(ShowArgs),

    /// List users with their assigned-ticket counts
    Users(UsersArgs),

    /// Download the feed and save it for offline viewing
    ///
    /// The saved document can be rendered later with `--file`.
    Fetch(FetchArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Board(args)) => execute::execute_board(args, output_mode).await,
            Some(Commands::Show(args)) => execute::execute_show(args, output_mode).await,
            Some(Commands::Users(args)) => execute::execute_users(args, output_mode).await,
            Some(Commands::Fetch(args)) => execute::execute_fetch(args, output_mode).await,
            None => execute::execute_board(&BoardArgs::default(), output_mode).await,
        }
    }
}
