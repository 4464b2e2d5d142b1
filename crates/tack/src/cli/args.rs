//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Args;
use std::path::PathBuf;

use super::types::{GroupingArg, SortArg};
use super::validators::{validate_endpoint, validate_ticket_id};

/// Where the board feed comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Feed endpoint URL
    ///
    /// Defaults to the `TACK_ENDPOINT` environment variable, then the
    /// built-in board API endpoint.
    #[arg(long, value_parser = validate_endpoint)]
    pub endpoint: Option<String>,

    /// Read the feed from a saved document instead of fetching it
    ///
    /// Use `tack fetch` to save a document for offline viewing.
    #[arg(long, value_name = "PATH", conflicts_with = "endpoint")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `board` command
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Attribute used to partition tickets into columns
    #[arg(long = "group-by", value_enum, default_value_t = GroupingArg::Status)]
    pub group_by: GroupingArg,

    /// Ordering applied to tickets within each column
    #[arg(long = "sort-by", value_enum, default_value_t = SortArg::Priority)]
    pub sort_by: SortArg,

    /// Collapse the named column to its header line (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub collapse: Vec<String>,

    /// Collapse every column to its header line
    #[arg(long)]
    pub collapsed: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `show` command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Ticket ID to display
    #[arg(value_parser = validate_ticket_id)]
    pub ticket_id: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `users` command
#[derive(Args, Debug, Clone, Default)]
pub struct UsersArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `fetch` command
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Path to save the feed document to
    #[arg(short, long, default_value = "board.json")]
    pub output: PathBuf,

    /// Feed endpoint URL
    #[arg(long, value_parser = validate_endpoint)]
    pub endpoint: Option<String>,
}
