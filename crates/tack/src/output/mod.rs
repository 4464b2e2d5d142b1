//! Output formatting for the board CLI.
//!
//! This module renders the grouped board, ticket details, and user listings
//! in both human-readable text and JSON for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, icons)
//! - [`json`]: JSON serialization for programmatic output

pub mod color;
mod json;

use std::env;
use std::io::{self, Write};

use crate::board::{Board, Column};
use crate::domain::{priority_label, Grouping, SortOrder, Ticket, User};

pub use color::{error, info, success, warning};

use color::{
    bold, colored_status_icon, colorize_id, colorize_priority_label, colorize_tags, column_icon,
    dimmed,
};
use json::{print_board_json, print_ticket_details_json, print_users_json};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for output formatting.
///
/// Holds the settings that control rendering: content width for wrapping,
/// ASCII-only icons, and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `TACK_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `TACK_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `TACK_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = match env::var("TACK_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "TACK_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match env::var("TACK_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "TACK_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR (https://no-color.org/); TACK_COLOR gives
        // explicit control.
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("TACK_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Which columns to collapse down to their header line.
#[derive(Debug, Clone, Default)]
pub struct CollapseSpec {
    /// Collapse every column.
    pub all: bool,
    /// Collapse the named columns (matched case-insensitively).
    pub columns: Vec<String>,
}

impl CollapseSpec {
    /// Returns `true` if the named column should be collapsed.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.all || self.columns.iter().any(|c| c.eq_ignore_ascii_case(key))
    }
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print the grouped board in the specified format.
pub fn print_board(
    board: &Board,
    grouping: Grouping,
    sort: SortOrder,
    collapse: &CollapseSpec,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_board_text(&mut handle, board, grouping, collapse, &config),
        OutputMode::Json => print_board_json(&mut handle, board, grouping, sort),
    }
}

/// Print a single ticket with full details (for the show command).
pub fn print_ticket_details(ticket: &Ticket, assignee: &str, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_ticket_details_text(&mut handle, ticket, assignee, &config),
        OutputMode::Json => print_ticket_details_json(&mut handle, ticket, assignee),
    }
}

/// Print the user list with assigned-ticket counts.
pub fn print_users(users: &[(User, usize)], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_users_text(&mut handle, users, &config),
        OutputMode::Json => print_users_json(&mut handle, users),
    }
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_board_text<W: Write>(
    w: &mut W,
    board: &Board,
    grouping: Grouping,
    collapse: &CollapseSpec,
    config: &OutputConfig,
) -> io::Result<()> {
    if board.is_empty() {
        writeln!(w, "No tickets to display.")?;
        return Ok(());
    }

    let content_width = get_terminal_width().min(config.max_width);

    for (i, column) in board.columns().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        print_column_header(w, column, grouping, config)?;

        if collapse.matches(&column.key) {
            continue;
        }
        for ticket in &column.tickets {
            print_card(w, ticket, content_width, config)?;
        }
    }

    Ok(())
}

fn print_column_header<W: Write>(
    w: &mut W,
    column: &Column,
    grouping: Grouping,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} {}",
        column_icon(grouping, &column.key, config),
        bold(&column.key, config),
        dimmed(&format!("({})", column.len()), config)
    )
}

/// Print one ticket card: the ID/status/title line, then a detail line with
/// the priority label and any tags.
fn print_card<W: Write>(
    w: &mut W,
    ticket: &Ticket,
    width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    let id = colorize_id(ticket.id.as_str(), config);
    let icon = colored_status_icon(ticket.status, config);

    let mut title_lines = wrap_text(&ticket.title, width.saturating_sub(4)).into_iter();
    writeln!(w, "  {} {} {}", id, icon, title_lines.next().unwrap_or_default())?;
    for line in title_lines {
        writeln!(w, "    {line}")?;
    }

    let mut detail = colorize_priority_label(priority_label(ticket.priority), config);
    if !ticket.tags.is_empty() {
        detail.push_str("  ");
        detail.push_str(&colorize_tags(&ticket.tags, config));
    }
    writeln!(w, "    {detail}")?;

    Ok(())
}

fn print_ticket_details_text<W: Write>(
    w: &mut W,
    ticket: &Ticket,
    assignee: &str,
    config: &OutputConfig,
) -> io::Result<()> {
    let content_width = get_terminal_width().min(config.max_width);

    // Header: status icon, ID, and title
    writeln!(
        w,
        "{} {}: {}",
        colored_status_icon(ticket.status, config),
        colorize_id(ticket.id.as_str(), config),
        ticket.title
    )?;

    writeln!(
        w,
        "{}  {}    {}  {}",
        dimmed("Status:", config),
        ticket.status,
        dimmed("Priority:", config),
        colorize_priority_label(priority_label(ticket.priority), config)
    )?;

    writeln!(w, "{} {}", dimmed("Assignee:", config), assignee)?;

    if !ticket.tags.is_empty() {
        writeln!(
            w,
            "{} {}",
            dimmed("Tags:", config),
            colorize_tags(&ticket.tags, config)
        )?;
    }

    // Long titles get a wrapped repeat below the metadata for readability.
    if ticket.title.len() > content_width {
        writeln!(w)?;
        for line in wrap_text(&ticket.title, content_width.saturating_sub(2)) {
            writeln!(w, "  {line}")?;
        }
    }

    Ok(())
}

fn print_users_text<W: Write>(
    w: &mut W,
    users: &[(User, usize)],
    config: &OutputConfig,
) -> io::Result<()> {
    if users.is_empty() {
        writeln!(w, "No users found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} user(s):", users.len())?;
    writeln!(w)?;

    for (user, count) in users {
        writeln!(
            w,
            "{}  {}  {}",
            colorize_id(&user.id, config),
            user.name,
            dimmed(&format!("({count} ticket(s))"), config)
        )?;
    }

    Ok(())
}

/// Wrap text to fit within a given width, preserving existing line breaks.
/// Uses textwrap to handle edge cases like long words (URLs, file paths).
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width)
                    .into_iter()
                    .map(|s| s.into_owned())
                    .collect()
            }
        })
        .collect()
}
