//! Domain types for the ticket board.
//!
//! This module contains the core vocabulary of the board: tickets, users,
//! the fetched feed, and the grouping/sorting selections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest meaningful priority value (no priority).
pub const MIN_PRIORITY: u8 = 0;

/// Highest meaningful priority value (urgent).
pub const MAX_PRIORITY: u8 = 4;

/// Bucket label for tickets whose numeric priority falls outside the
/// meaningful range. The feed format does not define such values; giving
/// them an explicit bucket keeps the grouping total instead of producing an
/// undefined key.
pub const UNKNOWN_PRIORITY_LABEL: &str = "Unknown priority";

/// Bucket label for tickets whose assigned user cannot be resolved.
pub const UNKNOWN_USER_LABEL: &str = "Unknown User";

/// Resolve a numeric priority to its display label.
///
/// Priorities run from 0 (no priority) to 4 (urgent). Values outside that
/// range resolve to [`UNKNOWN_PRIORITY_LABEL`].
#[must_use]
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        4 => "Urgent",
        3 => "High",
        2 => "Medium",
        1 => "Low",
        0 => "No priority",
        _ => UNKNOWN_PRIORITY_LABEL,
    }
}

/// Unique identifier for a ticket.
///
/// The feed may carry IDs as strings or numbers; both decode here, with
/// numbers normalized to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTicketId")]
pub struct TicketId(pub String);

/// Wire representation of a ticket ID.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTicketId {
    Text(String),
    Number(i64),
}

impl From<RawTicketId> for TicketId {
    fn from(raw: RawTicketId) -> Self {
        match raw {
            RawTicketId::Text(s) => Self(s),
            RawTicketId::Number(n) => Self(n.to_string()),
        }
    }
}

impl TicketId {
    /// Create a new ticket ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Workflow status of a ticket.
///
/// Converts to and from the feed's wire strings. Statuses the feed may grow
/// that this build does not know about decode as [`TicketStatus::Unknown`]
/// rather than failing the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    /// Not yet scheduled.
    Backlog,

    /// Scheduled and ready to pick up.
    Todo,

    /// Currently being worked on.
    InProgress,

    /// Completed.
    Done,

    /// Abandoned.
    Cancelled,

    /// Any status string this build does not recognize.
    Unknown,
}

impl TicketStatus {
    /// The wire/display string for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Backlog" => Self::Backlog,
            "Todo" => Self::Todo,
            "In progress" => Self::InProgress,
            "Done" => Self::Done,
            "Cancelled" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ticket on the board.
///
/// Tickets are immutable once fetched; the board recomputes its derived
/// grouping from the fetched list rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier for the ticket.
    pub id: TicketId,

    /// Ticket title.
    pub title: String,

    /// Current workflow status.
    pub status: TicketStatus,

    /// Priority level (0 = no priority, 4 = urgent).
    pub priority: u8,

    /// Identifier of the assigned user, if any.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Free-text tags. The feed names this field `tag`.
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
}

/// A user tickets can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, referenced by [`Ticket::user_id`].
    pub id: String,

    /// Display name.
    pub name: String,
}

/// The fetched board state: all tickets and all users.
///
/// Fetched once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// All tickets on the board.
    pub tickets: Vec<Ticket>,

    /// All known users.
    pub users: Vec<User>,
}

impl Feed {
    /// Returns `true` if the feed contains no tickets and no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }

    /// Resolve a ticket's assignee to a display name.
    ///
    /// Returns [`UNKNOWN_USER_LABEL`] when the ticket is unassigned or its
    /// user ID matches no known user.
    #[must_use]
    pub fn assignee_name(&self, ticket: &Ticket) -> &str {
        ticket
            .user_id
            .as_deref()
            .and_then(|id| self.users.iter().find(|u| u.id == id))
            .map_or(UNKNOWN_USER_LABEL, |u| u.name.as_str())
    }
}

/// Attribute used to partition tickets into board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One column per ticket status.
    #[default]
    Status,

    /// One column per resolved assignee display name.
    User,

    /// One column per priority label.
    Priority,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::User => write!(f, "user"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// Ordering applied to tickets within each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Numeric priority, descending (urgent first).
    #[default]
    Priority,

    /// Title, ascending.
    Title,

    /// Leave tickets in their pre-sort (input) order.
    Unsorted,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
            Self::Unsorted => write!(f, "none"),
        }
    }
}
