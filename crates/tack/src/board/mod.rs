//! The grouping-and-sorting core of the board.
//!
//! Two pure functions compose into the board pipeline: [`group`] partitions a
//! flat ticket list into named columns, and [`sort`] orders the tickets
//! within each column. [`group_and_sort`] is the composition the rendering
//! layer consumes. None of them perform I/O or mutate their inputs; given the
//! same inputs they always produce the same board.

mod grouping;
mod sorting;

pub use grouping::group;
pub use sorting::sort;

use serde::Serialize;

use crate::domain::{Grouping, SortOrder, Ticket, User};

/// A named column of tickets sharing a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// The grouping key: a status label, a priority label, or a resolved
    /// user display name.
    pub key: String,

    /// The tickets in this column.
    pub tickets: Vec<Ticket>,
}

impl Column {
    /// Number of tickets in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns `true` if the column holds no tickets.
    ///
    /// Columns are created lazily, so an empty column never appears in a
    /// board produced by [`group`]; this exists for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// A grouped (and possibly sorted) view of the ticket list.
///
/// Columns appear in first-seen order: the column for the first ticket in
/// the input comes first. Every input ticket appears in exactly one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Create a board from pre-built columns, preserving their order.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Iterate over the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Look up a column by its grouping key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Number of columns on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of tickets across all columns.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

/// Group tickets into columns, then sort each column.
///
/// This is the sole entry point the presentation layer calls. It is safe for
/// empty ticket lists (an empty board) and for user lists that do not cover
/// every ticket's assignee (an "Unknown User" column).
#[must_use]
pub fn group_and_sort(
    tickets: &[Ticket],
    grouping: Grouping,
    order: SortOrder,
    users: &[User],
) -> Board {
    sort(&group(tickets, grouping, users), order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TicketId, TicketStatus};

    fn ticket(id: u32, title: &str, status: TicketStatus, priority: u8, user: &str) -> Ticket {
        Ticket {
            id: TicketId::new(format!("CAM-{id}")),
            title: title.to_string(),
            status,
            priority,
            user_id: Some(user.to_string()),
            tags: vec![],
        }
    }

    fn alice() -> User {
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
        }
    }

    // Scenario: two Todo tickets, grouped by status, sorted by priority.
    #[test]
    fn test_status_grouping_with_priority_sort() {
        let tickets = vec![
            ticket(1, "B", TicketStatus::Todo, 2, "u1"),
            ticket(2, "A", TicketStatus::Todo, 4, "u1"),
        ];

        let board = group_and_sort(&tickets, Grouping::Status, SortOrder::Priority, &[alice()]);

        assert_eq!(board.len(), 1);
        let todo = board.column("Todo").unwrap();
        assert_eq!(todo.tickets[0].id, TicketId::new("CAM-2"));
        assert_eq!(todo.tickets[1].id, TicketId::new("CAM-1"));
    }

    // Scenario: same tickets, grouped by user, sorted by title.
    #[test]
    fn test_user_grouping_with_title_sort() {
        let tickets = vec![
            ticket(1, "B", TicketStatus::Todo, 2, "u1"),
            ticket(2, "A", TicketStatus::Todo, 4, "u1"),
        ];

        let board = group_and_sort(&tickets, Grouping::User, SortOrder::Title, &[alice()]);

        assert_eq!(board.len(), 1);
        let alice_col = board.column("Alice").unwrap();
        assert_eq!(alice_col.tickets[0].title, "A");
        assert_eq!(alice_col.tickets[1].title, "B");
    }

    // Scenario: empty input produces an empty board for every selection.
    #[test]
    fn test_empty_tickets_produce_empty_board() {
        for grouping in [Grouping::Status, Grouping::User, Grouping::Priority] {
            for order in [SortOrder::Priority, SortOrder::Title, SortOrder::Unsorted] {
                let board = group_and_sort(&[], grouping, order, &[alice()]);
                assert!(board.is_empty());
                assert_eq!(board.ticket_count(), 0);
            }
        }
    }

    // Scenario: a dangling user reference lands in the sentinel column.
    #[test]
    fn test_dangling_user_reference_uses_sentinel_column() {
        let tickets = vec![ticket(1, "Orphan", TicketStatus::Backlog, 1, "u9")];

        let board = group_and_sort(&tickets, Grouping::User, SortOrder::Priority, &[alice()]);

        let unknown = board.column("Unknown User").unwrap();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown.tickets[0].title, "Orphan");
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let tickets = vec![
            ticket(1, "Gamma", TicketStatus::Todo, 2, "u1"),
            ticket(2, "Alpha", TicketStatus::Backlog, 4, "u2"),
            ticket(3, "Beta", TicketStatus::Todo, 4, "u1"),
        ];
        let users = vec![alice()];

        let first = group_and_sort(&tickets, Grouping::Status, SortOrder::Priority, &users);
        let second = group_and_sort(&tickets, Grouping::Status, SortOrder::Priority, &users);
        assert_eq!(first, second);
    }

    #[test]
    fn test_board_lookup_and_counts() {
        let tickets = vec![
            ticket(1, "a", TicketStatus::Todo, 1, "u1"),
            ticket(2, "b", TicketStatus::Done, 2, "u1"),
            ticket(3, "c", TicketStatus::Todo, 3, "u1"),
        ];

        let board = group(&tickets, Grouping::Status, &[]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.ticket_count(), 3);
        assert_eq!(board.column("Todo").unwrap().len(), 2);
        assert_eq!(board.column("Done").unwrap().len(), 1);
        assert!(board.column("Backlog").is_none());
    }
}
