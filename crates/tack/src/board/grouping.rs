//! Partitioning tickets into board columns.

use std::collections::HashMap;

use super::{Board, Column};
use crate::domain::{priority_label, Grouping, Ticket, User, UNKNOWN_USER_LABEL};

/// Partition tickets into named columns according to the grouping selection.
///
/// Column keys are:
///
/// - `Status`: the status's display string
/// - `User`: the assignee's display name, or [`UNKNOWN_USER_LABEL`] when the
///   ticket's user ID resolves to no known user
/// - `Priority`: the priority label from [`priority_label`], including its
///   explicit fallback for out-of-range values
///
/// Columns are created lazily in first-seen order, and tickets keep their
/// input order within each column. The partition is exhaustive and disjoint:
/// every input ticket lands in exactly one column. Inputs are not mutated.
#[must_use]
pub fn group(tickets: &[Ticket], grouping: Grouping, users: &[User]) -> Board {
    let names: HashMap<&str, &str> = users
        .iter()
        .map(|u| (u.id.as_str(), u.name.as_str()))
        .collect();

    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let key = match grouping {
            Grouping::Status => ticket.status.to_string(),
            Grouping::Priority => priority_label(ticket.priority).to_string(),
            Grouping::User => ticket
                .user_id
                .as_deref()
                .and_then(|id| names.get(id).copied())
                .unwrap_or(UNKNOWN_USER_LABEL)
                .to_string(),
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            columns.push(Column {
                key,
                tickets: Vec::new(),
            });
            columns.len() - 1
        });
        columns[slot].tickets.push(ticket.clone());
    }

    Board::from_columns(columns)
}
