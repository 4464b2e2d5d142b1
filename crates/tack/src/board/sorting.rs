//! Ordering tickets within board columns.

use std::cmp::Ordering;

use super::{Board, Column};
use crate::domain::{SortOrder, Ticket};

/// Order the tickets within each column according to the sort selection.
///
/// # Sort Orders
///
/// - `Priority`: numeric priority descending (urgent = 4 first, no
///   priority = 0 last)
/// - `Title`: title ascending, compared case-insensitively with the raw
///   title as tiebreaker
/// - `Unsorted`: explicit passthrough; columns keep their pre-sort order
///
/// # Stability
///
/// Both comparisons use a stable sort, so tickets with equal keys keep the
/// order they had before sorting (the input order established by grouping).
/// This keeps the rendered board deterministic across runs.
///
/// Returns a new board; the caller's board and its columns are left
/// untouched.
#[must_use]
pub fn sort(board: &Board, order: SortOrder) -> Board {
    let columns = board
        .columns()
        .map(|column| {
            let mut tickets = column.tickets.clone();
            match order {
                SortOrder::Priority => {
                    tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
                }
                SortOrder::Title => {
                    tickets.sort_by(|a, b| title_cmp(a, b));
                }
                SortOrder::Unsorted => {}
            }
            Column {
                key: column.key.clone(),
                tickets,
            }
        })
        .collect();

    Board::from_columns(columns)
}

/// Case-insensitive title comparison with the raw title as tiebreaker.
///
/// Full locale-aware collation is deliberately out of scope; this keeps
/// the ordering deterministic across platforms.
fn title_cmp(a: &Ticket, b: &Ticket) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
