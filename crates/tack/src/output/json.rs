//! JSON output for programmatic use.

use serde_json::json;
use std::io::{self, Write};

use crate::board::Board;
use crate::domain::{priority_label, Grouping, SortOrder, Ticket, User};

/// Serialize a value as pretty JSON and write it followed by a newline.
fn write_json<W: Write>(w: &mut W, value: &serde_json::Value) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{text}")
}

/// Print a grouped board with its active selections.
pub(super) fn print_board_json<W: Write>(
    w: &mut W,
    board: &Board,
    grouping: Grouping,
    sort: SortOrder,
) -> io::Result<()> {
    let columns: Vec<serde_json::Value> = board
        .columns()
        .map(|c| {
            json!({
                "key": c.key,
                "count": c.len(),
                "tickets": c.tickets,
            })
        })
        .collect();

    write_json(
        w,
        &json!({
            "grouping": grouping.to_string(),
            "sort": sort.to_string(),
            "columns": columns,
        }),
    )
}

/// Print a single ticket with its resolved assignee.
pub(super) fn print_ticket_details_json<W: Write>(
    w: &mut W,
    ticket: &Ticket,
    assignee: &str,
) -> io::Result<()> {
    write_json(
        w,
        &json!({
            "ticket": ticket,
            "priorityLabel": priority_label(ticket.priority),
            "assignee": assignee,
        }),
    )
}

/// Print the user list with assigned-ticket counts.
pub(super) fn print_users_json<W: Write>(
    w: &mut W,
    users: &[(User, usize)],
) -> io::Result<()> {
    let entries: Vec<serde_json::Value> = users
        .iter()
        .map(|(user, count)| {
            json!({
                "id": user.id,
                "name": user.name,
                "ticketCount": count,
            })
        })
        .collect();

    write_json(w, &json!({ "users": entries, "count": entries.len() }))
}
