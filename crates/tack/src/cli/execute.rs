//! Command implementations for the CLI.

use anyhow::Result;
use serde_json::json;

use super::args::{BoardArgs, FetchArgs, ShowArgs, UsersArgs};
use crate::board::group_and_sort;
use crate::domain::{Feed, Grouping, SortOrder};
use crate::error::Error;
use crate::output::{self, CollapseSpec, OutputMode};
use crate::source::{create_source, HttpSource, TicketSource};

/// Load the feed from a source, degrading to the empty feed on failure.
///
/// A board that cannot be fetched renders as the empty state instead of
/// aborting; the failure is reported through the log.
async fn load_feed_or_empty(source: &dyn TicketSource) -> Feed {
    match source.load().await {
        Ok(feed) => {
            tracing::debug!(
                tickets = feed.tickets.len(),
                users = feed.users.len(),
                "Loaded board feed"
            );
            feed
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Failed to fetch tickets");
            Feed::default()
        }
    }
}

/// Execute the `board` command: fetch, group, sort, and render.
pub async fn execute_board(args: &BoardArgs, mode: OutputMode) -> Result<()> {
    let source = create_source(args.source.file.as_deref(), args.source.endpoint.as_deref());
    let feed = load_feed_or_empty(source.as_ref()).await;

    let grouping = Grouping::from(args.group_by);
    let order = SortOrder::from(args.sort_by);
    let board = group_and_sort(&feed.tickets, grouping, order, &feed.users);

    let collapse = CollapseSpec {
        all: args.collapsed,
        columns: args.collapse.clone(),
    };
    output::print_board(&board, grouping, order, &collapse, mode)?;
    Ok(())
}

/// Execute the `show` command: print one ticket's full card.
pub async fn execute_show(args: &ShowArgs, mode: OutputMode) -> Result<()> {
    let source = create_source(args.source.file.as_deref(), args.source.endpoint.as_deref());
    let feed = source.load().await?;

    let ticket = feed
        .tickets
        .iter()
        .find(|t| t.id.as_str() == args.ticket_id)
        .ok_or_else(|| Error::TicketNotFound(args.ticket_id.clone()))?;

    let assignee = feed.assignee_name(ticket);
    output::print_ticket_details(ticket, assignee, mode)?;
    Ok(())
}

/// Execute the `users` command: list users with assigned-ticket counts.
pub async fn execute_users(args: &UsersArgs, mode: OutputMode) -> Result<()> {
    let source = create_source(args.source.file.as_deref(), args.source.endpoint.as_deref());
    let feed = source.load().await?;

    let counted: Vec<_> = feed
        .users
        .iter()
        .map(|user| {
            let count = feed
                .tickets
                .iter()
                .filter(|t| t.user_id.as_deref() == Some(user.id.as_str()))
                .count();
            (user.clone(), count)
        })
        .collect();

    output::print_users(&counted, mode)?;
    Ok(())
}

/// Execute the `fetch` command: download the feed and save it to disk.
pub async fn execute_fetch(args: &FetchArgs, mode: OutputMode) -> Result<()> {
    let source = HttpSource::from_config(args.endpoint.as_deref());
    let body = source.fetch_raw().await?;
    tokio::fs::write(&args.output, &body).await?;

    match mode {
        OutputMode::Text => {
            output::print_message(&format!(
                "Saved feed from {} to {}",
                source.endpoint(),
                args.output.display()
            ))?;
        }
        OutputMode::Json => {
            let value = json!({
                "endpoint": source.endpoint(),
                "output": args.output.display().to_string(),
                "bytes": body.len(),
            });
            output::print_message(&serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}
