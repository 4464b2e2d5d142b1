//! Property tests for the grouping/sorting core.
//!
//! The board pipeline is a pure function, which makes it a good target for
//! randomized checking: partition exhaustiveness, determinism, sort
//! correctness, and tie stability must hold for arbitrary ticket lists,
//! including priorities outside the meaningful range and dangling user
//! references.

use proptest::prelude::*;

use tack::board::{group, group_and_sort, sort};
use tack::domain::{Grouping, SortOrder, Ticket, TicketId, TicketStatus, User};

fn status_strategy() -> impl Strategy<Value = TicketStatus> {
    prop_oneof![
        Just(TicketStatus::Backlog),
        Just(TicketStatus::Todo),
        Just(TicketStatus::InProgress),
        Just(TicketStatus::Done),
        Just(TicketStatus::Cancelled),
        Just(TicketStatus::Unknown),
    ]
}

fn ticket_strategy() -> impl Strategy<Value = Ticket> {
    (
        0u32..500,
        "[A-Za-z ]{0,16}",
        status_strategy(),
        // Includes out-of-range priorities on purpose.
        0u8..=7,
        prop_oneof![
            Just(None),
            Just(Some("u1".to_string())),
            Just(Some("u2".to_string())),
            Just(Some("dangling".to_string())),
        ],
    )
        .prop_map(|(id, title, status, priority, user_id)| Ticket {
            id: TicketId::new(format!("CAM-{id}")),
            title,
            status,
            priority,
            user_id,
            tags: vec![],
        })
}

fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
        },
        User {
            id: "u2".to_string(),
            name: "Bob".to_string(),
        },
    ]
}

fn grouping_strategy() -> impl Strategy<Value = Grouping> {
    prop_oneof![
        Just(Grouping::Status),
        Just(Grouping::User),
        Just(Grouping::Priority),
    ]
}

fn sort_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::Priority),
        Just(SortOrder::Title),
        Just(SortOrder::Unsorted),
    ]
}

/// Multiset fingerprint of a ticket list, independent of order.
fn fingerprint(tickets: impl Iterator<Item = Ticket>) -> Vec<String> {
    let mut keys: Vec<String> = tickets
        .map(|t| serde_json::to_string(&t).unwrap())
        .collect();
    keys.sort();
    keys
}

proptest! {
    #[test]
    fn partition_is_exhaustive_and_disjoint(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
    ) {
        let board = group(&tickets, grouping, &users());

        let grouped = fingerprint(board.columns().flat_map(|c| c.tickets.iter().cloned()));
        let input = fingerprint(tickets.iter().cloned());
        prop_assert_eq!(grouped, input);
    }

    #[test]
    fn pipeline_is_idempotent(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
        order in sort_strategy(),
    ) {
        let first = group_and_sort(&tickets, grouping, order, &users());
        let second = group_and_sort(&tickets, grouping, order, &users());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn priority_sort_is_non_increasing(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
    ) {
        let board = group_and_sort(&tickets, grouping, SortOrder::Priority, &users());

        for column in board.columns() {
            for pair in column.tickets.windows(2) {
                prop_assert!(
                    pair[0].priority >= pair[1].priority,
                    "priorities must not increase within a column"
                );
            }
        }
    }

    #[test]
    fn title_sort_is_non_decreasing(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
    ) {
        let board = group_and_sort(&tickets, grouping, SortOrder::Title, &users());

        for column in board.columns() {
            for pair in column.tickets.windows(2) {
                prop_assert!(
                    pair[0].title.to_lowercase() <= pair[1].title.to_lowercase(),
                    "titles must not decrease within a column"
                );
            }
        }
    }

    #[test]
    fn priority_ties_keep_grouped_order(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
    ) {
        let grouped = group(&tickets, grouping, &users());
        let sorted = sort(&grouped, SortOrder::Priority);

        for column in grouped.columns() {
            let sorted_column = sorted.column(&column.key).unwrap();
            for priority in 0u8..=7 {
                let before: Vec<&TicketId> = column
                    .tickets
                    .iter()
                    .filter(|t| t.priority == priority)
                    .map(|t| &t.id)
                    .collect();
                let after: Vec<&TicketId> = sorted_column
                    .tickets
                    .iter()
                    .filter(|t| t.priority == priority)
                    .map(|t| &t.id)
                    .collect();
                prop_assert_eq!(before, after, "equal keys must keep input order");
            }
        }
    }

    #[test]
    fn unsorted_is_identity_on_grouped_board(
        tickets in proptest::collection::vec(ticket_strategy(), 0..40),
        grouping in grouping_strategy(),
    ) {
        let grouped = group(&tickets, grouping, &users());
        let passthrough = sort(&grouped, SortOrder::Unsorted);
        prop_assert_eq!(grouped, passthrough);
    }
}
