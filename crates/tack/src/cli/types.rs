//! CLI value enums and domain type conversions.
//!
//! This module contains the value enums used for CLI argument parsing
//! and their conversions to/from domain types.

use clap::ValueEnum;

use crate::domain::{Grouping, SortOrder};

// ============================================================================
// Value Enums
// ============================================================================

/// Grouping selection for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingArg {
    /// One column per ticket status
    #[default]
    Status,
    /// One column per assignee
    User,
    /// One column per priority label
    Priority,
}

impl std::fmt::Display for GroupingArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::User => write!(f, "user"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// Sort selection for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortArg {
    /// Priority descending (Urgent first)
    #[default]
    Priority,
    /// Title ascending
    Title,
    /// Keep tickets in feed order
    None,
}

impl std::fmt::Display for SortArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
            Self::None => write!(f, "none"),
        }
    }
}

// ============================================================================
// Domain Type Conversions
// ============================================================================

impl From<GroupingArg> for Grouping {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::Status => Grouping::Status,
            GroupingArg::User => Grouping::User,
            GroupingArg::Priority => Grouping::Priority,
        }
    }
}

impl From<Grouping> for GroupingArg {
    fn from(g: Grouping) -> Self {
        match g {
            Grouping::Status => GroupingArg::Status,
            Grouping::User => GroupingArg::User,
            Grouping::Priority => GroupingArg::Priority,
        }
    }
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Priority => SortOrder::Priority,
            SortArg::Title => SortOrder::Title,
            SortArg::None => SortOrder::Unsorted,
        }
    }
}

impl From<SortOrder> for SortArg {
    fn from(s: SortOrder) -> Self {
        match s {
            SortOrder::Priority => SortArg::Priority,
            SortOrder::Title => SortArg::Title,
            SortOrder::Unsorted => SortArg::None,
        }
    }
}
