//! Query vocabulary: status filters and display sort orders.
//!
//! The boundary layer receives these as free-form query-string values.
//! Parsing is deliberately permissive: unrecognized values mean "no filter"
//! or "default order", never an error, because callers routinely omit or
//! misspell the parameters.

use super::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion-status filter for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Completed tasks only.
    Completed,
    /// Incomplete tasks only.
    Pending,
    /// Incomplete tasks whose due date has passed.
    Overdue,
}

impl StatusFilter {
    /// Parses a query-string value, treating anything unrecognized as
    /// "no filter".
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    /// Returns the canonical query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

/// Display sort order for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Title, ascending lexicographic.
    Title,
    /// Priority descending, title ascending as tie-break.
    Priority,
    /// Due date ascending; tasks without a due date sort last.
    DueDate,
    /// Creation time descending (newest first). The default order.
    #[default]
    Created,
}

impl SortKey {
    /// Parses a query-string value, falling back to the default order for
    /// anything unrecognized.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "priority" => Self::Priority,
            "duedate" => Self::DueDate,
            _ => Self::Created,
        }
    }

    /// Returns the canonical query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Priority => "priority",
            Self::DueDate => "duedate",
            Self::Created => "created",
        }
    }
}

/// Sorts tasks in place for display under the given sort order.
///
/// The sort is stable, so ties keep the repository's newest-first order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Title => tasks.sort_by(|a, b| a.title().as_str().cmp(b.title().as_str())),
        SortKey::Priority => tasks.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.title().as_str().cmp(b.title().as_str()))
        }),
        SortKey::DueDate => tasks.sort_by(|a, b| due_date_or_max(a).cmp(&due_date_or_max(b))),
        SortKey::Created => tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
    }
}

/// Maps an absent due date to the latest representable instant so it sorts
/// after every concrete date.
fn due_date_or_max(task: &Task) -> DateTime<Utc> {
    task.due_date().unwrap_or(DateTime::<Utc>::MAX_UTC)
}
