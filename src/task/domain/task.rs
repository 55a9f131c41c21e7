//! Task aggregate root and mutation parameter objects.

use super::{TaskId, TaskPriority, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Serializes with camelCase field names, matching the JSON contract the
/// task front end consumes. The overdue flag is derived at read time via
/// [`Task::is_overdue`] and never stored or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    priority: TaskPriority,
    tags: Vec<String>,
}

/// Parameter object describing a task to be created.
///
/// Identity and creation bookkeeping are assigned by [`Task::create`]; a
/// caller-supplied id is honoured only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Caller-supplied identifier, if any. `None` requests a fresh id.
    pub id: Option<TaskId>,
    /// Validated task title.
    pub title: TaskTitle,
    /// Free-text description. Stored as given.
    pub description: String,
    /// Initial completion flag.
    pub is_completed: bool,
    /// Caller-supplied completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Priority level.
    pub priority: TaskPriority,
    /// Free-text labels in display order.
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with the given title and default remaining fields.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            id: None,
            title,
            description: String::new(),
            is_completed: false,
            completed_at: None,
            due_date: None,
            priority: TaskPriority::Medium,
            tags: Vec::new(),
        }
    }
}

/// Parameter object replacing every mutable task field.
///
/// An update is a full replace of the mutable fields; `id` and `created_at`
/// are never touched. The completion timestamp is not part of the patch: it
/// is derived from the completion flag transition when the patch is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: TaskTitle,
    /// Replacement description.
    pub description: String,
    /// Replacement completion flag.
    pub is_completed: bool,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement priority.
    pub priority: TaskPriority,
    /// Replacement tags.
    pub tags: Vec<String>,
}

impl Task {
    /// Creates a task from a draft, stamping identity and creation time.
    ///
    /// A fresh id is assigned unless the draft carries one. `created_at` is
    /// always the current clock time, regardless of caller input. A draft
    /// that is already completed without a completion timestamp is stamped
    /// with one, keeping the completion invariant from the first moment the
    /// task exists.
    #[must_use]
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Self {
        let now = clock.utc();
        let completed_at = match (draft.is_completed, draft.completed_at) {
            (true, None) => Some(now),
            (true, existing @ Some(_)) => existing,
            (false, _) => None,
        };

        Self {
            id: draft.id.unwrap_or_default(),
            title: draft.title,
            description: draft.description,
            is_completed: draft.is_completed,
            created_at: now,
            completed_at,
            due_date: draft.due_date,
            priority: draft.priority,
            tags: draft.tags,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the tags in display order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns whether the task is overdue at the current clock time.
    ///
    /// A task is overdue when it is incomplete and its due date lies
    /// strictly in the past. Tasks without a due date are never overdue.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        !self.is_completed && self.due_date.is_some_and(|due| due < clock.utc())
    }

    /// Returns whether the term appears in the title, description, or any
    /// tag, compared case-insensitively.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.as_str().to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Returns whether the task carries a tag equal to the given label
    /// under case-insensitive comparison. Exact tag match, not substring.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|candidate| candidate.to_lowercase() == needle)
    }

    /// Replaces every mutable field from the patch, in place.
    ///
    /// Identity and `created_at` are preserved. The completion timestamp
    /// follows the flag transition: flipping to completed stamps the
    /// current clock time, flipping to incomplete clears it, and an
    /// unchanged flag leaves the existing timestamp alone.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        let was_completed = self.is_completed;
        self.title = patch.title;
        self.description = patch.description;
        self.is_completed = patch.is_completed;
        self.due_date = patch.due_date;
        self.priority = patch.priority;
        self.tags = patch.tags;

        if !was_completed && self.is_completed {
            self.completed_at = Some(clock.utc());
        }
        if was_completed && !self.is_completed {
            self.completed_at = None;
        }
    }

    /// Returns a patch carrying the task's current mutable fields.
    ///
    /// Useful for read-modify-write flows such as completion toggling.
    #[must_use]
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            is_completed: self.is_completed,
            due_date: self.due_date,
            priority: self.priority,
            tags: self.tags.clone(),
        }
    }
}
