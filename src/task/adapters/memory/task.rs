//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Records live for the process lifetime only. Each instance owns its own
/// storage; construct one per service (or per test) rather than sharing a
/// process-wide singleton.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock> {
    clock: Arc<C>,
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_seq: u64,
}

/// A stored task with its creation sequence number.
///
/// The sequence number breaks creation-timestamp ties so snapshot order is
/// deterministic.
#[derive(Debug)]
struct StoredTask {
    seq: u64,
    task: Task,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates a repository pre-populated with demo fixture tasks.
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = InMemoryTaskState::default();
        for draft in seed_drafts() {
            let task = Task::create(draft, &DefaultClock);
            let seq = state.next_seq;
            state.next_seq += 1;
            state.tasks.insert(task.id(), StoredTask { seq, task });
        }
        Self {
            clock: Arc::new(DefaultClock),
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock,
{
    /// Creates an empty repository stamping timestamps from the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
        }
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut snapshot: Vec<(u64, Task)> = state
            .tasks
            .values()
            .map(|stored| (stored.seq, stored.task.clone()))
            .collect();
        snapshot.sort_by(|(seq_a, task_a), (seq_b, task_b)| {
            task_b
                .created_at()
                .cmp(&task_a.created_at())
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(snapshot.into_iter().map(|(_, task)| task).collect())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if let Some(id) = draft.id
            && state.tasks.contains_key(&id)
        {
            return Err(TaskRepositoryError::DuplicateTask(id));
        }

        let task = Task::create(draft, &*self.clock);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.tasks.insert(
            task.id(),
            StoredTask {
                seq,
                task: task.clone(),
            },
        );
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Mutate the stored record in place so identity is preserved.
        match state.tasks.get_mut(&id) {
            Some(stored) => {
                stored.task.apply_patch(patch, &*self.clock);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.remove(&id).is_some())
    }
}

/// Demo fixture tasks mirroring the front end's sample data.
fn seed_drafts() -> Vec<TaskDraft> {
    const SEEDS: [(&str, &str, bool); 8] = [
        (
            "Research hiking trails",
            "Find and compare local hiking trails for weekend outdoor activity",
            true,
        ),
        (
            "Plan team lunch",
            "Coordinate restaurant reservations for Friday team gathering",
            true,
        ),
        (
            "Organize home office",
            "Declutter desk and reorganize filing system for better productivity",
            false,
        ),
        (
            "Book dentist appointment",
            "Schedule routine dental checkup for next month",
            false,
        ),
        (
            "Review monthly budget",
            "Analyze spending patterns and adjust budget categories as needed",
            false,
        ),
        (
            "Learn basic photography",
            "Complete online photography course to improve vacation photos",
            false,
        ),
        (
            "Update personal website",
            "Refresh portfolio and add recent project examples",
            false,
        ),
        (
            "Prepare presentation slides",
            "Create slides for upcoming community workshop on gardening",
            false,
        ),
    ];

    SEEDS
        .into_iter()
        .filter_map(|(title, description, is_completed)| {
            let title = TaskTitle::new(title).ok()?;
            let mut draft = TaskDraft::new(title);
            draft.description = description.to_owned();
            draft.is_completed = is_completed;
            Some(draft)
        })
        .collect()
}
