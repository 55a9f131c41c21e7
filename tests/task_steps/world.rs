//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub pending_request: Option<CreateTaskRequest>,
    pub last_created_id: Option<TaskId>,
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
    pub last_listing: Option<Vec<Task>>,
}

impl TaskWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            pending_request: None,
            last_created_id: None,
            last_create_result: None,
            last_listing: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
