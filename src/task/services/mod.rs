//! Application services for task management.

mod catalog;

pub use catalog::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
