//! Domain model for task management.
//!
//! The task domain models to-do records with completion tracking, due
//! dates, priorities, and tags, together with the query vocabulary used to
//! filter and sort them, while keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod fields;
mod ids;
mod priority;
mod query;
mod task;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use fields::TaskTitle;
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use query::{SortKey, StatusFilter, sort_tasks};
pub use task::{Task, TaskDraft, TaskPatch};
