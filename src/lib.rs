//! Taskdeck: to-do list management core.
//!
//! This crate provides the domain logic for a task management application:
//! task records with priorities, tags, due dates, and completion tracking,
//! plus the query semantics (filtering, search, sorting) an HTTP boundary
//! layer exposes to a front end.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task records, repository port, and the task service

pub mod task;
