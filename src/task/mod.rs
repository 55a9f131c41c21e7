//! Task management for Taskdeck.
//!
//! This module implements the task catalogue: creating, updating, toggling,
//! and deleting to-do records, and answering the queries a task front end
//! needs (status filtering, free-text search, priority and tag lookup,
//! display sorting). Completion timestamps are kept consistent with the
//! completion flag across every mutation path. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
