//! Task manager and data models for the Cloudforms REST API.
//!
//! Action-triggering calls in the other collections hand back task
//! references; this crate looks those tasks up through the `/tasks`
//! collection.

#![deny(missing_docs)]

pub mod manager;
pub mod models;

pub use manager::TasksManager;
pub use models::Task;

/// Convenient result alias that reuses the shared Cloudforms error type.
pub type Result<T> = cloudforms_core::Result<T>;
