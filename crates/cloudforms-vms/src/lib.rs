//! Virtual-server manager and data models for the Cloudforms REST API.
//!
//! Provides typed structures and an asynchronous resource manager for the
//! `/vms` collection (virtual machines and cloud instances).

#![deny(missing_docs)]

pub mod manager;
pub mod models;

pub use manager::VsManager;
pub use models::{TaskHandle, Vm};

/// Convenient result alias that reuses the shared Cloudforms error type.
pub type Result<T> = cloudforms_core::Result<T>;
