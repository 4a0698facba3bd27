//! Typed models for the task collection.

use chrono::{DateTime, Utc};
use cloudforms_core::id::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Representation of an asynchronous task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Resource identifier.
    pub id: TaskId,
    /// Canonical resource URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Task name (usually the request that queued it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lifecycle state (Queued, Active, Finished).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Outcome status (Ok, Error, Warn).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Latest progress or outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Account the task runs under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    /// Record creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Record update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
    /// Attributes without a typed counterpart, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Whether the task has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.as_deref() == Some("Finished")
    }
}
