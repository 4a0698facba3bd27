//! Typed models for the virtual-server collection.

use chrono::{DateTime, Utc};
use cloudforms_core::id::{TaskId, VmId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Representation of a virtual server as returned by the API.
///
/// Responses are attribute-selected (`attributes=...`) and vary by
/// provider, so everything beyond the identifier is optional and any
/// field without a typed counterpart lands in [`Vm::extra`] unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vm {
    /// Resource identifier.
    pub id: VmId,
    /// Canonical resource URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider vendor (vmware, redhat, amazon, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Normalized power state (on, off, suspended, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<String>,
    /// Power state as reported by the provider before normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_power_state: Option<String>,
    /// Whether the record is a template rather than an instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,

    /// Provider-assigned unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid_ems: Option<Uuid>,
    /// Globally unique identifier assigned at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<Uuid>,

    /// Owning provider id (int or string across API versions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ems_id: Option<Value>,
    /// Hosting system id (int or string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<Value>,
    /// Backing datastore id (int or string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<Value>,

    /// Provider-side location (path, region, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Connection state reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<String>,
    /// Guest tools/agent status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_status: Option<String>,

    /// CPU core count (int or string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_total_cores: Option<Value>,
    /// Cores per socket (int or string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores_per_socket: Option<Value>,
    /// Provisioned memory in bytes (int or string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_size_in_bytes: Option<Value>,

    /// Last boot timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_time: Option<DateTime<Utc>>,
    /// Record creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Record update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    /// Whether the virtual server has been retired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired: Option<bool>,
    /// Retirement state, when retirement has been initiated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_state: Option<String>,

    /// Attributes without a typed counterpart, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Handle for an asynchronous action accepted by the remote system.
///
/// Every action-triggering call returns one of these; the referenced
/// task's lifecycle (pending, running, complete) is tracked through
/// the `/tasks` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskHandle {
    /// Whether the request was accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Identifier of the queued task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    /// URL of the queued task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_href: Option<String>,
    /// URL of the resource the action targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Additional fields returned with the acceptance.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
