//! Resource manager for the task collection.

use crate::models::Task;
use crate::Result;
use cloudforms_core::client::ApiCall;
use cloudforms_core::id::TaskId;
use cloudforms_core::params::{from_pairs, update_params, Params};
use cloudforms_core::response::{normalize_collection, normalize_object};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Manages asynchronous tasks (the `/tasks` collection).
///
/// Same shape as the other resource managers: parameter merge,
/// one delegated request, response normalization. Deliberately thin;
/// polling loops belong to the caller.
pub struct TasksManager {
    client: Arc<dyn ApiCall>,
}

impl TasksManager {
    /// Create a manager over an existing API client.
    #[must_use]
    pub fn new(client: Arc<dyn ApiCall>) -> Self {
        Self { client }
    }

    /// Retrieve details about one task.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn get(&self, id: &TaskId, params: Option<Params>) -> Result<Task> {
        let params = update_params(params, from_pairs([("expand", "resources")]));
        let raw = self
            .client
            .call(Method::GET, &format!("tasks/{id}"), Some(params), None)
            .await?;
        let object = normalize_object(raw)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Retrieve all tasks visible to the account.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn list(&self, params: Option<Params>) -> Result<Vec<Task>> {
        let params = update_params(params, from_pairs([("expand", "resources")]));
        let raw = self
            .client
            .call(Method::GET, "tasks", Some(params), None)
            .await?;
        normalize_collection(raw)?
            .into_iter()
            .map(|entry| Ok(serde_json::from_value(Value::Object(entry))?))
            .collect()
    }
}
