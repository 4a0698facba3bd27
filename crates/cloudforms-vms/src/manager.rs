//! Resource manager for the virtual-server collection.

use crate::models::{TaskHandle, Vm};
use crate::Result;
use cloudforms_core::client::ApiCall;
use cloudforms_core::id::VmId;
use cloudforms_core::params::{from_pairs, update_params, Params};
use cloudforms_core::response::{normalize_collection, normalize_object};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Manages virtual servers (the `/vms` collection).
///
/// A thin wrapper over an already-configured [`ApiCall`] client: every
/// operation merges enforced defaults into the caller's parameters,
/// issues one request, and normalizes the response. The manager holds
/// no per-call state; one instance can serve any number of callers.
///
/// Example:
///
/// ```no_run
/// use std::sync::Arc;
/// use cloudforms_core::client::ApiClient;
/// use cloudforms_core::config::CloudformsClientConfig;
/// use cloudforms_vms::VsManager;
///
/// # async fn example() -> cloudforms_vms::Result<()> {
/// let config = CloudformsClientConfig::new("https://cfme.example.com/api")?
///     .with_basic_auth("admin", "smartvm");
/// let vs_mgr = VsManager::new(Arc::new(ApiClient::from_config(&config)?));
///
/// for vm in vs_mgr.list(None).await? {
///     vs_mgr.start(&vm.id, None).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct VsManager {
    client: Arc<dyn ApiCall>,
}

impl VsManager {
    /// Create a manager over an existing API client.
    #[must_use]
    pub fn new(client: Arc<dyn ApiCall>) -> Self {
        Self { client }
    }

    /// Retrieve details about one virtual server.
    ///
    /// `expand=resources` is always requested so the full resource
    /// body comes back inline; other caller-supplied options
    /// (`attributes`, etc.) pass through.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn get(&self, id: &VmId, params: Option<Params>) -> Result<Vm> {
        let params = update_params(params, from_pairs([("expand", "resources")]));
        let raw = self
            .client
            .call(Method::GET, &format!("vms/{id}"), Some(params), None)
            .await?;
        from_object(normalize_object(raw)?)
    }

    /// Retrieve all virtual servers on the account.
    ///
    /// Returns the collection in the order the server sent it.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn list(&self, params: Option<Params>) -> Result<Vec<Vm>> {
        let params = update_params(params, from_pairs([("expand", "resources")]));
        let raw = self
            .client
            .call(Method::GET, "vms", Some(params), None)
            .await?;
        normalize_collection(raw)?.into_iter().map(from_object).collect()
    }

    /// Request an action against one virtual server.
    ///
    /// The `action` body key is always set from the method argument; a
    /// colliding caller-supplied value is overwritten, since letting a
    /// caller rewrite the action would break the operation's contract.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn perform_action(
        &self,
        id: &VmId,
        action: &str,
        params: Option<Params>,
    ) -> Result<TaskHandle> {
        let data = update_params(params, from_pairs([("action", action)]));
        let raw = self
            .client
            .call(Method::POST, &format!("vms/{id}"), None, Some(data))
            .await?;
        from_object(normalize_object(raw)?)
    }

    /// Request that a virtual server be started.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn start(&self, id: &VmId, params: Option<Params>) -> Result<TaskHandle> {
        self.perform_action(id, "start", params).await
    }

    /// Request that a virtual server be stopped.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn stop(&self, id: &VmId, params: Option<Params>) -> Result<TaskHandle> {
        self.perform_action(id, "stop", params).await
    }

    /// Request that a virtual server be suspended.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn suspend(&self, id: &VmId, params: Option<Params>) -> Result<TaskHandle> {
        self.perform_action(id, "suspend", params).await
    }

    /// Request that a virtual server be deleted.
    ///
    /// # Errors
    ///
    /// Transport and parse errors propagate unchanged.
    pub async fn delete(&self, id: &VmId, params: Option<Params>) -> Result<TaskHandle> {
        self.perform_action(id, "delete", params).await
    }
}

fn from_object<T: DeserializeOwned>(object: Params) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cloudforms_core::client::ApiClient;
    use cloudforms_core::config::CloudformsClientConfig;
    use cloudforms_core::Error;
    use mockall::mock;
    use serde_json::json;
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    mock! {
        Client {}

        #[async_trait]
        impl ApiCall for Client {
            async fn call(
                &self,
                method: Method,
                path: &str,
                params: Option<Params>,
                data: Option<Params>,
            ) -> Result<Value>;
        }
    }

    type Recorded = (Method, String, Option<Params>, Option<Params>);

    fn recording_client(log: Arc<Mutex<Vec<Recorded>>>) -> MockClient {
        let mut client = MockClient::new();
        client.expect_call().returning(move |method, path, params, data| {
            log.lock()
                .unwrap()
                .push((method, path.to_string(), params, data));
            Ok(json!({"success": true, "message": "queued"}))
        });
        client
    }

    async fn wiremock_manager(server: &MockServer) -> VsManager {
        let config = CloudformsClientConfig::new(server.uri())
            .unwrap()
            .with_basic_auth("admin", "smartvm");
        VsManager::new(Arc::new(ApiClient::from_config(&config).unwrap()))
    }

    #[tokio::test]
    async fn get_unwraps_envelope() {
        let mut client = MockClient::new();
        client
            .expect_call()
            .withf(|method, path, params, data| {
                *method == Method::GET
                    && path == "vms/42"
                    && params
                        .as_ref()
                        .is_some_and(|p| p.get("expand") == Some(&json!("resources")))
                    && data.is_none()
            })
            .returning(|_, _, _, _| Ok(json!({"resources": {"id": "42", "power_state": "on"}})));

        let vs_mgr = VsManager::new(Arc::new(client));
        let vm = vs_mgr.get(&VmId::from("42"), None).await.unwrap();
        assert_eq!(vm.id, VmId::from("42"));
        assert_eq!(vm.power_state.as_deref(), Some("on"));
        assert!(vm.extra.is_empty());
    }

    #[tokio::test]
    async fn get_keeps_caller_params_but_enforces_expand() {
        let mut client = MockClient::new();
        client
            .expect_call()
            .withf(|_, _, params, _| {
                params.as_ref().is_some_and(|p| {
                    p.get("expand") == Some(&json!("resources"))
                        && p.get("attributes") == Some(&json!("name,power_state"))
                })
            })
            .returning(|_, _, _, _| Ok(json!({"id": "42", "name": "db01"})));

        let vs_mgr = VsManager::new(Arc::new(client));
        let caller = from_pairs([("expand", "nothing"), ("attributes", "name,power_state")]);
        let vm = vs_mgr.get(&VmId::from("42"), Some(caller)).await.unwrap();
        assert_eq!(vm.name.as_deref(), Some("db01"));
    }

    #[tokio::test]
    async fn perform_action_rejects_action_override() {
        let mut client = MockClient::new();
        client
            .expect_call()
            .withf(|method, path, params, data| {
                *method == Method::POST
                    && path == "vms/42"
                    && params.is_none()
                    && data.as_ref().is_some_and(|d| {
                        d.get("action") == Some(&json!("start"))
                            && d.get("force") == Some(&json!(true))
                    })
            })
            .returning(|_, _, _, _| Ok(json!({"success": true, "message": "queued"})));

        let vs_mgr = VsManager::new(Arc::new(client));
        let caller = from_pairs::<_, Value, _>([
            ("action", json!("evil")),
            ("force", json!(true)),
        ]);
        vs_mgr
            .perform_action(&VmId::from("42"), "start", Some(caller))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn action_helpers_match_perform_action() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let vs_mgr = VsManager::new(Arc::new(recording_client(log.clone())));
        let id = VmId::from("42");

        vs_mgr.start(&id, None).await.unwrap();
        vs_mgr.stop(&id, None).await.unwrap();
        vs_mgr.suspend(&id, None).await.unwrap();
        vs_mgr.delete(&id, None).await.unwrap();
        for action in ["start", "stop", "suspend", "delete"] {
            vs_mgr.perform_action(&id, action, None).await.unwrap();
        }

        let recorded = log.lock().unwrap();
        assert_eq!(recorded.len(), 8);
        for offset in 0..4 {
            assert_eq!(recorded[offset], recorded[offset + 4]);
        }
    }

    #[tokio::test]
    async fn get_sends_one_expanded_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vms/42"))
            .and(query_param("expand", "resources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "42",
                "name": "db01",
                "vendor": "vmware",
                "power_state": "on"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let vs_mgr = wiremock_manager(&server).await;
        let vm = vs_mgr.get(&VmId::from("42"), None).await.unwrap();
        assert_eq!(vm.vendor.as_deref(), Some("vmware"));
    }

    #[tokio::test]
    async fn list_preserves_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vms"))
            .and(query_param("expand", "resources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "vms",
                "count": 3,
                "subcount": 3,
                "resources": [
                    {"id": "3", "name": "web01", "power_state": "on"},
                    {"id": "1", "name": "db01", "power_state": "off"},
                    {"id": "2", "name": "app01", "power_state": "on"}
                ]
            })))
            .mount(&server)
            .await;

        let vs_mgr = wiremock_manager(&server).await;
        let vms = vs_mgr.list(None).await.unwrap();
        let ids: Vec<_> = vms.iter().map(|vm| vm.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[tokio::test]
    async fn perform_action_posts_action_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vms/42"))
            .and(body_json(json!({"action": "start"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "VM id:42 name:'db01' starting",
                "task_id": "512",
                "task_href": format!("{}/tasks/512", server.uri()),
                "href": format!("{}/vms/42", server.uri())
            })))
            .expect(1)
            .mount(&server)
            .await;

        let vs_mgr = wiremock_manager(&server).await;
        let handle = vs_mgr
            .perform_action(&VmId::from("42"), "start", None)
            .await
            .unwrap();
        assert_eq!(handle.success, Some(true));
        assert_eq!(handle.task_id.as_ref().map(|id| id.as_str()), Some("512"));
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vms/999"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such vm"))
            .mount(&server)
            .await;

        let vs_mgr = wiremock_manager(&server).await;
        let err = vs_mgr.get(&VmId::from("999"), None).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
