use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::{
    CLUSTER_SEPARATOR, DEFAULT_CLUSTER_SELECTOR, DEPLOYMENTS_PATH, REPLICA_SETS_PATH,
    RESTART_DEPLOYMENT_PATH, ROLLBACK_DEPLOYMENT_PATH, SCALE_DEPLOYMENT_PATH, SERVICES_PATH,
};
use crate::error::{ClientError, ClientResult};
use crate::types::{
    ClusterServices, RollbackDeploymentRequest, RolloutRestartRequest, ScaleDeploymentRequest,
};

/// How a response's HTTP status is treated before the body is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Decode the body whatever the status. A 500 with a JSON body is a success.
    #[default]
    Ignore,
    /// Non-2xx responses become [`ClientError::HttpStatus`].
    RequireSuccess,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentAction {
    Restart,
    Scale,
    Rollback,
}

impl DeploymentAction {
    pub fn path(self) -> &'static str {
        match self {
            Self::Restart => RESTART_DEPLOYMENT_PATH,
            Self::Scale => SCALE_DEPLOYMENT_PATH,
            Self::Rollback => ROLLBACK_DEPLOYMENT_PATH,
        }
    }
}

// URL builders concatenate verbatim. Selector and namespace are not escaped.

pub fn deployments_url(base_url: &str, cluster_selector: &str) -> String {
    format!("{base_url}{DEPLOYMENTS_PATH}?clusters={cluster_selector}")
}

pub fn replica_sets_url(base_url: &str, cluster_selector: &str, namespace: &str) -> String {
    format!("{base_url}{REPLICA_SETS_PATH}?clusters={cluster_selector}&namespace={namespace}")
}

pub fn services_url(base_url: &str, cluster_selector: &str) -> String {
    format!("{base_url}{SERVICES_PATH}?clusters={cluster_selector}")
}

pub fn action_url(base_url: &str, action: DeploymentAction) -> String {
    format!("{base_url}{}", action.path())
}

pub fn join_clusters<S: AsRef<str>>(clusters: &[S]) -> String {
    clusters
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CLUSTER_SEPARATOR)
}

fn selector_or_default(cluster_selector: Option<&str>) -> &str {
    cluster_selector.unwrap_or(DEFAULT_CLUSTER_SELECTOR)
}

/// GET `{base_url}/resources/deployments?clusters={selector}` and decode the
/// body as JSON. The status code is not inspected.
pub async fn fetch_deployments(
    http: &Client,
    base_url: &str,
    cluster_selector: Option<&str>,
) -> ClientResult<Value> {
    let url = deployments_url(base_url, selector_or_default(cluster_selector));
    get_json(http, &url, StatusPolicy::Ignore).await
}

/// Accessor for the dashboard backend's resource routes.
///
/// Holds the injected `reqwest::Client` and base URL; nothing else. Calls are
/// independent and may run concurrently from clones of the same value.
#[derive(Clone, Debug)]
pub struct ResourceQueryClient {
    http: Client,
    base_url: String,
    status_policy: StatusPolicy,
}

impl ResourceQueryClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    pub async fn fetch_deployments(&self, cluster_selector: Option<&str>) -> ClientResult<Value> {
        self.fetch_deployments_as(cluster_selector).await
    }

    /// Same request as [`Self::fetch_deployments`], decoded into a caller type.
    pub async fn fetch_deployments_as<T: DeserializeOwned>(
        &self,
        cluster_selector: Option<&str>,
    ) -> ClientResult<T> {
        let url = deployments_url(&self.base_url, selector_or_default(cluster_selector));
        get_json(&self.http, &url, self.status_policy).await
    }

    pub async fn fetch_replica_sets(
        &self,
        cluster_selector: Option<&str>,
        namespace: &str,
    ) -> ClientResult<Value> {
        let url = replica_sets_url(
            &self.base_url,
            selector_or_default(cluster_selector),
            namespace,
        );
        get_json(&self.http, &url, self.status_policy).await
    }

    pub async fn fetch_services(&self, cluster_selector: Option<&str>) -> ClientResult<Value> {
        let url = services_url(&self.base_url, selector_or_default(cluster_selector));
        get_json(&self.http, &url, self.status_policy).await
    }

    pub async fn fetch_cluster_services(
        &self,
        cluster_selector: Option<&str>,
    ) -> ClientResult<Vec<ClusterServices>> {
        let url = services_url(&self.base_url, selector_or_default(cluster_selector));
        get_json(&self.http, &url, self.status_policy).await
    }

    pub async fn restart_deployment(&self, request: &RolloutRestartRequest) -> ClientResult<Value> {
        self.post_action(DeploymentAction::Restart, request).await
    }

    pub async fn scale_deployment(&self, request: &ScaleDeploymentRequest) -> ClientResult<Value> {
        self.post_action(DeploymentAction::Scale, request).await
    }

    pub async fn rollback_deployment(
        &self,
        request: &RollbackDeploymentRequest,
    ) -> ClientResult<Value> {
        self.post_action(DeploymentAction::Rollback, request).await
    }

    async fn post_action<B: Serialize>(
        &self,
        action: DeploymentAction,
        body: &B,
    ) -> ClientResult<Value> {
        let url = action_url(&self.base_url, action);
        let request = self.http.post(&url).json(body);
        send_json(request, &url, self.status_policy).await
    }
}

async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    status_policy: StatusPolicy,
) -> ClientResult<T> {
    send_json(http.get(url), url, status_policy).await
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
    status_policy: StatusPolicy,
) -> ClientResult<T> {
    debug!("Sending request to {url}");
    let response = request.send().await.map_err(|source| ClientError::Network {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    debug!("Received {status} from {url}");

    let body = response
        .bytes()
        .await
        .map_err(|source| ClientError::Network {
            url: url.to_string(),
            source,
        })?;

    if status_policy == StatusPolicy::RequireSuccess && !status.is_success() {
        return Err(ClientError::HttpStatus {
            url: url.to_string(),
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body).map_err(|source| ClientError::Parse {
        url: url.to_string(),
        source,
    })
}
