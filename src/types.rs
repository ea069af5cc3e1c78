use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloutRestartRequest {
    pub deployment_name: String,
    pub namespace: String,
    pub clusters: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDeploymentRequest {
    pub deployment_name: String,
    pub namespace: String,
    pub clusters: Vec<String>,
    pub replicas: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackDeploymentRequest {
    pub deployment_name: String,
    pub replica_set_name: String,
    pub namespace: String,
    pub clusters: Vec<String>,
}

/// One entry of the `/resources/services` response. `services` is left
/// untyped; its shape belongs to the Kubernetes API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterServices {
    pub clusters: String,
    #[serde(default)]
    pub services: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scale_request_uses_backend_field_names() {
        let request = ScaleDeploymentRequest {
            deployment_name: "web".to_string(),
            namespace: "default".to_string(),
            clusters: vec!["kind-local".to_string()],
            replicas: 3,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "deploymentName": "web",
                "namespace": "default",
                "clusters": ["kind-local"],
                "replicas": 3
            })
        );
    }

    #[test]
    fn rollback_request_spells_replica_set_name_like_the_backend() {
        let request = RollbackDeploymentRequest {
            deployment_name: "web".to_string(),
            replica_set_name: "web-6d4cf56db6".to_string(),
            namespace: "default".to_string(),
            clusters: vec!["a".to_string(), "b".to_string()],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["replicaSetName"], "web-6d4cf56db6");
        assert_eq!(value["clusters"], json!(["a", "b"]));
    }

    #[test]
    fn cluster_services_accepts_null_services_and_error() {
        let parsed: Vec<ClusterServices> = serde_json::from_value(json!([
            {"clusters": "kind-local", "services": null, "error": {}},
            {"clusters": "kind-staging", "services": [{"metadata": {"name": "api"}}], "error": null}
        ]))
        .unwrap();

        assert_eq!(parsed[0].services, None);
        assert_eq!(parsed[1].services.as_ref().map(Vec::len), Some(1));
        assert_eq!(parsed[1].error, None);
    }
}
