pub const DEFAULT_CLUSTER_SELECTOR: &str = "kind-local";
pub const CLUSTER_SEPARATOR: &str = ",";

pub const DEPLOYMENTS_PATH: &str = "/resources/deployments";
pub const REPLICA_SETS_PATH: &str = "/resources/replicasets";
pub const SERVICES_PATH: &str = "/resources/services";
pub const RESTART_DEPLOYMENT_PATH: &str = "/resources/deployments/restart";
pub const SCALE_DEPLOYMENT_PATH: &str = "/resources/deployments/scale";
pub const ROLLBACK_DEPLOYMENT_PATH: &str = "/resources/deployments/rollback";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const USER_AGENT: &str = "kube-dashboard-client/0.1";
