use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use kube_dashboard_client::config::Config;
use kube_dashboard_client::constants::USER_AGENT;
use kube_dashboard_client::types::{
    RollbackDeploymentRequest, RolloutRestartRequest, ScaleDeploymentRequest,
};
use kube_dashboard_client::utils::{init_tracing, normalize_base_url};
use kube_dashboard_client::{ResourceQueryClient, StatusPolicy};

#[derive(Debug, Parser)]
#[command(name = "kube-dashboard", version, about = "Query a multi-cluster dashboard backend")]
struct Cli {
    /// Overrides DASHBOARD_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Fail on non-2xx responses instead of printing their body.
    #[arg(long, global = true)]
    strict_status: bool,

    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List deployments per cluster.
    Deployments {
        /// Comma separated; overrides DASHBOARD_CLUSTERS.
        #[arg(long)]
        clusters: Option<String>,
    },
    /// List replica sets in a namespace per cluster.
    Replicasets {
        #[arg(long)]
        clusters: Option<String>,
        #[arg(long)]
        namespace: String,
    },
    /// List services per cluster.
    Services {
        #[arg(long)]
        clusters: Option<String>,
    },
    /// Trigger a rollout restart.
    Restart {
        #[arg(long)]
        deployment: String,
        #[arg(long)]
        namespace: String,
        #[arg(long = "cluster", required = true)]
        clusters: Vec<String>,
    },
    /// Set the replica count.
    Scale {
        #[arg(long)]
        deployment: String,
        #[arg(long)]
        namespace: String,
        #[arg(long = "cluster", required = true)]
        clusters: Vec<String>,
        #[arg(long)]
        replicas: i32,
    },
    /// Restore the pod template of a previous replica set.
    Rollback {
        #[arg(long)]
        deployment: String,
        #[arg(long)]
        replica_set: String,
        #[arg(long)]
        namespace: String,
        #[arg(long = "cluster", required = true)]
        clusters: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let cfg = Config::from_env()?;

    let base_url = cli
        .base_url
        .as_deref()
        .map(normalize_base_url)
        .unwrap_or_else(|| cfg.base_url.clone());

    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = cfg.request_timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build reqwest client")?;

    let status_policy = if cli.strict_status {
        StatusPolicy::RequireSuccess
    } else {
        StatusPolicy::Ignore
    };
    let client = ResourceQueryClient::new(http, base_url).with_status_policy(status_policy);

    let payload = run(&client, &cfg, cli.command).await?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    };
    let rendered = rendered.context("Failed to render response payload")?;
    println!("{rendered}");
    Ok(())
}

async fn run(client: &ResourceQueryClient, cfg: &Config, command: Command) -> Result<Value> {
    let payload = match command {
        Command::Deployments { clusters } => {
            let clusters = clusters.unwrap_or_else(|| cfg.clusters.clone());
            info!("Fetching deployments for {clusters} from {}", client.base_url());
            client.fetch_deployments(Some(&clusters)).await?
        }
        Command::Replicasets {
            clusters,
            namespace,
        } => {
            let clusters = clusters.unwrap_or_else(|| cfg.clusters.clone());
            info!("Fetching replica sets in {namespace} for {clusters}");
            client.fetch_replica_sets(Some(&clusters), &namespace).await?
        }
        Command::Services { clusters } => {
            let clusters = clusters.unwrap_or_else(|| cfg.clusters.clone());
            info!("Fetching services for {clusters}");
            client.fetch_services(Some(&clusters)).await?
        }
        Command::Restart {
            deployment,
            namespace,
            clusters,
        } => {
            info!("Restarting {namespace}/{deployment}");
            let request = RolloutRestartRequest {
                deployment_name: deployment,
                namespace,
                clusters,
            };
            client.restart_deployment(&request).await?
        }
        Command::Scale {
            deployment,
            namespace,
            clusters,
            replicas,
        } => {
            info!("Scaling {namespace}/{deployment} to {replicas}");
            let request = ScaleDeploymentRequest {
                deployment_name: deployment,
                namespace,
                clusters,
                replicas,
            };
            client.scale_deployment(&request).await?
        }
        Command::Rollback {
            deployment,
            replica_set,
            namespace,
            clusters,
        } => {
            info!("Rolling back {namespace}/{deployment} to {replica_set}");
            let request = RollbackDeploymentRequest {
                deployment_name: deployment,
                replica_set_name: replica_set,
                namespace,
                clusters,
            };
            client.rollback_deployment(&request).await?
        }
    };
    Ok(payload)
}
