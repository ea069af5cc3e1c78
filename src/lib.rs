pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

pub use client::{fetch_deployments, join_clusters, ResourceQueryClient, StatusPolicy};
pub use error::{ClientError, ClientResult};
