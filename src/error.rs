use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by [`crate::client::ResourceQueryClient`].
///
/// Nothing is recovered locally; every variant carries the URL that was
/// requested so callers can report it.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed for {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} is not valid JSON")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Only produced under [`crate::client::StatusPolicy::RequireSuccess`].
    #[error("request failed ({status}) for {url}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl ClientError {
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Parse { url, .. } | Self::HttpStatus { url, .. } => {
                url
            }
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
