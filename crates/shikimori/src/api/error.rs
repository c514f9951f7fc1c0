//! Error type for catalog requests.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a catalog request did not produce data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The configured base URL cannot be used to build requests
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The body of a successful response was not the expected JSON
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Short name of the failure kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Build(_) => "build",
            CatalogError::InvalidBaseUrl { .. } => "invalid_url",
            CatalogError::Transport { .. } if self.is_timeout() => "timeout",
            CatalogError::Transport { .. } => "transport",
            CatalogError::Status { .. } => "status",
            CatalogError::Decode { .. } => "decode",
        }
    }

    /// Whether the request hit the per-request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Transport { source, .. } if source.is_timeout())
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
