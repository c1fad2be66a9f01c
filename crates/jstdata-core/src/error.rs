use thiserror::Error;

use crate::http_client::HttpError;

/// Local input errors raised before anything reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported output format '{value}', expected one of json, csv, pretty")]
    UnsupportedFormat { value: String },

    #[error("invalid date format '{value}', expected YYYY-MM-DD, YYYY-MM, YYYY or a unix timestamp")]
    InvalidDateFormat { value: String },
}

/// Errors surfaced by the data access client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API key is not set; export JEFFERSON_STREET_API_KEY or add it to .env")]
    CredentialMissing,

    #[error("API key was rejected by the provider (heartbeat status '{status}')")]
    InvalidCredential { status: String },

    #[error("invalid input for '{endpoint}': provider returned HTTP {status}: {body}")]
    InvalidInput {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("transport error on '{endpoint}': {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("malformed response from '{endpoint}': {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("'{operation}' is not implemented by this client")]
    NotImplemented { operation: &'static str },
}

impl ClientError {
    /// HTTP status carried by provider-side rejections, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidInput { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
