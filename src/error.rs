// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadeckError>;

#[derive(Error, Debug)]
pub enum ReadeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The store could not be reached (connection refused, DNS, timeout).
    #[error("Readeck unavailable during {context}: {source}")]
    UpstreamUnavailable {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-2xx status.
    #[error("Readeck rejected {context} with status {status}: {body}")]
    UpstreamStatus {
        context: String,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed Readeck response during {context}: {message}")]
    UpstreamBody { context: String, message: String },

    #[error("Failed to convert article {document_id}: {message}")]
    Conversion {
        document_id: String,
        message: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadeckError {
    /// Stable machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration_error",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::UpstreamBody { .. } => "upstream_body",
            Self::Conversion { .. } => "conversion_error",
            Self::Transport(_) => "transport_error",
            Self::Io(_) => "io_error",
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::UpstreamStatus { .. } | Self::UpstreamBody { .. }
        )
    }
}
