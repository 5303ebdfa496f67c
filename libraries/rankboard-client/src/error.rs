//! Error types for the Rankboard client.
//!
//! Failures travel through two stages. The transport produces a
//! [`TransportFailure`], a tagged description of what went wrong on the wire.
//! [`classify`] then maps it onto the small, user-facing [`ClientError`]
//! taxonomy that every query service returns.

use thiserror::Error;

/// Raw failure reported by the transport, before classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// No route to host, DNS failure, or connection refused
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected shape
    #[error("unexpected payload: {0}")]
    Decode(String),

    /// Anything the transport could not attribute
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(e: reqwest::Error) -> Self {
        // A connect attempt that runs out of time reports both flags; timeout wins.
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            Self::Other(e.to_string())
        }
    }
}

/// Discriminator of a classified failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Timeout,
    Unreachable,
    ServerError(u16),
    Unknown,
}

/// Errors returned by every Rankboard query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Server did not answer within the timeout
    #[error("Request timeout - server not responding")]
    Timeout,

    /// Server could not be reached at all
    #[error(
        "Cannot connect to server. Make sure the backend is running, this device \
         is on the same network, and the firewall allows the API port ({0})"
    )]
    Unreachable(String),

    /// Server returned an error response
    #[error("Server error: {status}")]
    ServerError { status: u16, message: String },

    /// Failure that fits no other category
    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}

impl ClientError {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout => ErrorKind::Timeout,
            Self::Unreachable(_) => ErrorKind::Unreachable,
            Self::ServerError { status, .. } => ErrorKind::ServerError(*status),
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map a transport failure onto the client error taxonomy.
///
/// Only the structured discriminator is consulted; the free-text detail is
/// carried along for diagnostics but never inspected.
pub fn classify(failure: TransportFailure) -> ClientError {
    match failure {
        TransportFailure::Timeout(_) => ClientError::Timeout,
        TransportFailure::Connect(detail) => ClientError::Unreachable(detail),
        TransportFailure::Status { status, body } => ClientError::ServerError {
            status,
            message: body,
        },
        TransportFailure::Decode(detail) | TransportFailure::Other(detail) => {
            ClientError::Unknown(detail)
        }
    }
}

impl From<TransportFailure> for ClientError {
    fn from(failure: TransportFailure) -> Self {
        classify(failure)
    }
}

/// Errors raised while building a client or loading its configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Timeout must be non-zero
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    /// Configuration sources could not be read or merged
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type for Rankboard queries.
pub type Result<T> = std::result::Result<T, ClientError>;
