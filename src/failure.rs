use reqwest::StatusCode;
use thiserror::Error;

/// Error produced by a [`Transport`](crate::Transport), kept as-is so callers can
/// downcast to the concrete client error (e.g. `reqwest::Error`).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Returned when a request reached the server but did not come back with a 2xx
/// status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("status {}: {}", .status.as_u16(), .body)]
pub struct StatusError {
    /// HTTP status code.
    pub status: StatusCode,
    /// First 300 characters of the body.
    pub body: String,
}

/// Why an attempt failed.
#[derive(Debug, Error)]
pub enum FailureReason {
    /// The transport itself failed (connection refused, timeout, DNS...)
    #[error("transport error: {0}")]
    Transport(TransportError),
    /// The server answered with a non-2xx status
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl FailureReason {
    /// Status code of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FailureReason::Status(err) => Some(err.status),
            FailureReason::Transport(_) => None,
        }
    }

    /// The underlying transport error, if any.
    pub fn transport_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            FailureReason::Transport(err) => Some(err.as_ref()),
            FailureReason::Status(_) => None,
        }
    }
}
