use thiserror::Error;

/// Error types raised while configuring a retrying client.
///
/// Failures of individual attempts are not reported through this type; they are
/// handed to the [`RetryPolicy`](crate::RetryPolicy) as a
/// [`FailureReason`](crate::FailureReason).
#[derive(Debug, Error)]
pub enum TryHttpError {
    /// Invalid or incomplete client configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// The default HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Configuration file parsing error
    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

/// Converts reqwest HTTP errors into TryHttpErrors
impl From<reqwest::Error> for TryHttpError {
    fn from(err: reqwest::Error) -> Self {
        TryHttpError::HttpError(err.to_string())
    }
}

impl From<toml::de::Error> for TryHttpError {
    fn from(err: toml::de::Error) -> Self {
        TryHttpError::ConfigParse(err.to_string())
    }
}
