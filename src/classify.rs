use reqwest::{Response, StatusCode};

use crate::failure::{FailureReason, StatusError, TransportError};

/// Maximum number of characters of a failed response body kept for diagnostics.
pub const BODY_PREFIX_LIMIT: usize = 300;

/// Result of classifying one transport call.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx response; the body is untouched.
    Success(Response),
    /// Transport error or non-2xx status.
    Failure(FailureReason),
}

/// Returns true for status codes in `200..=299`.
pub fn is_success_status(status: StatusCode) -> bool {
    (200..=299).contains(&status.as_u16())
}

/// First [`BODY_PREFIX_LIMIT`] characters of `body`, decoded lossily as UTF-8.
pub fn body_prefix(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_PREFIX_LIMIT)
        .collect()
}

/// Decides whether a transport call succeeded.
///
/// Transport errors are passed through unchanged. A response with a non-2xx
/// status is read to the end, released, and turned into a [`StatusError`];
/// a body that fails to read yields an empty prefix.
pub async fn classify(result: Result<Response, TransportError>) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => return Outcome::Failure(FailureReason::Transport(err)),
    };

    let status = response.status();
    if is_success_status(status) {
        return Outcome::Success(response);
    }

    // `bytes` consumes the response, so the body is closed once read.
    let body = match response.bytes().await {
        Ok(bytes) => body_prefix(&bytes),
        Err(err) => {
            log::debug!("Failed to read body of {status} response: {err}");
            String::new()
        }
    };
    Outcome::Failure(FailureReason::Status(StatusError { status, body }))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
