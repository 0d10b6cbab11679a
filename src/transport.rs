use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::{error::TryHttpError, failure::TransportError};

/// Total timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Performs a single request/response exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response, whatever its status.
    async fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing client as-is.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a client with the given total timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TryHttpError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &Request) -> Result<Response, TransportError> {
        // reqwest consumes the request it executes; the caller's copy is reused
        // on the next attempt.
        let Some(request) = request.try_clone() else {
            return Err("request body cannot be cloned for sending".into());
        };
        log::trace!("Sending {} {}", request.method(), request.url());
        self.client
            .execute(request)
            .await
            .map_err(TransportError::from)
    }
}
