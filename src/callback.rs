use async_trait::async_trait;
use reqwest::{Request, Response};

/// Called once a request finished with a 2xx status.
///
/// Never called when retries run out. The response body is readable for the
/// duration of the call and is released afterwards; handlers do not need to
/// close it themselves.
#[async_trait]
pub trait SuccessHandler: Send + Sync {
    async fn on_success(&self, request: &Request, response: &mut Response, attempt: u32);
}

#[async_trait]
impl<F> SuccessHandler for F
where
    F: Fn(&Request, &mut Response, u32) + Send + Sync,
{
    async fn on_success(&self, request: &Request, response: &mut Response, attempt: u32) {
        self(request, response, attempt)
    }
}
