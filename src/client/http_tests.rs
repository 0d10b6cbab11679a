use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};
use std::time::Duration;

use reqwest::{Method, Request, Url};

use crate::{policy::RetryDecision, transport::ReqwestTransport};

use super::Client;

fn request_to(server: &mockito::ServerGuard, path: &str) -> Request {
    let url = Url::parse(&format!("{}{path}", server.url())).expect("server url");
    Request::new(Method::GET, url)
}

#[tokio::test]
async fn test_reqwest_transport_retries_server_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/flaky")
        .with_status(500)
        .with_body("internal error")
        .expect(4)
        .create_async()
        .await;

    let successes = Arc::new(AtomicU32::new(0));
    let recorded = successes.clone();
    let client = Client::builder()
        .retry(|_req, reason, attempt| {
            assert_eq!(reason.to_string(), "status 500: internal error");
            RetryDecision::from((Duration::from_millis(10), attempt < 3))
        })
        .on_success(move |_req, _resp, _attempt| {
            recorded.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    client.execute(request_to(&server, "/flaky")).await;
    client.drain().await;

    mock.assert_async().await;
    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert_eq!(client.outstanding(), 0);
}

#[tokio::test]
async fn test_reqwest_transport_success_exposes_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ok")
        .with_status(200)
        .with_body("hello")
        .expect(1)
        .create_async()
        .await;

    let statuses = Arc::new(AtomicU32::new(0));
    let recorded = statuses.clone();
    let client = Client::builder()
        .reqwest_client(reqwest::Client::new())
        .retry(|_req, _reason, _attempt| RetryDecision::stop())
        .on_success(move |_req, resp, attempt| {
            assert_eq!(attempt, 0);
            recorded.store(u32::from(resp.status().as_u16()), Ordering::SeqCst);
        })
        .build()
        .unwrap();

    client.execute(request_to(&server, "/ok")).await;

    mock.assert_async().await;
    assert_eq!(statuses.load(Ordering::SeqCst), 200);
}

#[tokio::test]
async fn test_reqwest_transport_reports_connection_errors() {
    // Reserve a port, then free it so connecting is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/")).unwrap();
    let transport = ReqwestTransport::with_timeout(Duration::from_secs(2)).unwrap();
    let errors = Arc::new(AtomicU32::new(0));
    let recorded = errors.clone();

    let client = Client::builder()
        .transport(transport)
        .retry(move |_req, reason, _attempt| {
            let err = reason.transport_error().expect("transport failure");
            assert!(err.downcast_ref::<reqwest::Error>().is_some());
            recorded.fetch_add(1, Ordering::SeqCst);
            RetryDecision::stop()
        })
        .build()
        .unwrap();

    client.execute(Request::new(Method::GET, url)).await;

    assert_eq!(errors.load(Ordering::SeqCst), 1);
}
