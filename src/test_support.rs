use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use http_body_util::StreamBody;
use reqwest::{Body, Method, Request, Response, Url};

use crate::{failure::TransportError, transport::Transport};

/// Sets its flag when dropped, i.e. when the owning body is released.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Builds a response whose body yields `chunks`; the returned flag flips once the
/// body has been dropped.
pub(crate) fn response_with_chunks(
    status: u16,
    chunks: Vec<Result<Bytes, std::io::Error>>,
) -> (Response, Arc<AtomicBool>) {
    let released = Arc::new(AtomicBool::new(false));
    let flag = DropFlag(released.clone());
    let frames = stream::iter(chunks).map(move |chunk| {
        let _keep = &flag;
        chunk.map(hyper::body::Frame::data)
    });
    let body = Body::wrap(StreamBody::new(frames));
    let response = http::Response::builder()
        .status(status)
        .body(body)
        .expect("mock response");
    (response.into(), released)
}

pub(crate) fn response(status: u16, body: &str) -> Response {
    response_with_chunks(status, vec![Ok(Bytes::from(body.to_string()))]).0
}

pub(crate) fn get(url: &str) -> Request {
    Request::new(Method::GET, Url::parse(url).expect("valid url"))
}

pub(crate) fn connection_refused() -> TransportError {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

type Reply = Box<dyn Fn() -> Result<Response, TransportError> + Send + Sync>;

/// Transport answering from a script, one entry per call; the last entry repeats.
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicU32,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn status(self, status: u16, body: &'static str) -> Self {
        self.push(Box::new(move || Ok(response(status, body))))
    }

    pub(crate) fn refuse(self) -> Self {
        self.push(Box::new(|| Err(connection_refused())))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().expect("replies lock").push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, _request: &Request) -> Result<Response, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock().expect("replies lock");
        let reply = if replies.len() > 1 {
            replies.pop_front().expect("non-empty script")
        } else {
            let last = replies.front().expect("non-empty script");
            return last();
        };
        drop(replies);
        reply()
    }
}
