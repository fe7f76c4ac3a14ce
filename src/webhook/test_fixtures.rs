//! Shared fixtures for webhook tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A client answering once with `status` and `body`.
    pub fn responding(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    /// A client answering once with `200 OK` and `body`.
    pub fn ok_json(body: &str) -> Self {
        Self::responding(http::StatusCode::OK, body)
    }

    /// A client whose single request fails at the transport level.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single captured request; panics if there is not exactly one.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

pub fn test_url() -> url::Url {
    url::Url::parse("https://discord.com/api/webhooks/123/secret-token").unwrap()
}
