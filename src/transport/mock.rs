//! In-memory [`HttpClient`] used by unit tests.

use super::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Records every request and answers with a fixed status and body.
pub struct MockClient {
    status: u16,
    body: String,
    requests: Mutex<Vec<CapturedRequest>>,
}

impl MockClient {
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok() -> Self {
        Self::with_status(200, "")
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        let body = req
            .body()
            .and_then(|b| b.as_bytes())
            .map(<[u8]>::to_vec)
            .unwrap_or_default();

        self.requests.lock().unwrap().push(CapturedRequest {
            method: req.method().clone(),
            url: req.url().to_string(),
            headers: req.headers().clone(),
            body,
        });

        let resp = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .unwrap();
        Ok(Response::from(resp))
    }
}
