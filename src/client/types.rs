use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Per-request options. Method and body are passed through verbatim; headers
/// are merged with the client defaults, caller values winning on collision.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Body of a chat request. The session itself rides on cookies, so the
/// message text is all the backend needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}
