use std::time::Duration;

use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, error, instrument};

use crate::config::{ApiConfig, Endpoint};
use crate::error::{AgentGateError, Result};

use super::types::{ChatRequest, RequestOptions};

/// Header carrying the gateway subscription key. Case-insensitive on the
/// wire; advertised by the gateway as `Ocp-Apim-Subscription-Key`.
pub const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// HTTP front end for the agent backend.
///
/// Holds the profile selected at construction time and a pooled transport.
/// Stateless between calls apart from the pool and the cookie store; any
/// number of dispatches may be in flight concurrently.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Pooled transport configuration.
    ///
    /// The cookie store keeps the backend session: cookies are attached to
    /// every request and captured from every response.
    fn build_http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(300))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client with custom config")
    }

    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Self::build_http_client(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Effective header set for one request: JSON content type first, caller
    /// headers overlaid, subscription key inserted last so it wins over a
    /// caller-supplied value of the same name.
    fn build_headers(&self, caller: &HeaderMap) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in caller {
            headers.insert(name, value.clone());
        }
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|e| AgentGateError::Other(anyhow!("invalid subscription key: {}", e)))?;
            headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), value);
        }
        Ok(headers)
    }

    /// Issue one request against the active profile.
    ///
    /// The URL is `base_url` + `path` by plain concatenation; the caller is
    /// responsible for path formatting relative to the selected profile. A
    /// non-success status fails with `HTTP <code>: <status text>` and the
    /// response is discarded; a successful response is returned raw, body
    /// untouched.
    #[instrument(skip(self, options))]
    pub async fn dispatch(&self, path: &str, options: RequestOptions) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url, path);
        let headers = self.build_headers(&options.headers)?;

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("API request error: {}", e);
            AgentGateError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or_default().to_string();
            error!("API request failed: {} {}", status.as_u16(), text);
            return Err(AgentGateError::Status {
                code: status.as_u16(),
                text,
            });
        }

        debug!(status = status.as_u16(), "API request completed");
        Ok(response)
    }

    /// Dispatch against a logical operation of the active profile.
    pub async fn request_endpoint(
        &self,
        endpoint: Endpoint,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        let path = self.config.endpoints.path(endpoint);
        self.dispatch(path, options).await
    }

    pub async fn health(&self) -> Result<reqwest::Response> {
        self.request_endpoint(Endpoint::Health, RequestOptions::default())
            .await
    }

    pub async fn agent(&self) -> Result<reqwest::Response> {
        self.request_endpoint(Endpoint::Agent, RequestOptions::default())
            .await
    }

    /// POST one chat message. The response streams; reading it is up to the
    /// caller.
    pub async fn chat(&self, request: &ChatRequest) -> Result<reqwest::Response> {
        let body = serde_json::to_string(request)
            .map_err(|e| AgentGateError::Other(anyhow!("failed to serialize chat request: {}", e)))?;
        let options = RequestOptions {
            method: Method::POST,
            body: Some(body),
            ..RequestOptions::default()
        };
        self.request_endpoint(Endpoint::Chat, options).await
    }

    pub async fn chat_history(&self) -> Result<reqwest::Response> {
        self.request_endpoint(Endpoint::ChatHistory, RequestOptions::default())
            .await
    }
}
