use crate::error::{self, TransportError};
use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

/// Authentication method for API requests
#[derive(Clone)]
pub enum AuthMethod {
    /// Bearer token authentication (Authorization: Bearer <token>)
    Bearer(String),
}

impl std::fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer([REDACTED])"),
        }
    }
}

/// Represents an API endpoint relative to the configured base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Get)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Post)
    }
}

/// Configuration shared by every request issued through a [`RequestBuilder`]
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub auth: Option<AuthMethod>,
    pub default_headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            default_headers: HashMap::new(),
            user_agent: None,
        }
    }

    #[must_use]
    pub fn with_auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Absolute URL for an endpoint, tolerant of stray slashes on either side
    #[must_use]
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        )
    }
}

/// Executes JSON requests against a configured service
pub struct RequestBuilder {
    /// Underlying HTTP client, cheap to clone
    client: reqwest::Client,
    /// Base URL, auth and headers applied to every request
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Build a reqwest RequestBuilder for the given endpoint
    pub fn build_request(&self, endpoint: &Endpoint) -> ReqwestRequestBuilder {
        let url = self.config.url_for(endpoint);
        let mut req = self.client.request(endpoint.method.into(), &url);

        if let Some(AuthMethod::Bearer(token)) = &self.config.auth {
            req = req.bearer_auth(token);
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        if let Some(ref user_agent) = self.config.user_agent {
            req = req.header(reqwest::header::USER_AGENT, user_agent);
        }

        req
    }

    /// Execute a request with an optional JSON body and decode the JSON reply
    pub async fn request_json<T, B>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, TransportError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize + ?Sized,
    {
        let mut req = self.build_request(endpoint);

        log::debug!("{:?} {}", endpoint.method, endpoint.path);

        if let Some(body) = body {
            // Normalise to a Value first so the trace shows exactly what goes on the wire
            let val = serde_json::to_value(body)?;
            log::trace!("{} payload: {val}", endpoint.path);
            req = req.json(&val);
        }

        let res = req.send().await?;
        Self::handle_response(res).await
    }

    /// Execute a request without a body and decode the JSON reply
    pub async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, TransportError> {
        self.request_json::<T, ()>(endpoint, None).await
    }

    /// Decode a success body, or turn a failure status into a [`TransportError`]
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        res: Response,
    ) -> Result<T, TransportError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<T>(&bytes).map_err(|source| TransportError::InvalidBody {
                status: status.as_u16(),
                source,
            })
        } else {
            log::warn!("request failed with HTTP {}", status.as_u16());
            Err(error::parse_error_response(status, &bytes))
        }
    }
}
