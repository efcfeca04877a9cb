//! HTTP transport types and the `HttpClient` seam.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` builds an
//! `HttpRequest`, hands it to an `HttpClient`, and decodes the returned
//! `HttpResponse`. Everything network-facing lives behind the trait, so the
//! endpoint code is identical whether it talks to the real seller API through
//! `UreqHttpClient` or to a test handler through `MockHttpClient`.
//!
//! Non-2xx statuses are data, not errors: implementations return them as an
//! `HttpResponse` and leave interpretation to the caller.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure: the request never produced an `HttpResponse`.
///
/// Equality compares messages only, so handler-injected errors can be matched
/// in tests. The underlying cause, when there is one, is kept as `source()`.
#[derive(Debug, Clone)]
pub struct HttpError {
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `ureq` error behind this failure, if it came from `UreqHttpClient`.
    pub fn ureq_error(&self) -> Option<&ureq::Error> {
        self.source.as_deref()?.downcast_ref::<ureq::Error>()
    }

    /// `true` when the request ran out of time rather than failing outright.
    pub fn is_timeout(&self) -> bool {
        matches!(self.ureq_error(), Some(ureq::Error::Timeout(_)))
    }
}

impl PartialEq for HttpError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for HttpError {}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Executes a single HTTP round-trip.
///
/// Must be safe to share between threads; `OzonClient` hands one instance to
/// every category sub-client.
pub trait HttpClient: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Largest response body `UreqHttpClient` reads unless told otherwise.
/// Realization reports and transaction pages can exceed `ureq`'s own 10 MB
/// default.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Blocking production transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqHttpClient {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Transport whose every call fails after `timeout` in total.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    /// Wrap an agent configured by the caller. The agent should have
    /// `http_status_as_error(false)` so error envelopes reach the decoder.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Bodies longer than `bytes` fail with a transport error.
    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn body_limit(&self) -> u64 {
        self.max_body_bytes
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self::with_agent(agent)
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| HttpError::with_source(e.to_string(), e))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_string()
            .map_err(|e| HttpError::with_source(format!("reading response body: {e}"), e))?;

        Ok(HttpResponse { status, body })
    }
}

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync;

/// Transport that answers every request with a caller-supplied handler.
pub struct MockHttpClient {
    handler: Box<Handler>,
}

impl MockHttpClient {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl fmt::Debug for MockHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHttpClient").finish_non_exhaustive()
    }
}

impl HttpClient for MockHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (self.handler)(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: "/v1/warehouse/list".to_string(),
            headers: vec![("Client-Id".to_string(), "42".to_string())],
            body: Some("{}".to_string()),
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request();
        assert_eq!(req.header("client-id"), Some("42"));
        assert_eq!(req.header("CLIENT-ID"), Some("42"));
        assert_eq!(req.header("Api-Key"), None);
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::ok_json("{}").is_success());
        assert!(HttpResponse::with_status(204, "").is_success());
        assert!(!HttpResponse::with_status(301, "").is_success());
        assert!(!HttpResponse::with_status(404, "").is_success());
    }

    #[test]
    fn mock_client_delegates_to_handler() {
        let client = MockHttpClient::new(|req| Ok(HttpResponse::ok_json(req.url.clone())));
        let resp = client.execute(request()).unwrap();
        assert_eq!(resp.body, "/v1/warehouse/list");
    }

    #[test]
    fn mock_client_surfaces_handler_error() {
        let client = MockHttpClient::new(|_| Err(HttpError::new("connection reset")));
        let err = client.execute(request()).unwrap_err();
        assert_eq!(err.message(), "connection reset");
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn http_error_keeps_source_and_compares_by_message() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
        let err = HttpError::with_source("connection reset", io);
        assert_eq!(err, HttpError::new("connection reset"));
        assert_eq!(err.source().unwrap().to_string(), "peer reset");
        assert!(err.ureq_error().is_none());
        assert!(!err.is_timeout());

        let cloned = err.clone();
        assert!(cloned.source().is_some());
    }

    #[test]
    fn ureq_timeout_is_recognised() {
        let err = HttpError::with_source("timed out", ureq::Error::Timeout(ureq::Timeout::Global));
        assert!(err.is_timeout());
        assert!(matches!(err.ureq_error(), Some(ureq::Error::Timeout(_))));
    }

    #[test]
    fn ureq_client_body_limit_defaults_above_ureq_cap() {
        let client = UreqHttpClient::new();
        assert_eq!(client.body_limit(), DEFAULT_MAX_BODY_BYTES);
        assert!(client.body_limit() > 10 * 1024 * 1024);
        assert_eq!(UreqHttpClient::new().with_body_limit(1024).body_limit(), 1024);
    }

    #[test]
    fn method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
