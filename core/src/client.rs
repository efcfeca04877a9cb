//! Shared request/response plumbing used by every category sub-client.
//!
//! # Design
//! `ApiClient` holds the base URL, the credential headers and the
//! `HttpClient`. It carries no mutable state, so a single instance is shared
//! by all sub-clients behind an `Arc`. Each call is one exchange: encode the
//! parameters, execute, decode the body straight into the endpoint's response
//! type (envelope included), then stamp the HTTP status.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::common::ApiResponse;
use crate::error::Error;
use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// Low-level executor for seller API calls.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    /// `headers` are attached to every request, in order.
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str, headers: Vec<(String, String)>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `params` as the JSON body of a POST to `path`.
    pub fn post<P, R>(&self, path: &str, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned + ApiResponse,
    {
        let body = serde_json::to_string(params).map_err(Error::Serialization)?;
        let mut headers = self.headers.clone();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        self.send(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(path),
            headers,
            body: Some(body),
        })
    }

    /// Issue a body-less GET to `path`.
    pub fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned + ApiResponse,
    {
        self.send(HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path),
            headers: self.headers.clone(),
            body: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send<R>(&self, request: HttpRequest) -> Result<R, Error>
    where
        R: DeserializeOwned + ApiResponse,
    {
        log::debug!("{} {}", request.method, request.url);
        if let Some(body) = &request.body {
            log::trace!("request body: {body}");
        }

        let response = self.http.execute(request)?;
        log::trace!("response status {}: {}", response.status, response.body);
        if !response.is_success() {
            log::warn!("seller API answered HTTP {}", response.status);
        }

        decode(response)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values carry the API key.
        let names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("headers", &names)
            .finish_non_exhaustive()
    }
}

/// Decode a body of any status into `R` and record the status on its envelope.
///
/// The API sends `null` for absent arrays and objects, e.g. `"details": null`
/// on error bodies. Null members are dropped before decoding so they fall back
/// to the field defaults.
fn decode<R>(response: HttpResponse) -> Result<R, Error>
where
    R: DeserializeOwned + ApiResponse,
{
    let status = response.status;
    let malformed = |source: serde_json::Error| Error::Deserialization { status, source };

    let mut value: Value = serde_json::from_str(&response.body).map_err(malformed)?;
    drop_nulls(&mut value);
    let mut decoded: R = serde_json::from_value(value).map_err(malformed)?;
    decoded.common_mut().status_code = status;
    Ok(decoded)
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde::Deserialize;

    use super::*;
    use crate::common::CommonResponse;
    use crate::http::{HttpError, MockHttpClient};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(flatten)]
        common: CommonResponse,
        result: Vec<u32>,
    }

    impl ApiResponse for Sample {
        fn common(&self) -> &CommonResponse {
            &self.common
        }

        fn common_mut(&mut self) -> &mut CommonResponse {
            &mut self.common
        }
    }

    fn client_with<F>(handler: F) -> ApiClient
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        ApiClient::new(
            Arc::new(MockHttpClient::new(handler)),
            "https://seller.example/",
            vec![("Client-Id".to_string(), "7".to_string())],
        )
    }

    #[test]
    fn post_builds_json_request() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let client = client_with(move |req| {
            *sink.lock().unwrap() = Some(req.clone());
            Ok(HttpResponse::ok_json(r#"{"result":[1,2]}"#))
        });

        let sample: Sample = client
            .post("/v1/sample", &serde_json::json!({"limit": 10}))
            .unwrap();
        assert_eq!(sample.result, vec![1, 2]);

        let req = seen.lock().unwrap().take().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://seller.example/v1/sample");
        assert_eq!(req.header("Client-Id"), Some("7"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["limit"], 10);
    }

    #[test]
    fn get_has_no_body() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let client = client_with(move |req| {
            *sink.lock().unwrap() = Some(req.clone());
            Ok(HttpResponse::ok_json("{}"))
        });

        let _: Sample = client.get("/v1/sample").unwrap();

        let req = seen.lock().unwrap().take().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.body.is_none());
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn envelope_is_populated_on_success() {
        let client = client_with(|_| Ok(HttpResponse::ok_json(r#"{"result":[]}"#)));
        let sample: Sample = client.post("/v1/sample", &()).unwrap();
        assert_eq!(sample.common.status_code, 200);
        assert!(sample.common().is_success());
    }

    #[test]
    fn error_status_decodes_envelope() {
        let client = client_with(|_| {
            Ok(HttpResponse::with_status(
                400,
                r#"{"code":3,"message":"bad request","details":[]}"#,
            ))
        });
        let sample: Sample = client.post("/v1/sample", &()).unwrap();
        assert_eq!(sample.common.status_code, 400);
        assert_eq!(sample.common.code, 3);
        assert_eq!(sample.common.message, "bad request");
        assert!(sample.result.is_empty());
        assert!(!sample.common.is_success());
    }

    #[test]
    fn null_members_fall_back_to_defaults() {
        let client = client_with(|_| {
            Ok(HttpResponse::with_status(
                400,
                r#"{"code":3,"message":"bad request","details":null,"result":null}"#,
            ))
        });
        let sample: Sample = client.post("/v1/sample", &()).unwrap();
        assert_eq!(sample.common.status_code, 400);
        assert_eq!(sample.common.code, 3);
        assert!(sample.common.details.is_empty());
        assert!(sample.result.is_empty());
    }

    #[test]
    fn nested_nulls_are_dropped() {
        let mut value = serde_json::json!({
            "details": [{"typeUrl": null, "value": "x"}],
            "result": null,
        });
        drop_nulls(&mut value);
        assert_eq!(value, serde_json::json!({"details": [{"value": "x"}]}));
    }

    #[test]
    fn null_body_is_deserialization_error() {
        let client = client_with(|_| Ok(HttpResponse::ok_json("null")));
        let err = client.post::<_, Sample>("/v1/sample", &()).unwrap_err();
        assert!(matches!(err, Error::Deserialization { status: 200, .. }));
    }

    #[test]
    fn transport_error_is_passed_through() {
        let client = client_with(|_| Err(HttpError::new("dns failure")));
        let err = client.post::<_, Sample>("/v1/sample", &()).unwrap_err();
        assert!(matches!(err, Error::Transport(e) if e == HttpError::new("dns failure")));
    }

    #[test]
    fn non_json_body_is_deserialization_error() {
        let client = client_with(|_| Ok(HttpResponse::with_status(502, "<html>bad gateway</html>")));
        let err = client.post::<_, Sample>("/v1/sample", &()).unwrap_err();
        assert!(matches!(err, Error::Deserialization { status: 502, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = client_with(|_| Ok(HttpResponse::ok_json("{}")));
        assert_eq!(client.base_url(), "https://seller.example");
    }

    #[test]
    fn debug_hides_header_values() {
        let client = client_with(|_| Ok(HttpResponse::ok_json("{}")));
        let rendered = format!("{client:?}");
        assert!(rendered.contains("Client-Id"));
        assert!(!rendered.contains("\"7\""));
    }
}
