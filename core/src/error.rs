//! Error types for the seller API client.
//!
//! # Design
//! Only failures that prevent a typed response from being produced are
//! errors. A remote rejection (bad parameters, missing credentials, unknown
//! posting) still decodes into the endpoint's response type and is reported
//! through its `CommonResponse`; callers inspect `is_success()` for that.

use thiserror::Error;

use crate::http::HttpError;

/// Errors returned by endpoint methods.
#[derive(Debug, Error)]
pub enum Error {
    /// The `HttpClient` failed before producing a response. Carries the
    /// transport's own error value unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The request parameters could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed (HTTP {status}): {source}")]
    Deserialization {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
