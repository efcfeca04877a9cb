//! The envelope shared by every seller API response.

use serde::{Deserialize, Serialize};

/// Status and error fields present on every response.
///
/// On success the remote usually omits `code`, `message` and `details`, so
/// they default. On failure the body carries only these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonResponse {
    /// HTTP status of the exchange. Not part of the JSON body.
    #[serde(skip)]
    pub status_code: u16,

    /// Remote result code, `0` when absent.
    pub code: i32,

    pub message: String,

    pub details: Vec<ErrorDetail>,
}

impl CommonResponse {
    /// `true` when the exchange returned 2xx and the remote reported no error
    /// code.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.code == 0
    }
}

/// One entry of `CommonResponse::details`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    #[serde(rename = "typeUrl")]
    pub type_url: String,

    pub value: String,
}

/// Implemented by every endpoint response so the transport can stamp the HTTP
/// status onto the embedded envelope after decoding.
pub trait ApiResponse {
    fn common(&self) -> &CommonResponse;

    fn common_mut(&mut self) -> &mut CommonResponse;
}

/// Implements `ApiResponse` for response structs whose envelope field is
/// named `common`.
macro_rules! impl_api_response {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::common::ApiResponse for $ty {
            fn common(&self) -> &$crate::common::CommonResponse {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::common::CommonResponse {
                &mut self.common
            }
        }
    )+};
}

pub(crate) use impl_api_response;
