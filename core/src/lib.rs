//! Typed, blocking client for the Ozon seller API.
//!
//! # Overview
//! `OzonClient` exposes one method per remote endpoint, grouped by category
//! (`finance()`, `products()`, `fbo()`, ...). Each method sends its typed
//! parameters as JSON through a shared `ApiClient` and returns the decoded
//! response, whose `common` field carries the remote status envelope.
//!
//! # Design
//! - Real I/O sits behind the `HttpClient` trait: `UreqHttpClient` in
//!   production, `MockHttpClient` (or `OzonClient::new_mock`) in tests.
//! - Transport and decode failures are `Err`; remote rejections are `Ok` with
//!   a failing `CommonResponse`, checked with `is_success()`.
//! - No retries, rate limiting or pagination loops; one call is one exchange.
//!
//! ```no_run
//! use ozon_seller::{OzonClient, UreqHttpClient};
//! use ozon_seller::finance::ReportOnSoldProductsParams;
//!
//! let client = OzonClient::new(UreqHttpClient::new(), "123456", "api-key");
//! let report = client
//!     .finance()
//!     .report_on_sold_products(&ReportOnSoldProductsParams { date: "2023-05".into() })?;
//! if !report.common.is_success() {
//!     eprintln!("rejected: {}", report.common.message);
//! }
//! # Ok::<(), ozon_seller::Error>(())
//! ```

pub mod client;
pub mod common;
pub mod error;
pub mod fbo;
pub mod finance;
pub mod http;
pub mod ozon;
pub mod products;
pub mod promotions;
pub mod rating;
pub mod warehouses;

pub use client::ApiClient;
pub use common::{ApiResponse, CommonResponse, ErrorDetail};
pub use error::Error;
pub use http::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, MockHttpClient, UreqHttpClient,
    DEFAULT_MAX_BODY_BYTES,
};
pub use ozon::{OzonClient, DEFAULT_API_BASE_URL};
