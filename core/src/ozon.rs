//! Top-level client facade.
//!
//! # Design
//! `OzonClient` builds one `ApiClient` and hands the same `Arc` to every
//! category sub-client, so all categories share base URL, credentials and
//! transport. Nothing changes after construction, which makes the facade
//! `Send + Sync` whenever the transport is.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::fbo::Fbo;
use crate::finance::Finance;
use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse, MockHttpClient};
use crate::products::Products;
use crate::promotions::Promotions;
use crate::rating::Rating;
use crate::warehouses::Warehouses;

/// Production seller API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Client for the Ozon seller API, grouped by category.
#[derive(Debug, Clone)]
pub struct OzonClient {
    client: Arc<ApiClient>,
    fbo: Fbo,
    finance: Finance,
    products: Products,
    promotions: Promotions,
    rating: Rating,
    warehouses: Warehouses,
}

impl OzonClient {
    /// Client for the production API authenticated as `client_id`.
    pub fn new(http: impl HttpClient + 'static, client_id: &str, api_key: &str) -> Self {
        Self::with_base_url(http, DEFAULT_API_BASE_URL, client_id, api_key)
    }

    /// Same as `new`, against another deployment of the API.
    pub fn with_base_url(
        http: impl HttpClient + 'static,
        base_url: &str,
        client_id: &str,
        api_key: &str,
    ) -> Self {
        let headers = vec![
            ("Client-Id".to_string(), client_id.to_string()),
            ("Api-Key".to_string(), api_key.to_string()),
        ];
        Self::from_api_client(ApiClient::new(Arc::new(http), base_url, headers))
    }

    /// Client whose every request is answered by `handler`.
    ///
    /// No base URL and no credential headers are applied: the handler sees
    /// bare paths such as `/v1/finance/realization`.
    pub fn new_mock<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        let http = Arc::new(MockHttpClient::new(handler));
        Self::from_api_client(ApiClient::new(http, "", Vec::new()))
    }

    fn from_api_client(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            fbo: Fbo::new(Arc::clone(&client)),
            finance: Finance::new(Arc::clone(&client)),
            products: Products::new(Arc::clone(&client)),
            promotions: Promotions::new(Arc::clone(&client)),
            rating: Rating::new(Arc::clone(&client)),
            warehouses: Warehouses::new(Arc::clone(&client)),
            client,
        }
    }

    /// The shared transport every category delegates to.
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    pub fn fbo(&self) -> &Fbo {
        &self.fbo
    }

    pub fn finance(&self) -> &Finance {
        &self.finance
    }

    pub fn products(&self) -> &Products {
        &self.products
    }

    pub fn promotions(&self) -> &Promotions {
        &self.promotions
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    pub fn warehouses(&self) -> &Warehouses {
        &self.warehouses
    }
}
