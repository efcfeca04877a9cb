//! Product catalog and stock endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Products {
    client: Arc<ApiClient>,
}

impl Products {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// One page of the seller's products. Pass the previous page's `last_id`
    /// to continue; an empty `last_id` starts from the beginning.
    pub fn list_products(&self, params: &ListProductsParams) -> Result<ListProductsResponse, Error> {
        self.client.post("/v3/product/list", params)
    }

    /// Set available quantities per warehouse. Each item is applied or
    /// rejected on its own; see `StockUpdateResult::updated`.
    pub fn update_stocks(&self, params: &UpdateStocksParams) -> Result<UpdateStocksResponse, Error> {
        self.client.post("/v2/products/stocks", params)
    }
}

/// Which products `list_products` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductVisibility {
    #[default]
    All,
    Visible,
    Invisible,
    EmptyStock,
    NotModerated,
    Moderated,
    Disabled,
    StateFailed,
    ReadyToSupply,
    ValidationStatePending,
    ValidationStateFail,
    ValidationStateSuccess,
    ToSupply,
    InSale,
    RemovedFromSale,
    Archived,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductsParams {
    pub filter: ProductFilter,

    /// Cursor from the previous page.
    pub last_id: String,

    /// Page size, 1..=1000.
    pub limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub offer_id: Vec<String>,
    pub product_id: Vec<i64>,
    pub visibility: ProductVisibility,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListProductsResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: ProductPage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub items: Vec<ProductListItem>,

    /// Cursor for the next page, empty on the last one.
    pub last_id: String,

    /// Number of products matching the filter across all pages.
    pub total: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductListItem {
    pub archived: bool,
    pub has_fbo_stocks: bool,
    pub has_fbs_stocks: bool,
    pub is_discounted: bool,
    pub offer_id: String,
    pub product_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStocksParams {
    pub stocks: Vec<StockUpdate>,
}

/// New quantity of one product at one warehouse. Identify the product by
/// `offer_id`, `product_id` or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub offer_id: String,
    pub product_id: i64,
    pub stock: i64,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateStocksResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: Vec<StockUpdateResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockUpdateResult {
    pub errors: Vec<StockUpdateError>,
    pub offer_id: String,
    pub product_id: i64,
    pub updated: bool,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockUpdateError {
    pub code: String,
    pub message: String,
}

impl_api_response!(ListProductsResponse, UpdateStocksResponse);

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::http::{HttpError, HttpRequest, HttpResponse, MockHttpClient};

    fn products<F>(handler: F) -> Products
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        let http = Arc::new(MockHttpClient::new(handler));
        Products::new(Arc::new(ApiClient::new(http, "", Vec::new())))
    }

    #[test]
    fn list_products_sends_filter_and_decodes_page() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let products = products(move |req| {
            *sink.lock().unwrap() = Some(req.clone());
            Ok(HttpResponse::ok_json(
                r#"{"result":{"items":[{"offer_id":"mug-1","product_id":11,"has_fbo_stocks":true}],"last_id":"WzExXQ==","total":2}}"#,
            ))
        });

        let params = ListProductsParams {
            filter: ProductFilter {
                visibility: ProductVisibility::InSale,
                ..ProductFilter::default()
            },
            last_id: String::new(),
            limit: 1,
        };
        let resp = products.list_products(&params).unwrap();
        assert_eq!(resp.result.items.len(), 1);
        assert_eq!(resp.result.items[0].offer_id, "mug-1");
        assert!(resp.result.items[0].has_fbo_stocks);
        assert_eq!(resp.result.last_id, "WzExXQ==");
        assert_eq!(resp.result.total, 2);

        let req = seen.lock().unwrap().take().unwrap();
        assert_eq!(req.url, "/v3/product/list");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["filter"]["visibility"], "IN_SALE");
        assert_eq!(body["limit"], 1);
    }

    #[test]
    fn update_stocks_reports_per_item_errors() {
        let products = products(|_| {
            Ok(HttpResponse::ok_json(
                r#"{"result":[
                    {"offer_id":"mug-1","product_id":11,"warehouse_id":5,"updated":true,"errors":[]},
                    {"offer_id":"ghost","warehouse_id":5,"updated":false,"errors":[{"code":"NOT_FOUND","message":"product not found"}]}
                ]}"#,
            ))
        });
        let params = UpdateStocksParams {
            stocks: vec![
                StockUpdate {
                    offer_id: "mug-1".to_string(),
                    product_id: 11,
                    stock: 4,
                    warehouse_id: 5,
                },
                StockUpdate {
                    offer_id: "ghost".to_string(),
                    stock: 1,
                    warehouse_id: 5,
                    ..StockUpdate::default()
                },
            ],
        };
        let resp = products.update_stocks(&params).unwrap();
        assert!(resp.result[0].updated);
        assert!(!resp.result[1].updated);
        assert_eq!(resp.result[1].errors[0].code, "NOT_FOUND");
    }

    #[test]
    fn visibility_wire_names() {
        assert_eq!(serde_json::to_value(ProductVisibility::All).unwrap(), "ALL");
        assert_eq!(
            serde_json::to_value(ProductVisibility::ValidationStatePending).unwrap(),
            "VALIDATION_STATE_PENDING"
        );
    }
}
