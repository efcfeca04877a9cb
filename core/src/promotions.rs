//! Marketing promotions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Promotions {
    client: Arc<ApiClient>,
}

impl Promotions {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Promotions the seller can join.
    pub fn get_available_promotions(&self) -> Result<GetAvailablePromotionsResponse, Error> {
        self.client.get("/v1/actions")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAvailablePromotionsResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: Vec<Promotion>,
}

/// A promotion. The remote encodes ids and counts as JSON numbers with no
/// integer guarantee, hence `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Promotion {
    pub id: f64,
    pub title: String,
    pub action_type: String,
    pub description: String,
    pub date_start: String,
    pub date_end: String,

    /// When the promotion stops accepting changes.
    pub freeze_date: String,

    pub potential_products_count: f64,
    pub participating_products_count: f64,
    pub is_participating: bool,

    /// Customers need a promo code to get the discount.
    pub is_voucher_action: bool,

    pub banned_products_count: f64,
    pub with_targeting: bool,

    /// Minimum order amount.
    pub order_amount: f64,

    /// `PERCENT` or `RUB`.
    pub discount_type: String,

    pub discount_value: f64,
}

impl_api_response!(GetAvailablePromotionsResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, HttpResponse, MockHttpClient};

    #[test]
    fn available_promotions_is_a_get() {
        let http = Arc::new(MockHttpClient::new(|req| {
            assert_eq!(req.method, HttpMethod::Get);
            assert_eq!(req.url, "/v1/actions");
            assert!(req.body.is_none());
            Ok(HttpResponse::ok_json(
                r#"{"result":[{"id":71342,"title":"Spring sale","action_type":"DISCOUNT","is_participating":true,"discount_type":"PERCENT","discount_value":15}]}"#,
            ))
        }));
        let promotions = Promotions::new(Arc::new(ApiClient::new(http, "", Vec::new())));

        let resp = promotions.get_available_promotions().unwrap();
        assert_eq!(resp.result.len(), 1);
        assert_eq!(resp.result[0].id, 71342.0);
        assert_eq!(resp.result[0].title, "Spring sale");
        assert!(resp.result[0].is_participating);
        assert_eq!(resp.result[0].discount_value, 15.0);
    }
}
