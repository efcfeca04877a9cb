//! FBO (fulfilled by Ozon) postings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Fbo {
    client: Arc<ApiClient>,
}

impl Fbo {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Shipments created within the filter's period, `offset`-paginated.
    pub fn list_postings(&self, params: &ListPostingsParams) -> Result<ListPostingsResponse, Error> {
        self.client.post("/v2/posting/fbo/list", params)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostingsParams {
    pub dir: SortDirection,
    pub filter: PostingFilter,
    pub limit: i64,
    pub offset: i64,

    /// Transliterate addresses from Cyrillic.
    pub translit: bool,

    pub with: PostingExtras,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingFilter {
    #[serde(with = "time::serde::rfc3339")]
    pub since: OffsetDateTime,

    /// Posting status, e.g. `awaiting_packaging` or `delivered`; empty for
    /// all.
    pub status: String,

    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
}

/// Optional blocks to include in each posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingExtras {
    pub analytics_data: bool,
    pub financial_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPostingsResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: Vec<Posting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Posting {
    /// Present when requested through `PostingExtras::analytics_data`.
    pub analytics_data: Option<PostingAnalytics>,

    pub cancel_reason_id: i64,
    pub created_at: String,

    /// Present when requested through `PostingExtras::financial_data`.
    pub financial_data: Option<PostingFinancial>,

    pub in_process_at: String,
    pub order_id: i64,
    pub order_number: String,
    pub posting_number: String,
    pub products: Vec<PostingProduct>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingAnalytics {
    pub city: String,
    pub delivery_type: String,
    pub is_legal: bool,
    pub is_premium: bool,
    pub payment_type_group_name: String,
    pub region: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingFinancial {
    /// Shipping cluster code.
    pub cluster_from: String,
    /// Delivery cluster code.
    pub cluster_to: String,
    pub products: Vec<PostingFinancialProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingFinancialProduct {
    /// Promotions applied to the product.
    pub actions: Vec<String>,

    pub client_price: String,
    pub commission_amount: f64,
    pub commission_percent: i64,
    pub currency_code: String,
    pub old_price: f64,
    pub payout: f64,
    pub price: f64,
    pub product_id: i64,
    pub total_discount_percent: f64,
    pub total_discount_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingProduct {
    pub digital_codes: Vec<String>,
    pub name: String,
    pub offer_id: String,
    pub currency_code: String,

    /// Decimal string, e.g. `"279.0000"`.
    pub price: String,

    pub quantity: i64,
    pub sku: i64,
}

impl_api_response!(ListPostingsResponse);

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use time::macros::datetime;

    use super::*;
    use crate::http::{HttpRequest, HttpResponse, MockHttpClient};

    #[test]
    fn list_postings_round_trip() {
        let seen: Arc<Mutex<Option<HttpRequest>>> = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let http = Arc::new(MockHttpClient::new(move |req| {
            *sink.lock().unwrap() = Some(req.clone());
            Ok(HttpResponse::ok_json(
                r#"{"result":[{
                    "order_id": 354679434,
                    "order_number": "50958030-0006",
                    "posting_number": "50958030-0006-1",
                    "status": "delivered",
                    "created_at": "2023-05-02T09:16:27.313Z",
                    "products": [{"sku": 1001, "name": "Mug", "offer_id": "mug-1", "price": "279.0000", "quantity": 2, "currency_code": "RUB"}]
                }]}"#,
            ))
        }));
        let fbo = Fbo::new(Arc::new(ApiClient::new(http, "", Vec::new())));

        let params = ListPostingsParams {
            dir: SortDirection::Desc,
            filter: PostingFilter {
                since: datetime!(2023-05-01 00:00:00 UTC),
                status: String::new(),
                to: datetime!(2023-05-31 23:59:59 UTC),
            },
            limit: 50,
            offset: 0,
            translit: false,
            with: PostingExtras {
                analytics_data: true,
                financial_data: false,
            },
        };
        let resp = fbo.list_postings(&params).unwrap();
        assert_eq!(resp.result[0].posting_number, "50958030-0006-1");
        assert_eq!(resp.result[0].products[0].price, "279.0000");
        assert_eq!(resp.result[0].products[0].quantity, 2);

        let req = seen.lock().unwrap().take().unwrap();
        assert_eq!(req.url, "/v2/posting/fbo/list");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["dir"], "DESC");
        assert_eq!(body["filter"]["since"], "2023-05-01T00:00:00Z");
        assert_eq!(body["with"]["analytics_data"], true);
    }

    #[test]
    fn requested_blocks_and_null_timestamps_decode() {
        let http = Arc::new(MockHttpClient::new(|_| {
            Ok(HttpResponse::ok_json(
                r#"{"result":[{
                    "posting_number": "50958030-0006-1",
                    "in_process_at": null,
                    "analytics_data": {
                        "region": "Moscow",
                        "city": "Moscow",
                        "delivery_type": "PVZ",
                        "is_premium": false,
                        "payment_type_group_name": "Card",
                        "warehouse_id": 5,
                        "warehouse_name": "Main",
                        "is_legal": false
                    },
                    "financial_data": {
                        "cluster_from": "MSK",
                        "cluster_to": "SPB",
                        "products": [{
                            "product_id": 11,
                            "price": 279.0,
                            "old_price": 319.0,
                            "payout": 230.5,
                            "commission_amount": 48.5,
                            "commission_percent": 17,
                            "total_discount_value": 40.0,
                            "total_discount_percent": 12.54,
                            "actions": ["Summer sale"],
                            "client_price": "",
                            "currency_code": "RUB"
                        }]
                    }
                }, {
                    "posting_number": "50958030-0007-1",
                    "analytics_data": null,
                    "financial_data": null
                }]}"#,
            ))
        }));
        let fbo = Fbo::new(Arc::new(ApiClient::new(http, "", Vec::new())));

        let params = ListPostingsParams {
            dir: SortDirection::Asc,
            filter: PostingFilter {
                since: datetime!(2023-05-01 00:00:00 UTC),
                status: String::new(),
                to: datetime!(2023-05-31 23:59:59 UTC),
            },
            limit: 10,
            offset: 0,
            translit: false,
            with: PostingExtras {
                analytics_data: true,
                financial_data: true,
            },
        };
        let resp = fbo.list_postings(&params).unwrap();

        let first = &resp.result[0];
        assert_eq!(first.in_process_at, "");
        let analytics = first.analytics_data.as_ref().unwrap();
        assert_eq!(analytics.warehouse_name, "Main");
        assert_eq!(analytics.delivery_type, "PVZ");
        let financial = first.financial_data.as_ref().unwrap();
        assert_eq!(financial.cluster_to, "SPB");
        assert_eq!(financial.products[0].payout, 230.5);
        assert_eq!(financial.products[0].actions, vec!["Summer sale".to_string()]);

        assert!(resp.result[1].analytics_data.is_none());
        assert!(resp.result[1].financial_data.is_none());
    }
}
