//! Seller rating indicators and their thresholds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

/// Seller rating category.
#[derive(Debug, Clone)]
pub struct Rating {
    client: Arc<ApiClient>,
}

impl Rating {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Current values of all seller rating indicators.
    pub fn get_current_rating_info(&self) -> Result<GetCurrentRatingInfoResponse, Error> {
        self.client.post("/v1/rating/summary", &serde_json::json!({}))
    }
}

/// Unlike most responses this one has no `result` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCurrentRatingInfoResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub groups: Vec<RatingGroup>,

    /// Penalty points exceed the limit.
    pub penalty_score_exceeded: bool,

    /// Seller has a Premium subscription.
    pub premium: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingGroup {
    pub group_name: String,
    pub items: Vec<RatingItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingItem {
    pub change: RatingChange,
    pub current_value: f64,
    pub name: String,
    pub past_value: f64,

    /// System name of the indicator, e.g. `rating_on_time`.
    pub rating: String,

    /// `UNKNOWN_DIRECTION`, `NEUTRAL`, `HIGHER_IS_BETTER` or
    /// `LOWER_IS_BETTER`.
    pub rating_direction: String,

    /// `UNKNOWN_STATUS`, `OK`, `WARNING` or `CRITICAL`.
    pub status: String,

    pub value_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingChange {
    pub direction: String,
    pub meaning: String,
}

impl_api_response!(GetCurrentRatingInfoResponse);
