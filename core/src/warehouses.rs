//! Seller warehouses (FBS/rFBS).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Warehouses {
    client: Arc<ApiClient>,
}

impl Warehouses {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn list_warehouses(&self) -> Result<ListWarehousesResponse, Error> {
        self.client.post("/v1/warehouse/list", &serde_json::json!({}))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListWarehousesResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: Vec<Warehouse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warehouse {
    pub warehouse_id: i64,
    pub name: String,

    /// Trusted acceptance is enabled.
    pub has_entrusted_acceptance: bool,

    /// Warehouse works under rFBS.
    pub is_rfbs: bool,

    pub can_print_act_in_advance: bool,
    pub first_mile_type: FirstMileType,
    pub has_postings_limit: bool,

    /// Closed for quarantine.
    pub is_karantin: bool,

    /// Accepts bulky goods.
    pub is_kgt: bool,

    pub is_timetable_editable: bool,
    pub min_postings_limit: i32,
    pub postings_limit: i32,
    pub min_working_days: i64,

    /// `new`, `created`, `disabled`, `blocked`, `disabled_due_to_limit` or
    /// `error`.
    pub status: String,

    pub working_days: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstMileType {
    pub dropoff_point_id: String,
    pub dropoff_timeslot_id: i64,
    pub first_mile_is_changing: bool,

    /// `DropOff` or `Pickup`.
    pub first_mile_type: String,
}

impl_api_response!(ListWarehousesResponse);
