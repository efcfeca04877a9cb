//! Finance endpoints: realization reports, transaction totals and listings,
//! cash-flow statements.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::client::ApiClient;
use crate::common::{impl_api_response, CommonResponse};
use crate::error::Error;

/// Finance category of the seller API.
#[derive(Debug, Clone)]
pub struct Finance {
    client: Arc<ApiClient>,
}

impl Finance {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Products sold and returned during one month. Canceled and unredeemed
    /// orders are not included.
    ///
    /// The remote publishes a month's report by the 5th day of the following
    /// month.
    pub fn report_on_sold_products(
        &self,
        params: &ReportOnSoldProductsParams,
    ) -> Result<ReportOnSoldProductsResponse, Error> {
        self.client.post("/v1/finance/realization", params)
    }

    /// Totals of all transactions in a period. The period is sent exactly as
    /// given; an inverted range is for the remote to reject.
    pub fn get_total_transactions_sum(
        &self,
        params: &GetTotalTransactionsSumParams,
    ) -> Result<GetTotalTransactionsSumResponse, Error> {
        self.client.post("/v3/finance/transaction/totals", params)
    }

    /// One page of individual transactions.
    pub fn list_transactions(
        &self,
        params: &ListTransactionsParams,
    ) -> Result<ListTransactionsResponse, Error> {
        self.client.post("/v3/finance/transaction/list", params)
    }

    pub fn get_cash_flow_statement(
        &self,
        params: &GetCashFlowStatementParams,
    ) -> Result<GetCashFlowStatementResponse, Error> {
        self.client.post("/v1/finance/cash-flow-statement/list", params)
    }
}

// ---------------------------------------------------------------------------
// Realization report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOnSoldProductsParams {
    /// Month in `YYYY-MM` form.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOnSoldProductsResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: Vec<RealizationReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealizationReport {
    /// Title page.
    pub header: Vec<RealizationHeader>,

    /// Report table.
    pub rows: Vec<RealizationRow>,
}

/// Title page of a realization report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealizationHeader {
    /// Report number.
    #[serde(rename = "num")]
    pub id: String,

    pub doc_date: String,

    /// Date of the offer agreement.
    pub contract_date: String,

    /// Number of the offer agreement.
    pub contract_num: String,

    /// Currency the seller's prices are in.
    pub currency_code: String,

    /// Amount to accrue.
    pub doc_amount: f64,

    /// Amount to accrue, VAT included.
    pub vat_amount: f64,

    pub payer_inn: String,

    pub payer_kpp: String,

    pub payer_name: String,

    #[serde(rename = "rcv_inn")]
    pub recipient_inn: String,

    #[serde(rename = "rcv_kpp")]
    pub recipient_kpp: String,

    #[serde(rename = "rcv_name")]
    pub recipient_name: String,

    /// First day covered by the report.
    pub start_date: String,

    /// Last day covered by the report.
    pub stop_date: String,
}

/// One product line of a realization report.
///
/// `sale_*` fields describe units sold at `price_sale`, `return_*` fields the
/// units returned at `return_sale`. Amounts already account for quantity and
/// regional coefficients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealizationRow {
    pub row_number: i32,
    pub product_id: i64,
    pub product_name: String,
    pub barcode: String,

    /// Product identifier in the seller's own system.
    pub offer_id: String,

    /// Category sales commission, percent.
    pub commission_percent: f64,

    /// Seller's price with the seller's discount applied.
    pub price: f64,

    /// Price the customer paid.
    pub price_sale: f64,

    pub sale_amount: f64,

    /// Commission on sold units after discounts and extra charges.
    pub sale_commission: f64,

    /// Extra charge covered by Ozon when its discount reaches the commission.
    pub sale_discount: f64,

    /// Total accrued for sold units.
    pub sale_price_seller: f64,

    #[serde(rename = "sale_qty")]
    pub sale_quantity: i32,

    pub return_sale: f64,
    pub return_amount: f64,
    pub return_commission: f64,
    pub return_discount: f64,

    /// Charged to the seller for returned units.
    pub return_price_seller: f64,

    #[serde(rename = "return_qty")]
    pub return_quantity: i32,
}

// ---------------------------------------------------------------------------
// Transaction totals
// ---------------------------------------------------------------------------

/// Category of transactions to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    #[default]
    All,
    Orders,
    /// Returns and cancellations.
    Returns,
    /// Service fees.
    Services,
    Compensation,
    /// Delivery cost.
    TransferDelivery,
    Other,
}

/// Inclusive period filter, sent as RFC 3339 timestamps
/// (`2019-11-25T10:43:06.51Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPeriod {
    #[serde(with = "time::serde::rfc3339")]
    pub from: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTotalTransactionsSumParams {
    pub date: TransactionPeriod,

    /// Restrict to one shipment; empty for all.
    pub posting_number: String,

    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTotalTransactionsSumResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: TransactionTotals,
}

/// Transaction sums for a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionTotals {
    /// Cost of products and returns.
    pub accruals_for_sale: f64,

    /// The remote spells this key `compensatino_amount`.
    #[serde(rename = "compensatino_amount")]
    pub compensation_amount: f64,

    /// Delivery and return charges under the rFBS scheme.
    pub money_transfer: f64,

    pub others_amount: f64,

    /// Shipment processing, packaging, pipeline and last-mile costs under the
    /// rates that applied before February 1, 2021.
    pub processing_and_delivery: f64,

    /// Reverse pipeline and processing of returned, canceled and unredeemed
    /// orders under the pre-February 2021 rates.
    pub refunds_and_cancellations: f64,

    /// Withheld on sale, refunded on return.
    pub sale_commission: f64,

    /// Services not tied to delivery or returns, such as promotion.
    pub services_amount: f64,
}

// ---------------------------------------------------------------------------
// Transaction list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTransactionsParams {
    pub filter: TransactionFilter,

    /// 1-based page number.
    pub page: i64,

    pub page_size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub date: TransactionPeriod,

    /// Remote operation type codes, e.g. `OperationAgentDeliveredToCustomer`.
    pub operation_type: Vec<String>,

    pub posting_number: String,

    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTransactionsResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: TransactionPage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionPage {
    pub operations: Vec<Operation>,
    pub page_count: i64,
    pub row_count: i64,
}

/// A single financial operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub accruals_for_sale: f64,

    /// Net effect of the operation.
    pub amount: f64,

    pub delivery_charge: f64,
    pub items: Vec<OperationItem>,

    /// `YYYY-MM-DD HH:MM:SS`.
    pub operation_date: String,

    pub operation_id: i64,
    pub operation_type: String,
    pub operation_type_name: String,
    pub posting: OperationPosting,
    pub return_delivery_charge: f64,
    pub sale_commission: f64,
    pub services: Vec<OperationService>,

    /// Transaction category, e.g. `orders` or `services`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationItem {
    pub name: String,
    pub sku: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationPosting {
    /// `FBO`, `FBS` or `RFBS`.
    pub delivery_schema: String,
    pub order_date: String,
    pub posting_number: String,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationService {
    pub name: String,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// Cash-flow statement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCashFlowStatementParams {
    pub date: TransactionPeriod,
    pub with_details: bool,
    pub page: i32,
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCashFlowStatementResponse {
    #[serde(flatten)]
    pub common: CommonResponse,

    pub result: CashFlowStatement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowStatement {
    pub cash_flows: Vec<CashFlow>,
    pub page_count: i64,
}

/// Settlement summary for one payout period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlow {
    pub commission_amount: f64,
    pub currency_code: String,
    pub item_delivery_and_return_amount: f64,
    pub orders_amount: f64,
    pub period: CashFlowPeriod,
    pub returns_amount: f64,
    pub services_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowPeriod {
    pub begin: String,
    pub end: String,
    pub id: i64,
}

impl_api_response!(
    ReportOnSoldProductsResponse,
    GetTotalTransactionsSumResponse,
    ListTransactionsResponse,
    GetCashFlowStatementResponse,
);
