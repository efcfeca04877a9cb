use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, macros::datetime, OffsetDateTime};
use tokio::{net::TcpListener, sync::RwLock};

/// Remote result code for rejected arguments.
pub const CODE_INVALID_ARGUMENT: i32 = 3;
/// Remote result code for missing or bad credentials.
pub const CODE_UNAUTHENTICATED: i32 = 16;

#[derive(Clone, Debug)]
pub struct Product {
    pub product_id: i64,
    pub offer_id: String,
    pub name: String,
    pub price: f64,
    pub warehouse_id: i64,
    pub stock: i64,
    pub sold: i32,
    pub returned: i32,
    pub archived: bool,
}

#[derive(Clone, Debug)]
pub struct Operation {
    pub operation_id: i64,
    pub operation_date: OffsetDateTime,
    pub operation_type: String,
    /// `orders`, `returns`, `services`, ...
    pub kind: String,
    pub posting_number: String,
    pub accruals_for_sale: f64,
    pub sale_commission: f64,
    pub services_amount: f64,
}

impl Operation {
    fn amount(&self) -> f64 {
        self.accruals_for_sale + self.sale_commission + self.services_amount
    }
}

#[derive(Clone, Debug)]
pub struct Posting {
    pub posting_number: String,
    pub order_id: i64,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Warehouse {
    pub warehouse_id: i64,
    pub name: String,
    pub is_rfbs: bool,
    pub status: String,
}

/// In-memory seller account served by the mock.
#[derive(Clone, Debug)]
pub struct Seller {
    pub products: Vec<Product>,
    pub operations: Vec<Operation>,
    pub postings: Vec<Posting>,
    pub warehouses: Vec<Warehouse>,
}

impl Default for Seller {
    fn default() -> Self {
        Self {
            products: vec![
                Product {
                    product_id: 11,
                    offer_id: "mug-1".to_string(),
                    name: "Mug".to_string(),
                    price: 300.0,
                    warehouse_id: 5,
                    stock: 12,
                    sold: 3,
                    returned: 0,
                    archived: false,
                },
                Product {
                    product_id: 12,
                    offer_id: "plate-1".to_string(),
                    name: "Plate".to_string(),
                    price: 450.0,
                    warehouse_id: 5,
                    stock: 0,
                    sold: 1,
                    returned: 1,
                    archived: false,
                },
                Product {
                    product_id: 13,
                    offer_id: "bowl-1".to_string(),
                    name: "Bowl".to_string(),
                    price: 200.0,
                    warehouse_id: 5,
                    stock: 7,
                    sold: 0,
                    returned: 0,
                    archived: true,
                },
            ],
            operations: vec![
                Operation {
                    operation_id: 900,
                    operation_date: datetime!(2023-05-03 10:00:00 UTC),
                    operation_type: "OperationAgentDeliveredToCustomer".to_string(),
                    kind: "orders".to_string(),
                    posting_number: "50958030-0006-1".to_string(),
                    accruals_for_sale: 900.0,
                    sale_commission: -108.0,
                    services_amount: 0.0,
                },
                Operation {
                    operation_id: 901,
                    operation_date: datetime!(2023-05-10 12:30:00 UTC),
                    operation_type: "OperationItemReturn".to_string(),
                    kind: "returns".to_string(),
                    posting_number: "50958031-0001-1".to_string(),
                    accruals_for_sale: -450.0,
                    sale_commission: 54.0,
                    services_amount: 0.0,
                },
                Operation {
                    operation_id: 902,
                    operation_date: datetime!(2023-05-20 08:00:00 UTC),
                    operation_type: "OperationMarketplaceServiceStorage".to_string(),
                    kind: "services".to_string(),
                    posting_number: String::new(),
                    accruals_for_sale: 0.0,
                    sale_commission: 0.0,
                    services_amount: -35.5,
                },
                Operation {
                    operation_id: 903,
                    operation_date: datetime!(2023-06-02 09:00:00 UTC),
                    operation_type: "OperationAgentDeliveredToCustomer".to_string(),
                    kind: "orders".to_string(),
                    posting_number: "50958032-0002-1".to_string(),
                    accruals_for_sale: 300.0,
                    sale_commission: -36.0,
                    services_amount: 0.0,
                },
            ],
            postings: vec![
                Posting {
                    posting_number: "50958030-0006-1".to_string(),
                    order_id: 354679434,
                    status: "delivered".to_string(),
                    created_at: datetime!(2023-05-02 09:16:27.313 UTC),
                    product_id: 11,
                    quantity: 3,
                },
                Posting {
                    posting_number: "50958032-0002-1".to_string(),
                    order_id: 354679502,
                    status: "delivering".to_string(),
                    created_at: datetime!(2023-06-01 14:00:00 UTC),
                    product_id: 11,
                    quantity: 1,
                },
            ],
            warehouses: vec![Warehouse {
                warehouse_id: 5,
                name: "Main".to_string(),
                is_rfbs: false,
                status: "created".to_string(),
            }],
        }
    }
}

pub type Db = Arc<RwLock<Seller>>;

pub fn app() -> Router {
    app_with(Seller::default())
}

pub fn app_with(seller: Seller) -> Router {
    let db: Db = Arc::new(RwLock::new(seller));
    Router::new()
        .route("/v1/finance/realization", post(realization))
        .route("/v3/finance/transaction/totals", post(transaction_totals))
        .route("/v3/finance/transaction/list", post(transaction_list))
        .route("/v1/finance/cash-flow-statement/list", post(cash_flow_statement))
        .route("/v3/product/list", post(product_list))
        .route("/v2/products/stocks", post(update_stocks))
        .route("/v2/posting/fbo/list", post(fbo_postings))
        .route("/v1/actions", get(actions))
        .route("/v1/rating/summary", post(rating_summary))
        .route("/v1/warehouse/list", post(warehouse_list))
        .layer(middleware::from_fn(require_credentials))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("seller API mock listening on {addr}");
    }
    axum::serve(listener, app()).await
}

/// Error body in the seller API's envelope shape.
fn reject(status: StatusCode, code: i32, message: &str) -> Response {
    log::debug!("rejecting with {status}: {message}");
    (
        status,
        Json(json!({ "code": code, "message": message, "details": [] })),
    )
        .into_response()
}

fn has_header(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.is_empty())
}

async fn require_credentials(request: Request, next: Next) -> Response {
    let headers = request.headers();
    if !has_header(headers, "client-id") || !has_header(headers, "api-key") {
        return reject(
            StatusCode::UNAUTHORIZED,
            CODE_UNAUTHENTICATED,
            "Client-Id and Api-Key headers are required",
        );
    }
    log::debug!("{} {}", request.method(), request.uri());
    next.run(request).await
}

// ---------------------------------------------------------------------------
// Finance
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct RealizationQuery {
    pub date: String,
}

/// `YYYY-MM` with a month in 1..=12.
fn is_month(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };
    year.len() == 4
        && month.len() == 2
        && year.bytes().all(|b| b.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12))
}

async fn realization(State(db): State<Db>, Json(input): Json<RealizationQuery>) -> Response {
    if !is_month(&input.date) {
        return reject(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_ARGUMENT,
            "date must be in YYYY-MM format",
        );
    }

    let seller = db.read().await;
    let rows: Vec<Value> = seller
        .products
        .iter()
        .filter(|p| p.sold > 0 || p.returned > 0)
        .enumerate()
        .map(|(i, p)| {
            json!({
                "row_number": i + 1,
                "product_id": p.product_id,
                "product_name": p.name,
                "offer_id": p.offer_id,
                "price": p.price,
                "price_sale": p.price,
                "sale_qty": p.sold,
                "sale_amount": p.price * f64::from(p.sold),
                "sale_price_seller": p.price * f64::from(p.sold) * 0.88,
                "return_qty": p.returned,
                "return_amount": p.price * f64::from(p.returned),
                "return_price_seller": p.price * f64::from(p.returned) * 0.88,
            })
        })
        .collect();
    let doc_amount: f64 = seller
        .products
        .iter()
        .map(|p| p.price * f64::from(p.sold - p.returned) * 0.88)
        .sum();

    Json(json!({
        "result": [{
            "header": [{
                "num": format!("R-{}-001", input.date),
                "currency_code": "RUB",
                "doc_amount": doc_amount,
                "payer_name": "Ozon",
                "rcv_name": "Mock Seller",
                "start_date": format!("{}-01", input.date),
            }],
            "rows": rows,
        }]
    }))
    .into_response()
}

#[derive(Deserialize)]
pub struct Period {
    #[serde(with = "time::serde::rfc3339")]
    pub from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
}

impl Period {
    fn contains(&self, at: OffsetDateTime) -> bool {
        self.from <= at && at <= self.to
    }

    fn validate(&self) -> Result<(), Response> {
        if self.from > self.to {
            return Err(reject(
                StatusCode::BAD_REQUEST,
                CODE_INVALID_ARGUMENT,
                "date.from must not be after date.to",
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct TransactionQuery {
    pub date: Period,
    #[serde(default)]
    pub posting_number: String,
    #[serde(default)]
    pub transaction_type: String,
}

impl TransactionQuery {
    fn matches(&self, op: &Operation) -> bool {
        self.date.contains(op.operation_date)
            && (self.posting_number.is_empty() || self.posting_number == op.posting_number)
            && (self.transaction_type.is_empty()
                || self.transaction_type == "all"
                || self.transaction_type == op.kind)
    }
}

async fn transaction_totals(State(db): State<Db>, Json(input): Json<TransactionQuery>) -> Response {
    if let Err(rejection) = input.date.validate() {
        return rejection;
    }

    let seller = db.read().await;
    let matching = seller.operations.iter().filter(|op| input.matches(op));
    let (mut accruals, mut commission, mut services) = (0.0, 0.0, 0.0);
    for op in matching {
        accruals += op.accruals_for_sale;
        commission += op.sale_commission;
        services += op.services_amount;
    }

    Json(json!({
        "result": {
            "accruals_for_sale": accruals,
            "sale_commission": commission,
            "services_amount": services,
            "compensatino_amount": 0.0,
        }
    }))
    .into_response()
}

#[derive(Deserialize)]
pub struct TransactionListQuery {
    pub filter: TransactionQuery,
    pub page: i64,
    pub page_size: i64,
}

fn operation_json(op: &Operation) -> Value {
    json!({
        "operation_id": op.operation_id,
        "operation_type": op.operation_type,
        "operation_date": format_operation_date(op.operation_date),
        "type": op.kind,
        "amount": op.amount(),
        "accruals_for_sale": op.accruals_for_sale,
        "sale_commission": op.sale_commission,
        "posting": { "posting_number": op.posting_number, "delivery_schema": "FBO" },
        "items": [],
        "services": [],
    })
}

/// The remote renders operation dates as `YYYY-MM-DD HH:MM:SS`.
fn format_operation_date(at: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

async fn transaction_list(
    State(db): State<Db>,
    Json(input): Json<TransactionListQuery>,
) -> Response {
    if let Err(rejection) = input.filter.date.validate() {
        return rejection;
    }
    if input.page < 1 || input.page_size < 1 {
        return reject(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_ARGUMENT,
            "page and page_size must be positive",
        );
    }

    let seller = db.read().await;
    let matching: Vec<&Operation> = seller
        .operations
        .iter()
        .filter(|op| input.filter.matches(op))
        .collect();
    let row_count = matching.len() as i64;
    let page_count = row_count / input.page_size + i64::from(row_count % input.page_size != 0);
    let Some(skip) = (input.page - 1).checked_mul(input.page_size) else {
        return reject(StatusCode::BAD_REQUEST, CODE_INVALID_ARGUMENT, "page is out of range");
    };
    let operations: Vec<Value> = matching
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(usize::MAX))
        .take(usize::try_from(input.page_size).unwrap_or(usize::MAX))
        .map(operation_json)
        .collect();

    Json(json!({
        "result": {
            "operations": operations,
            "page_count": page_count,
            "row_count": row_count,
        }
    }))
    .into_response()
}

fn sum_of_kind(ops: &[&Operation], kind: &str, field: fn(&Operation) -> f64) -> f64 {
    ops.iter().filter(|op| op.kind == kind).map(|op| field(op)).sum()
}

#[derive(Deserialize)]
pub struct CashFlowQuery {
    pub date: Period,
    #[serde(default)]
    pub with_details: bool,
    pub page: i32,
    pub page_size: i32,
}

async fn cash_flow_statement(State(db): State<Db>, Json(input): Json<CashFlowQuery>) -> Response {
    if let Err(rejection) = input.date.validate() {
        return rejection;
    }
    if input.with_details {
        log::debug!("cash-flow details are not simulated");
    }
    log::trace!("cash-flow page {} size {}", input.page, input.page_size);

    let seller = db.read().await;
    let in_period: Vec<&Operation> = seller
        .operations
        .iter()
        .filter(|op| input.date.contains(op.operation_date))
        .collect();
    let from = input.date.from.format(&Rfc3339).unwrap_or_default();
    let to = input.date.to.format(&Rfc3339).unwrap_or_default();

    Json(json!({
        "result": {
            "cash_flows": [{
                "period": { "id": 1, "begin": from, "end": to },
                "currency_code": "RUB",
                "orders_amount": sum_of_kind(&in_period, "orders", |op| op.accruals_for_sale),
                "returns_amount": sum_of_kind(&in_period, "returns", |op| op.accruals_for_sale),
                "commission_amount": in_period.iter().map(|op| op.sale_commission).sum::<f64>(),
                "services_amount": sum_of_kind(&in_period, "services", |op| op.services_amount),
                "item_delivery_and_return_amount": 0.0,
            }],
            "page_count": 1,
        }
    }))
    .into_response()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ProductFilter {
    pub offer_id: Vec<String>,
    pub product_id: Vec<i64>,
    pub visibility: String,
}

#[derive(Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub filter: ProductFilter,
    #[serde(default)]
    pub last_id: String,
    pub limit: i64,
}

async fn product_list(State(db): State<Db>, Json(input): Json<ProductListQuery>) -> Response {
    if !(1..=1000).contains(&input.limit) {
        return reject(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_ARGUMENT,
            "limit must be between 1 and 1000",
        );
    }
    let after: i64 = if input.last_id.is_empty() {
        0
    } else {
        match input.last_id.parse() {
            Ok(id) => id,
            Err(_) => {
                return reject(StatusCode::BAD_REQUEST, CODE_INVALID_ARGUMENT, "invalid last_id")
            }
        }
    };

    let seller = db.read().await;
    let filter = &input.filter;
    let matching: Vec<&Product> = seller
        .products
        .iter()
        .filter(|p| filter.offer_id.is_empty() || filter.offer_id.contains(&p.offer_id))
        .filter(|p| filter.product_id.is_empty() || filter.product_id.contains(&p.product_id))
        .filter(|p| match filter.visibility.as_str() {
            "ARCHIVED" => p.archived,
            "" | "ALL" => true,
            _ => !p.archived,
        })
        .collect();
    let total = matching.len();
    let page: Vec<&Product> = matching
        .into_iter()
        .filter(|p| p.product_id > after)
        .take(input.limit as usize)
        .collect();
    let last_id = match page.last() {
        Some(last) if page.len() as i64 == input.limit => last.product_id.to_string(),
        _ => String::new(),
    };
    let items: Vec<Value> = page
        .iter()
        .map(|p| {
            json!({
                "product_id": p.product_id,
                "offer_id": p.offer_id,
                "archived": p.archived,
                "has_fbo_stocks": false,
                "has_fbs_stocks": p.stock > 0,
                "is_discounted": false,
            })
        })
        .collect();

    Json(json!({
        "result": { "items": items, "last_id": last_id, "total": total }
    }))
    .into_response()
}

#[derive(Deserialize)]
pub struct StockUpdate {
    #[serde(default)]
    pub offer_id: String,
    #[serde(default)]
    pub product_id: i64,
    pub stock: i64,
    pub warehouse_id: i64,
}

#[derive(Deserialize)]
pub struct StocksInput {
    pub stocks: Vec<StockUpdate>,
}

async fn update_stocks(State(db): State<Db>, Json(input): Json<StocksInput>) -> Json<Value> {
    let mut seller = db.write().await;
    let known_warehouses: Vec<i64> = seller.warehouses.iter().map(|w| w.warehouse_id).collect();

    let results: Vec<Value> = input
        .stocks
        .iter()
        .map(|update| {
            let error = if !known_warehouses.contains(&update.warehouse_id) {
                Some(("WAREHOUSE_NOT_FOUND", "warehouse not found"))
            } else if update.stock < 0 {
                Some(("INVALID_STOCK", "stock must not be negative"))
            } else {
                let product = seller.products.iter_mut().find(|p| {
                    (!update.offer_id.is_empty() && p.offer_id == update.offer_id)
                        || (update.product_id != 0 && p.product_id == update.product_id)
                });
                match product {
                    Some(product) => {
                        product.stock = update.stock;
                        product.warehouse_id = update.warehouse_id;
                        None
                    }
                    None => Some(("NOT_FOUND", "product not found")),
                }
            };
            let errors: Vec<Value> = error
                .map(|(code, message)| json!({ "code": code, "message": message }))
                .into_iter()
                .collect();
            json!({
                "offer_id": update.offer_id,
                "product_id": update.product_id,
                "warehouse_id": update.warehouse_id,
                "updated": errors.is_empty(),
                "errors": errors,
            })
        })
        .collect();

    Json(json!({ "result": results }))
}

// ---------------------------------------------------------------------------
// FBO, promotions, rating, warehouses
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct PostingFilter {
    #[serde(with = "time::serde::rfc3339")]
    pub since: OffsetDateTime,
    #[serde(default)]
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
}

#[derive(Deserialize)]
pub struct PostingListQuery {
    #[serde(default)]
    pub dir: String,
    pub filter: PostingFilter,
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub with: PostingExtras,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PostingExtras {
    pub analytics_data: bool,
    pub financial_data: bool,
}

/// Commission the mock charges on every sale, in percent.
const COMMISSION_PERCENT: i64 = 12;

async fn fbo_postings(State(db): State<Db>, Json(input): Json<PostingListQuery>) -> Response {
    if input.filter.since > input.filter.to {
        return reject(
            StatusCode::BAD_REQUEST,
            CODE_INVALID_ARGUMENT,
            "filter.since must not be after filter.to",
        );
    }

    let seller = db.read().await;
    let mut postings: Vec<&Posting> = seller
        .postings
        .iter()
        .filter(|p| input.filter.since <= p.created_at && p.created_at <= input.filter.to)
        .filter(|p| input.filter.status.is_empty() || input.filter.status == p.status)
        .collect();
    postings.sort_by_key(|p| p.created_at);
    if input.dir.eq_ignore_ascii_case("desc") {
        postings.reverse();
    }

    let result: Vec<Value> = postings
        .into_iter()
        .skip(input.offset.max(0) as usize)
        .take(input.limit.max(0) as usize)
        .map(|p| {
            let product = seller.products.iter().find(|pr| pr.product_id == p.product_id);
            let analytics = input.with.analytics_data.then(|| {
                let warehouse_id = product.map(|pr| pr.warehouse_id).unwrap_or_default();
                let warehouse = seller.warehouses.iter().find(|w| w.warehouse_id == warehouse_id);
                json!({
                    "region": "Moscow",
                    "city": "Moscow",
                    "delivery_type": "PVZ",
                    "is_premium": false,
                    "payment_type_group_name": "Card",
                    "warehouse_id": warehouse_id,
                    "warehouse_name": warehouse.map(|w| w.name.as_str()).unwrap_or_default(),
                    "is_legal": false,
                })
            });
            let financial = input.with.financial_data.then(|| {
                let price = product.map(|pr| pr.price).unwrap_or_default();
                let commission = price * COMMISSION_PERCENT as f64 / 100.0;
                json!({
                    "cluster_from": "MSK",
                    "cluster_to": "MSK",
                    "products": [{
                        "product_id": p.product_id,
                        "price": price,
                        "old_price": price,
                        "payout": price - commission,
                        "commission_amount": commission,
                        "commission_percent": COMMISSION_PERCENT,
                        "total_discount_value": 0.0,
                        "total_discount_percent": 0.0,
                        "actions": [],
                        "client_price": "",
                        "currency_code": "RUB",
                    }],
                })
            });
            json!({
                "analytics_data": analytics,
                "financial_data": financial,
                "order_id": p.order_id,
                "order_number": p.posting_number.rsplit_once('-').map(|(n, _)| n).unwrap_or_default(),
                "posting_number": p.posting_number,
                "status": p.status,
                "created_at": p.created_at.format(&Rfc3339).unwrap_or_default(),
                "in_process_at": p.created_at.format(&Rfc3339).unwrap_or_default(),
                "products": [{
                    "sku": p.product_id + 1000,
                    "name": product.map(|pr| pr.name.as_str()).unwrap_or_default(),
                    "offer_id": product.map(|pr| pr.offer_id.as_str()).unwrap_or_default(),
                    "price": format!("{:.4}", product.map(|pr| pr.price).unwrap_or_default()),
                    "currency_code": "RUB",
                    "quantity": p.quantity,
                    "digital_codes": [],
                }],
            })
        })
        .collect();

    Json(json!({ "result": result })).into_response()
}

async fn actions() -> Json<Value> {
    Json(json!({
        "result": [{
            "id": 71342,
            "title": "Spring sale",
            "action_type": "DISCOUNT",
            "date_start": "2023-05-01T00:00:00Z",
            "date_end": "2023-05-31T23:59:59Z",
            "potential_products_count": 3,
            "participating_products_count": 1,
            "is_participating": true,
            "discount_type": "PERCENT",
            "discount_value": 15,
        }]
    }))
}

async fn rating_summary() -> Json<Value> {
    Json(json!({
        "groups": [{
            "group_name": "Delivery",
            "items": [{
                "rating": "rating_on_time",
                "name": "On-time delivery",
                "current_value": 97.5,
                "past_value": 96.0,
                "status": "OK",
                "rating_direction": "HIGHER_IS_BETTER",
                "value_type": "PERCENT",
                "change": { "direction": "DIRECTION_RISE", "meaning": "MEANING_GOOD" },
            }],
        }],
        "penalty_score_exceeded": false,
        "premium": false,
    }))
}

async fn warehouse_list(State(db): State<Db>) -> Json<Value> {
    let seller = db.read().await;
    Json(json!({ "result": seller.warehouses }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_format() {
        assert!(is_month("2023-05"));
        assert!(is_month("2023-12"));
        assert!(!is_month("2023-13"));
        assert!(!is_month("2023-5"));
        assert!(!is_month("23-05"));
        assert!(!is_month("2023-05-01"));
        assert!(!is_month(""));
    }

    #[test]
    fn operation_date_uses_space_separator() {
        assert_eq!(
            format_operation_date(datetime!(2023-05-03 10:00:00 UTC)),
            "2023-05-03 10:00:00"
        );
    }
}
