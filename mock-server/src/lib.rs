//! In-process mock of the seller API.
//!
//! Serves deterministic fixtures for the read endpoints and keeps chats in an
//! in-memory store, so the client can be exercised over real HTTP. Every
//! route sits behind a credential check; failures use the API's common error
//! shape `{code, message, details}`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, Request, State,
    },
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

mod fixtures;

pub const CLIENT_ID_HEADER: &str = "Client-Id";
pub const API_KEY_HEADER: &str = "Api-Key";

/// gRPC-style codes the API reports in its error envelope.
const CODE_INVALID_ARGUMENT: i64 = 3;
const CODE_NOT_FOUND: i64 = 5;
const CODE_UNAUTHENTICATED: i64 = 16;

const CHAT_CREATED_AT: &str = "2022-07-18T20:58:04.528Z";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chat {
    pub chat_id: Uuid,
    pub posting_number: String,
    pub chat_status: String,
    pub messages: Vec<Message>,
    #[serde(skip)]
    seq: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub message_id: u64,
    pub user: MessageUser,
    pub created_at: String,
    pub is_read: bool,
    pub data: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageUser {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Default)]
pub struct ChatStore {
    chats: HashMap<Uuid, Chat>,
    next_seq: u64,
    next_message_id: u64,
}

impl ChatStore {
    fn ordered(&self) -> Vec<&Chat> {
        let mut chats: Vec<&Chat> = self.chats.values().collect();
        chats.sort_by_key(|chat| chat.seq);
        chats
    }
}

pub type Db = Arc<RwLock<ChatStore>>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductFilter {
    offer_id: Vec<String>,
    product_id: Vec<i64>,
    visibility: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListProducts {
    filter: ProductFilter,
    limit: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductInfo {
    offer_id: String,
    product_id: i64,
    sku: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StockUpdate {
    offer_id: String,
    product_id: i64,
    stock: i64,
    warehouse_id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateStocks {
    stocks: Vec<StockUpdate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostingFilter {
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListPostings {
    dir: String,
    filter: PostingFilter,
    limit: i64,
    offset: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GetPosting {
    posting_number: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransactionFilter {
    posting_number: String,
    transaction_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListTransactions {
    filter: TransactionFilter,
    page: i64,
    page_size: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StocksOnWarehouses {
    limit: i64,
    offset: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChatFilter {
    chat_status: String,
    unread_only: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListChats {
    filter: ChatFilter,
    limit: i64,
    offset: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StartChat {
    posting_number: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SendMessage {
    chat_id: String,
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChatHistory {
    chat_id: String,
    direction: String,
    from_message_id: Option<u64>,
    limit: i64,
}

#[derive(Debug, Default, Deserialize)]
struct FboReturnsQuery {
    posting_number: Option<String>,
    status: Option<String>,
    last_id: Option<i64>,
    limit: Option<i64>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(ChatStore::default()));
    Router::new()
        .route("/v1/warehouse/list", post(list_warehouses))
        .route("/v3/product/list", post(list_products))
        .route("/v2/product/info", post(product_info))
        .route("/v2/products/stocks", post(update_stocks))
        .route("/v3/posting/fbs/list", post(list_postings))
        .route("/v3/posting/fbs/get", post(get_posting))
        .route("/v3/finance/transaction/list", post(list_transactions))
        .route("/v2/analytics/stock_on_warehouses", post(stocks_on_warehouses))
        .route("/v2/chat/list", post(list_chats))
        .route("/v1/chat/start", post(start_chat))
        .route("/v1/chat/send/message", post(send_message))
        .route("/v2/chat/history", post(chat_history))
        .route("/v3/returns/company/fbo", get(list_fbo_returns))
        .layer(middleware::from_fn(require_credentials))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Build a response in the API's common error shape.
pub fn api_error(status: StatusCode, code: i64, message: &str) -> Response {
    let body = json!({ "code": code, "message": message, "details": [] });
    (status, Json(body)).into_response()
}

fn not_found(message: &str) -> Response {
    api_error(StatusCode::NOT_FOUND, CODE_NOT_FOUND, message)
}

fn invalid_argument(message: &str) -> Response {
    api_error(StatusCode::BAD_REQUEST, CODE_INVALID_ARGUMENT, message)
}

fn parse<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| invalid_argument(&rejection.body_text()))
}

/// Window `items` by `offset` and `limit`; a non-positive limit falls back to
/// `default_limit`. Also reports whether anything is left after the window.
fn page<T: Clone>(items: &[T], offset: i64, limit: i64, default_limit: i64) -> (Vec<T>, bool) {
    let limit = if limit > 0 { limit } else { default_limit };
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    let window: Vec<T> = items.iter().skip(offset).take(limit).cloned().collect();
    let has_next = items.len() > offset.saturating_add(window.len());
    (window, has_next)
}

/// Whether both credential headers are present and non-empty.
fn has_credentials(headers: &HeaderMap) -> bool {
    let has = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| !value.is_empty())
    };
    has(CLIENT_ID_HEADER) && has(API_KEY_HEADER)
}

async fn require_credentials(request: Request, next: Next) -> Response {
    if !has_credentials(request.headers()) {
        tracing::debug!(path = %request.uri().path(), "rejecting request without credentials");
        return api_error(
            StatusCode::UNAUTHORIZED,
            CODE_UNAUTHENTICATED,
            "Client-Id and Api-Key headers are required",
        );
    }
    next.run(request).await
}

async fn list_warehouses() -> Json<Value> {
    Json(json!({ "result": fixtures::warehouses() }))
}

async fn list_products(payload: Result<Json<ListProducts>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let filter = &input.filter;
    let matching: Vec<Value> = fixtures::products()
        .into_iter()
        .filter(|p| filter.offer_id.is_empty() || filter.offer_id.iter().any(|id| p["offer_id"] == id.as_str()))
        .filter(|p| filter.product_id.is_empty() || filter.product_id.iter().any(|id| p["id"] == *id))
        .filter(|p| match filter.visibility.as_str() {
            "VISIBLE" => p["visible"] == true,
            "INVISIBLE" => p["visible"] == false,
            _ => true,
        })
        .collect();
    let (window, _) = page(&matching, 0, input.limit, 100);
    let items: Vec<Value> = window
        .iter()
        .map(|p| {
            json!({
                "product_id": p["id"],
                "offer_id": p["offer_id"],
                "archived": false,
                "has_fbo_stocks": false,
                "has_fbs_stocks": p["stocks"]["present"].as_i64().unwrap_or(0) > 0,
                "is_discounted": p["old_price"] != "",
            })
        })
        .collect();
    Json(json!({ "result": { "items": items, "total": matching.len(), "last_id": "" } })).into_response()
}

fn find_product(offer_id: &str, product_id: i64, sku: i64) -> Option<Value> {
    fixtures::products().into_iter().find(|p| {
        (!offer_id.is_empty() && p["offer_id"] == offer_id)
            || (product_id != 0 && p["id"] == product_id)
            || (sku != 0 && p["sku"] == sku)
    })
}

async fn product_info(payload: Result<Json<ProductInfo>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    match find_product(&input.offer_id, input.product_id, input.sku) {
        Some(product) => Json(json!({ "result": product })).into_response(),
        None => not_found("product not found"),
    }
}

async fn update_stocks(payload: Result<Json<UpdateStocks>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if input.stocks.is_empty() {
        return invalid_argument("stocks must not be empty");
    }
    let warehouses = fixtures::warehouses();
    let results: Vec<Value> = input
        .stocks
        .iter()
        .map(|update| {
            let known_warehouse = warehouses
                .as_array()
                .is_some_and(|list| list.iter().any(|w| w["warehouse_id"] == update.warehouse_id));
            let product = find_product(&update.offer_id, update.product_id, 0);
            let errors = match (&product, known_warehouse, update.stock >= 0) {
                (None, _, _) => vec![json!({ "code": "PRODUCT_NOT_FOUND", "message": "product not found" })],
                (_, false, _) => vec![json!({ "code": "WAREHOUSE_NOT_FOUND", "message": "warehouse not found" })],
                (_, _, false) => vec![json!({ "code": "NEGATIVE_STOCK", "message": "stock must not be negative" })],
                _ => Vec::new(),
            };
            json!({
                "warehouse_id": update.warehouse_id,
                "product_id": product.as_ref().map_or(json!(update.product_id), |p| p["id"].clone()),
                "offer_id": product.as_ref().map_or(json!(update.offer_id), |p| p["offer_id"].clone()),
                "updated": errors.is_empty(),
                "errors": errors,
            })
        })
        .collect();
    Json(json!({ "result": results })).into_response()
}

async fn list_postings(payload: Result<Json<ListPostings>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let mut postings: Vec<Value> = fixtures::postings()
        .into_iter()
        .filter(|p| input.filter.status.is_empty() || p["status"] == input.filter.status.as_str())
        .collect();
    if input.dir.eq_ignore_ascii_case("DESC") {
        postings.reverse();
    }
    let (window, has_next) = page(&postings, input.offset, input.limit, 100);
    Json(json!({ "result": { "postings": window, "has_next": has_next } })).into_response()
}

async fn get_posting(payload: Result<Json<GetPosting>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    fixtures::postings()
        .into_iter()
        .find(|p| p["posting_number"] == input.posting_number.as_str())
        .map_or_else(
            || not_found("posting not found"),
            |posting| Json(json!({ "result": posting })).into_response(),
        )
}

async fn list_transactions(payload: Result<Json<ListTransactions>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let filter = &input.filter;
    let operations: Vec<Value> = fixtures::operations()
        .into_iter()
        .filter(|op| filter.posting_number.is_empty() || op["posting"]["posting_number"] == filter.posting_number.as_str())
        .filter(|op| match filter.transaction_type.as_str() {
            "" | "all" => true,
            kind => op["type"] == kind,
        })
        .collect();
    let page_size = if input.page_size > 0 { input.page_size } else { 1000 };
    let page_number = input.page.max(1);
    let Some(offset) = (page_number - 1).checked_mul(page_size) else {
        return invalid_argument("page is out of range");
    };
    let (window, _) = page(&operations, offset, page_size, page_size);
    let row_count = i64::try_from(operations.len()).unwrap_or(i64::MAX);
    let page_count = if row_count == 0 { 0 } else { (row_count - 1) / page_size + 1 };
    Json(json!({
        "result": { "operations": window, "page_count": page_count, "row_count": row_count }
    }))
    .into_response()
}

async fn stocks_on_warehouses(payload: Result<Json<StocksOnWarehouses>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let (rows, _) = page(&fixtures::stock_rows(), input.offset, input.limit, 100);
    Json(json!({ "result": { "rows": rows } })).into_response()
}

fn chat_summary(chat: &Chat) -> Value {
    let unread = chat.messages.iter().filter(|m| !m.is_read).count();
    json!({
        "chat_id": chat.chat_id,
        "chat_status": chat.chat_status,
        "chat_type": "Buyer_Seller",
        "created_at": CHAT_CREATED_AT,
        "unread_count": unread,
        "last_message_id": chat.messages.last().map_or(0, |m| m.message_id),
    })
}

async fn list_chats(State(db): State<Db>, payload: Result<Json<ListChats>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let store = db.read().await;
    let summaries: Vec<Value> = store
        .ordered()
        .into_iter()
        .filter(|chat| match input.filter.chat_status.as_str() {
            "" | "All" => true,
            status => chat.chat_status == status,
        })
        .map(chat_summary)
        .filter(|summary| !input.filter.unread_only || summary["unread_count"] != 0)
        .collect();
    let total_unread: i64 = summaries.iter().filter_map(|s| s["unread_count"].as_i64()).sum();
    let (window, _) = page(&summaries, input.offset, input.limit, 30);
    Json(json!({
        "chats": window,
        "total_chats_count": summaries.len(),
        "total_unread_count": total_unread,
    }))
    .into_response()
}

async fn start_chat(State(db): State<Db>, payload: Result<Json<StartChat>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let known = fixtures::postings()
        .iter()
        .any(|p| p["posting_number"] == input.posting_number.as_str());
    if !known {
        return not_found("posting not found");
    }

    let mut store = db.write().await;
    let existing = store
        .chats
        .values()
        .find(|chat| chat.posting_number == input.posting_number)
        .map(|chat| chat.chat_id);
    let chat_id = match existing {
        Some(chat_id) => chat_id,
        None => {
            let chat_id = Uuid::new_v4();
            let seq = store.next_seq;
            store.next_seq += 1;
            store.chats.insert(
                chat_id,
                Chat {
                    chat_id,
                    posting_number: input.posting_number,
                    chat_status: "Opened".to_string(),
                    messages: Vec::new(),
                    seq,
                },
            );
            tracing::debug!(%chat_id, "chat started");
            chat_id
        }
    };
    Json(json!({ "result": { "chat_id": chat_id } })).into_response()
}

async fn send_message(State(db): State<Db>, payload: Result<Json<SendMessage>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if input.text.is_empty() {
        return invalid_argument("text must not be empty");
    }
    let Ok(chat_id) = Uuid::parse_str(&input.chat_id) else {
        return not_found("chat not found");
    };

    let mut store = db.write().await;
    store.next_message_id += 1;
    let message_id = store.next_message_id;
    let Some(chat) = store.chats.get_mut(&chat_id) else {
        return not_found("chat not found");
    };
    chat.messages.push(Message {
        message_id,
        user: MessageUser {
            id: "seller".to_string(),
            kind: "Seller".to_string(),
        },
        created_at: CHAT_CREATED_AT.to_string(),
        is_read: true,
        data: vec![input.text],
    });
    Json(json!({ "result": "success" })).into_response()
}

async fn chat_history(State(db): State<Db>, payload: Result<Json<ChatHistory>, JsonRejection>) -> Response {
    let input = match parse(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let store = db.read().await;
    let chat = Uuid::parse_str(&input.chat_id)
        .ok()
        .and_then(|chat_id| store.chats.get(&chat_id));
    let Some(chat) = chat else {
        return not_found("chat not found");
    };

    let forward = input.direction.eq_ignore_ascii_case("Forward");
    let mut messages: Vec<Message> = chat
        .messages
        .iter()
        .filter(|m| match input.from_message_id {
            Some(from) if forward => m.message_id >= from,
            Some(from) => m.message_id <= from,
            None => true,
        })
        .cloned()
        .collect();
    if !forward {
        messages.reverse();
    }
    let (window, has_next) = page(&messages, 0, input.limit, 50);
    Json(json!({ "has_next": has_next, "messages": window })).into_response()
}

async fn list_fbo_returns(query: Result<Query<FboReturnsQuery>, QueryRejection>) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return invalid_argument(&rejection.body_text()),
    };
    let Some(limit) = query.limit.filter(|limit| *limit > 0) else {
        return invalid_argument("limit is required");
    };
    let last_id = query.last_id.unwrap_or(0);

    let returns: Vec<Value> = fixtures::fbo_returns()
        .into_iter()
        .filter(|r| r["id"].as_i64().unwrap_or(0) > last_id)
        .filter(|r| query.posting_number.as_deref().is_none_or(|n| r["posting_number"] == n))
        .filter(|r| query.status.as_deref().is_none_or(|s| r["status_name"] == s))
        .collect();
    let (window, _) = page(&returns, 0, limit, limit);
    let next_last_id = window.last().and_then(|r| r["id"].as_i64()).unwrap_or(0);
    Json(json!({ "returns": window, "last_id": next_last_id })).into_response()
}
