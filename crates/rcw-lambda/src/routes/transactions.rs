use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use rcw_core::models::transaction::{CashTransaction, NewCashTransaction};
use rcw_storage::page::{MAX_PAGE_SIZE, PageRequest};

use crate::error::ApiError;
use crate::state::AppState;

const CREATED: &str = "Item created successfully";
const CREATE_FAILED: &str = "Error creating item";
const RETRIEVED: &str = "Items retrieved successfully";
const RETRIEVE_FAILED: &str = "Error retrieving items";

#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub item: CashTransaction,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub message: &'static str,
    pub items: Vec<CashTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Stored rows on this page that could not be read as transactions.
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

pub async fn upload_cash_transaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let item = create(&state, &body)
        .await
        .map_err(|e| e.with_message(CREATE_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: CREATED,
            item,
        }),
    ))
}

async fn create(state: &AppState, body: &[u8]) -> Result<CashTransaction, ApiError> {
    let new = NewCashTransaction::from_json(body)?;
    let record = CashTransaction::create(new);

    state.store.put_transaction(&record).await?;
    tracing::info!(id = %record.id, user_name = %record.user_name, "cash transaction created");

    Ok(record)
}

/// One page of stored transactions. Without `limit` the page is whatever the
/// table returns for a single scan call.
pub async fn get_db_items(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ListResponse>, ApiError> {
    list(&state, query)
        .await
        .map(Json)
        .map_err(|e| e.with_message(RETRIEVE_FAILED))
}

async fn list(
    state: &AppState,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError> {
    let Query(params) = query?;
    let request = page_request(params)?;
    let page = state.store.scan_transactions(&request).await?;

    Ok(ListResponse {
        message: RETRIEVED,
        items: page.items,
        next_token: page.next_token,
        skipped: page.skipped,
    })
}

fn page_request(params: ListParams) -> Result<PageRequest, ApiError> {
    if let Some(limit) = params.limit
        && !(1..=MAX_PAGE_SIZE).contains(&limit)
    {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    Ok(PageRequest {
        limit: params.limit,
        next_token: params.next_token.filter(|t| !t.is_empty()),
    })
}
