//! # Product Routes
//!
//! ```text
//! GET    /api/products              list, enveloped
//! GET    /api/products/search       ?term=      raw array
//! GET    /api/products/filter       ?type&brand&priceMin&priceMax&sortOrder&page&pageSize
//! POST   /api/products              create      201 { id }
//! GET    /api/products/:id          one product, enveloped
//! PUT    /api/products/:id          full replace
//! DELETE /api/products/:id          delete
//! ```

use std::time::Instant;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use forestal_core::validation::{validate_product_id, validate_search_term};
use forestal_core::{PageResult, Product, RawCriteria};

use crate::dto::{CreatedId, Envelope, ProductPayload, QueryPairs};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/filter", get(filter_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Parses the `:id` path segment.
fn parse_id(raw: &str) -> ApiResult<i64> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| ApiError::validation(format!("id must be an integer, got '{raw}'")))?;
    Ok(validate_product_id(id)?)
}

pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<Product>>>> {
    let start = Instant::now();

    let products = state.db.catalog().list_all().await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "list_products completed"
    );
    Ok(Json(Envelope::ok("Products retrieved", products)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Product>>> {
    let id = parse_id(&id)?;
    let product = state.db.catalog().get(id).await?;
    Ok(Json(Envelope::ok("Product retrieved", product)))
}

pub async fn search_products(
    State(state): State<AppState>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let start = Instant::now();
    let Query(pairs) = pairs?;
    let term = pairs
        .iter()
        .find(|(key, _)| key == "term")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    let term = validate_search_term(term)?;

    let products = state.db.products().search(term).await?;

    info!(
        term = %term,
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search_products completed"
    );
    Ok(Json(products))
}

pub async fn filter_products(
    State(state): State<AppState>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<PageResult<Product>>> {
    let Query(pairs) = pairs?;
    let raw = RawCriteria::from_pairs(pairs);
    let page = state.db.catalog().query(&raw).await?;
    Ok(Json(page))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<CreatedId>>)> {
    let Json(payload) = body?;
    let draft = payload.into_draft()?;

    let id = state.db.products().insert(&draft).await?;

    info!(id, name = %draft.name, "create_product completed");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Product created", CreatedId { id })),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<Json<Envelope<()>>> {
    let id = parse_id(&id)?;
    let Json(payload) = body?;
    let draft = payload.into_draft()?;

    state.db.products().update(id, &draft).await?;

    info!(id, "update_product completed");
    Ok(Json(Envelope::message("Product updated")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<()>>> {
    let id = parse_id(&id)?;

    state.db.products().delete(id).await?;

    info!(id, "delete_product completed");
    Ok(Json(Envelope::message("Product deleted")))
}
