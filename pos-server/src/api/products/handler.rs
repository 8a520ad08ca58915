//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate, ServiceCategory};

use crate::api::extract::json_body;
use crate::core::ServerState;
use crate::db::repository::{RepoError, product};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, is_valid_amount, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Raw query string; empty values mean "no filter"
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    category: Option<String>,
    active: Option<String>,
}

impl ProductQuery {
    fn into_filter(self) -> AppResult<ProductFilter> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(c) => Some(c.parse::<ServiceCategory>().map_err(|e| {
                AppError::with_message(ErrorCode::InvalidCategory, e.to_string())
            })?),
        };
        Ok(ProductFilter {
            category,
            active: self.active.as_deref() == Some("true"),
        })
    }
}

fn product_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
        .with_detail("id", id)
}

fn check_price(price: f64) -> AppResult<()> {
    if !is_valid_amount(price) {
        return Err(AppError::with_message(
            ErrorCode::ProductPriceInvalid,
            format!("Price must be a positive number: {price}"),
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> AppResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)
        .map_err(|e| AppError::with_message(ErrorCode::ProductNameRequired, e.message))
}

/// GET /api/products?category=bike&active=true
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    let products = product::find_all(state.pool(), &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = product::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| product_not_found(&id))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let data = json_body(payload)?;
    check_name(&data.name)?;
    check_price(data.price)?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;

    let product = product::create(state.pool(), data).await?;
    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let data = json_body(payload)?;
    if let Some(name) = &data.name {
        check_name(name)?;
    }
    if let Some(price) = data.price {
        check_price(price)?;
    }
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;

    let product = product::update(state.pool(), &id, data)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => product_not_found(&id),
            other => other.into(),
        })?;
    Ok(Json(product))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !product::delete(state.pool(), &id).await? {
        return Err(product_not_found(&id));
    }
    tracing::info!(id = %id, "Product deleted");
    Ok(Json(true))
}
