//! Product CRUD handlers: list, get, create, update, toggle, delete.
//!
//! Each handler first evaluates its route's declared rules, then issues at
//! most one read-then-write pair against the store. Store faults propagate
//! through `AppError` to the process-level HTTP mapping; nothing is retried
//! here.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::error::{AppError, FieldError};
use crate::response;
use crate::state::AppState;
use crate::store::{NewProduct, ProductUpdate};
use crate::validation::{
    bool_field, number_field, run_rules, string_field, CREATE_RULES, ID_RULES, MSG_INVALID_ID,
    UPDATE_RULES,
};

/// The id rule guarantees integer syntax; this also catches values past the
/// i32 key range, reporting them with the same message.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(vec![FieldError::new("id", MSG_INVALID_ID)]))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products, newest id first, without timestamps",
         body = crate::response::Data<Vec<crate::store::ProductListItem>>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.store.list().await?;
    Ok(response::ok(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = crate::response::Data<crate::store::Product>),
        (status = 400, description = "Invalid id", body = crate::error::ValidationBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    run_rules(ID_RULES, &[("id", &id_str)], &Value::Null)?;
    let id = parse_id(&id_str)?;
    let product = state.store.find(id).await?.ok_or(AppError::NotFound)?;
    Ok(response::ok(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = crate::store::NewProduct,
    responses(
        (status = 201, description = "Created product with its generated id",
         body = crate::response::Data<crate::store::Product>),
        (status = 400, description = "Validation errors", body = crate::error::ValidationBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    // A missing or non-JSON body still goes through the rule list, so the
    // response is the itemized 400 rather than the extractor's rejection.
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    run_rules(CREATE_RULES, &[], &body)?;
    let new = NewProduct {
        name: string_field(&body, "name"),
        price: number_field(&body, "price"),
    };
    let product = state.store.create(new).await?;
    Ok(response::created(product))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::store::ProductUpdate,
    responses(
        (status = 200, description = "Updated product", body = crate::response::Data<crate::store::Product>),
        (status = 400, description = "Validation errors", body = crate::error::ValidationBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    run_rules(UPDATE_RULES, &[("id", &id_str)], &body)?;
    let id = parse_id(&id_str)?;
    let changes = ProductUpdate {
        name: string_field(&body, "name"),
        price: number_field(&body, "price"),
        availability: bool_field(&body, "availability"),
    };
    let product = state
        .store
        .update(id, changes)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(response::ok(product))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with availability negated",
         body = crate::response::Data<crate::store::Product>),
        (status = 400, description = "Invalid id", body = crate::error::ValidationBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody)
    )
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    run_rules(ID_RULES, &[("id", &id_str)], &Value::Null)?;
    let id = parse_id(&id_str)?;
    // Read-then-write; any body content is ignored. Concurrent toggles of the
    // same row may race, the store applies whichever write lands last.
    let current = state.store.find(id).await?.ok_or(AppError::NotFound)?;
    let product = state
        .store
        .set_availability(id, !current.availability)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(response::ok(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Confirmation message", body = crate::response::Data<String>),
        (status = 400, description = "Invalid id", body = crate::error::ValidationBody),
        (status = 404, description = "No product with that id", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    run_rules(ID_RULES, &[("id", &id_str)], &Value::Null)?;
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(response::ok("Producto eliminado correctamente".to_string()))
}
