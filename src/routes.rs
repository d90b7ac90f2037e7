//! Router wiring: verb + path → declared rules + handler.

use axum::{routing::get, Router};

use crate::docs::docs_routes;
use crate::handlers::products::{
    create_product, delete_product, get_product, list_products, toggle_availability,
    update_product,
};
use crate::state::AppState;

/// Product CRUD routes, meant to be nested under `/api/products`.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(state)
}

/// Full application router: product routes plus the OpenAPI document.
/// Transport layers (CORS, tracing) are added at bootstrap.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/products", product_routes(state))
        .merge(docs_routes())
}
