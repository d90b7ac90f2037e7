//! Generated OpenAPI document, served as JSON outside the data path.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Productos",
        description = "API de administración de productos",
    ),
    paths(
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::toggle_availability,
        crate::handlers::products::delete_product,
    ),
    components(schemas(
        crate::response::Data<crate::store::Product>,
        crate::response::Data<Vec<crate::store::ProductListItem>>,
        crate::response::Data<String>,
        crate::store::Product,
        crate::store::ProductListItem,
        crate::store::NewProduct,
        crate::store::ProductUpdate,
        crate::error::FieldError,
        crate::error::ValidationBody,
        crate::error::ErrorBody,
    )),
    tags((name = "Products", description = "Operaciones CRUD sobre productos"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.contains(&&"/api/products".to_string()));
        assert!(paths.contains(&&"/api/products/{id}".to_string()));
    }
}
