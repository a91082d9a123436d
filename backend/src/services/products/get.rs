use crate::catalog::state::CatalogState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /product/{product_id}`.
///
/// # Returns
/// - `200 OK` with the product as a JSON payload.
/// - `404 Not Found` when the id matches no product.
pub(crate) async fn process(
    catalog: web::Data<CatalogState>,
    product_id: web::Path<String>,
) -> impl Responder {
    match catalog.find(&product_id).await {
        Some(product) => HttpResponse::Ok().json(product),
        None => {
            HttpResponse::NotFound().json(serde_json::json!({ "message": "Product not found" }))
        }
    }
}

/// Actix web handler for `GET /product`. Returns the full product list.
pub(crate) async fn list(catalog: web::Data<CatalogState>) -> impl Responder {
    HttpResponse::Ok().json(catalog.all().await)
}
