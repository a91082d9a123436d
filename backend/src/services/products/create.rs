use crate::catalog::state::CatalogState;
use actix_web::{web, HttpResponse, Responder};
use common::model::product::Product;
use common::requests::NewProduct;
use uuid::Uuid;

/// Actix web handler for `POST /product`.
///
/// Validates the payload, appends the new product to the catalog (which
/// rewrites the store file) and returns the created record.
///
/// # Returns
/// - `201 Created` with the new product as a JSON payload.
/// - `400 Bad Request` when a required field is missing or empty.
/// - `500 Internal Server Error` when the store rewrite fails.
pub(crate) async fn process(
    catalog: web::Data<CatalogState>,
    payload: web::Json<NewProduct>,
) -> impl Responder {
    let payload = payload.into_inner();
    if !payload.is_valid() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "message": "Invalid product data" }));
    }

    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: payload.name.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        price: payload.price.unwrap_or_default(),
        videos: Vec::new(),
        images: Vec::new(),
        previews: Vec::new(),
    };

    match catalog.insert(product.clone()).await {
        Ok(()) => HttpResponse::Created().json(product),
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("Error saving product: {}", e))
        }
    }
}
