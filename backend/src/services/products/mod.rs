//! # Product Service Module
//!
//! This module aggregates all API endpoints of the product catalog under
//! the `/product` path and directs incoming HTTP requests to the handler
//! logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `create`: Handles product creation and persistence to the store file.
//! - `get`: Handles retrieval of a single product or the full list.
//! - `upload`: Handles multipart image/video uploads and preview
//!   thumbnail generation.
//! - `serve`: Serves stored media files back by their generated name.

mod create;
mod get;
mod serve;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all product-related endpoints.
const API_PATH: &str = "/product";

/// Configures and returns the Actix `Scope` for all product routes.
///
/// # Registered Routes:
///
/// *   **`POST /product`**:
///     - **Handler**: `create::process`
///     - **Description**: Validates a `{name, description, price}` payload,
///       appends a new product to the catalog and returns the created
///       record with `201 Created`.
///
/// *   **`GET /product`**:
///     - **Handler**: `get::list`
///     - **Description**: Returns the full product list.
///
/// *   **`GET /product/image/{file_name}`**, **`/video/{file_name}`**,
///     **`/preview/{file_name}`**:
///     - **Handler**: `serve::image` / `serve::video` / `serve::preview`
///     - **Description**: Serve a stored media file by its generated name
///       from the corresponding upload directory.
///
/// *   **`GET /product/{product_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns a single product by id, or `404` when the
///       id is unknown.
///
/// *   **`POST /product/{product_id}/image/upload`**:
///     - **Handler**: `upload::image`
///     - **Description**: Multipart image upload. Streams the file to disk,
///       renders a preview thumbnail and appends both filenames to the
///       product.
///
/// *   **`POST /product/{product_id}/video/upload`**:
///     - **Handler**: `upload::video`
///     - **Description**: Multipart video upload. Streams the file to disk
///       and appends its filename to the product.
///
/// The media-serving routes are registered ahead of `/{product_id}` so the
/// literal `image`, `video` and `preview` segments are never captured as
/// product ids.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(get::list))
        .route("/image/{file_name}", get().to(serve::image))
        .route("/video/{file_name}", get().to(serve::video))
        .route("/preview/{file_name}", get().to(serve::preview))
        .route("/{product_id}", get().to(get::process))
        .route("/{product_id}/image/upload", post().to(upload::image))
        .route("/{product_id}/video/upload", post().to(upload::video))
}
