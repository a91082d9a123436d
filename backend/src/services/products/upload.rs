use crate::catalog::state::CatalogState;
use crate::config::ServerConfig;
use crate::upload_log::state::UploadLogState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::uploads::UploadEvent;
use futures_util::StreamExt;
use image::imageops::FilterType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

/// Side length of generated preview thumbnails.
const THUMBNAIL_SIZE: u32 = 150;

/// Actix web handler for `POST /product/{product_id}/image/upload`.
///
/// Streams the multipart `file` field into the image directory under a
/// generated name, renders a preview thumbnail from it, appends both
/// filenames to the product and rewrites the store.
///
/// # Returns
/// - `200 OK` with `{"message", "fileName"}` on success.
/// - `404 Not Found` when the product id is unknown.
/// - `500 Internal Server Error` when the file write, the thumbnail or the
///   store rewrite fails; the raw error is surfaced in the body.
pub(crate) async fn image(
    product_id: web::Path<String>,
    payload: Multipart,
    catalog: web::Data<CatalogState>,
    config: web::Data<ServerConfig>,
    logger: web::Data<UploadLogState>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    if catalog.find(&product_id).await.is_none() {
        return HttpResponse::NotFound()
            .json(serde_json::json!({ "message": "Product not found" }));
    }

    logger.record(UploadEvent::Started).await;
    let file_name = match save_upload(payload, &config.image_dir()).await {
        Ok(file_name) => file_name,
        Err(e) => {
            logger.record(UploadEvent::Failed).await;
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "message": "File upload failed", "error": e }));
        }
    };

    // The resize is CPU-bound, so it runs on the blocking pool.
    let preview_name = format!("thumb-{}", file_name);
    let source = config.image_dir().join(&file_name);
    let target = config.preview_dir().join(&preview_name);
    let thumbnail = web::block(move || create_image_thumbnail(&source, &target))
        .await
        .map_err(|e| e.to_string())
        .and_then(|result| result);
    if let Err(e) = thumbnail {
        logger.record(UploadEvent::Failed).await;
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({ "message": "Error creating thumbnail", "error": e }));
    }

    match catalog
        .attach_image(&product_id, &file_name, &preview_name)
        .await
    {
        Ok(true) => {
            logger.record(UploadEvent::Finished).await;
            HttpResponse::Ok()
                .json(serde_json::json!({ "message": "Image uploaded", "fileName": file_name }))
        }
        Ok(false) => {
            logger.record(UploadEvent::Failed).await;
            HttpResponse::NotFound()
                .json(serde_json::json!({ "message": "Product not found" }))
        }
        Err(e) => {
            logger.record(UploadEvent::Failed).await;
            HttpResponse::InternalServerError().body(format!("Error saving product: {}", e))
        }
    }
}

/// Actix web handler for `POST /product/{product_id}/video/upload`.
///
/// Streams the multipart `file` field into the video directory under a
/// generated name and appends the filename to the product. Videos get no
/// preview.
pub(crate) async fn video(
    product_id: web::Path<String>,
    payload: Multipart,
    catalog: web::Data<CatalogState>,
    config: web::Data<ServerConfig>,
    logger: web::Data<UploadLogState>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    if catalog.find(&product_id).await.is_none() {
        return HttpResponse::NotFound()
            .json(serde_json::json!({ "message": "Product not found" }));
    }

    logger.record(UploadEvent::Started).await;
    let file_name = match save_upload(payload, &config.video_dir()).await {
        Ok(file_name) => file_name,
        Err(e) => {
            logger.record(UploadEvent::Failed).await;
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "message": "File upload failed", "error": e }));
        }
    };

    match catalog.attach_video(&product_id, &file_name).await {
        Ok(true) => {
            logger.record(UploadEvent::Finished).await;
            HttpResponse::Ok().json(serde_json::json!({ "fileName": file_name }))
        }
        Ok(false) => {
            logger.record(UploadEvent::Failed).await;
            HttpResponse::NotFound()
                .json(serde_json::json!({ "message": "Product not found" }))
        }
        Err(e) => {
            logger.record(UploadEvent::Failed).await;
            HttpResponse::InternalServerError().body(format!("Error saving product: {}", e))
        }
    }
}

/// Streams the first `file` field of a multipart payload into `dir` under a
/// generated `<uuid><original extension>` name and returns that name.
async fn save_upload(mut payload: Multipart, dir: &Path) -> Result<String, String> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some("file") {
            continue;
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        let file_name = format!("{}{}", Uuid::new_v4(), extension_of(&original));

        let file = File::create(dir.join(&file_name)).map_err(|e| e.to_string())?;
        let mut writer = BufWriter::new(file);
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| e.to_string())?;
            writer.write_all(&chunk).map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;
        return Ok(file_name);
    }

    Err("Missing file".to_string())
}

/// The original filename's extension including the leading dot, or the
/// empty string when it has none.
fn extension_of(original: &str) -> String {
    Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

/// Renders the preview thumbnail for a stored image.
fn create_image_thumbnail(source: &Path, target: &Path) -> Result<(), String> {
    let img = image::open(source).map_err(|e| e.to_string())?;
    img.resize_to_fill(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle)
        .save(target)
        .map_err(|e| e.to_string())
}
