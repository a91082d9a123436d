use crate::config::ServerConfig;
use actix_files::NamedFile;
use actix_web::{web, HttpRequest, HttpResponse};
use std::path::Path;

/// Actix web handler for `GET /product/image/{file_name}`.
pub(crate) async fn image(
    req: HttpRequest,
    file_name: web::Path<String>,
    config: web::Data<ServerConfig>,
) -> HttpResponse {
    serve_media(&req, &config.image_dir(), &file_name)
}

/// Actix web handler for `GET /product/video/{file_name}`.
pub(crate) async fn video(
    req: HttpRequest,
    file_name: web::Path<String>,
    config: web::Data<ServerConfig>,
) -> HttpResponse {
    serve_media(&req, &config.video_dir(), &file_name)
}

/// Actix web handler for `GET /product/preview/{file_name}`.
pub(crate) async fn preview(
    req: HttpRequest,
    file_name: web::Path<String>,
    config: web::Data<ServerConfig>,
) -> HttpResponse {
    serve_media(&req, &config.preview_dir(), &file_name)
}

/// Looks `file_name` up in `dir` and streams it back, or responds 404.
///
/// Names with path separators or parent components never reach the
/// filesystem, so the lookup cannot escape the media directory.
fn serve_media(req: &HttpRequest, dir: &Path, file_name: &str) -> HttpResponse {
    if !is_plain_file_name(file_name) {
        return HttpResponse::NotFound().body("Not Found");
    }
    match NamedFile::open(dir.join(file_name)) {
        Ok(file) => file.into_response(req),
        Err(_) => HttpResponse::NotFound().body("Not Found"),
    }
}

/// True when the name is a bare filename: non-empty, no separators, not a
/// parent component.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != ".." && !name.contains('/') && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::is_plain_file_name;
    use crate::services::products::{configure_routes, testing};
    use actix_web::{test, web, App};
    use tempfile::tempdir;

    #[actix_web::test]
    async fn stored_file_is_served_back() {
        let dir = tempdir().unwrap();
        let ctx = testing::test_context(dir.path());
        std::fs::write(ctx.config.image_dir().join("pic.png"), b"png bytes").unwrap();
        std::fs::write(ctx.config.preview_dir().join("thumb-pic.png"), b"thumb").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.catalog.clone()))
                .app_data(web::Data::new(ctx.config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/product/image/pic.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, b"png bytes".as_ref());

        let req = test::TestRequest::get()
            .uri("/product/preview/thumb-pic.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, b"thumb".as_ref());
    }

    #[actix_web::test]
    async fn unknown_file_is_not_found() {
        let dir = tempdir().unwrap();
        let ctx = testing::test_context(dir.path());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.catalog.clone()))
                .app_data(web::Data::new(ctx.config.clone()))
                .service(configure_routes()),
        )
        .await;

        for uri in [
            "/product/image/missing.png",
            "/product/video/missing.mp4",
            "/product/preview/missing.png",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 404);
        }
    }

    #[::core::prelude::v1::test]
    fn only_bare_filenames_pass_the_check() {
        assert!(is_plain_file_name("pic.png"));
        assert!(is_plain_file_name("thumb-pic.png"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../secret"));
        assert!(!is_plain_file_name("a/b.png"));
        assert!(!is_plain_file_name("a\\b.png"));
    }
}
