mod catalog;
mod config;
mod services;
mod upload_log;

use crate::catalog::state::CatalogState;
use crate::config::ServerConfig;
use crate::upload_log::state::{start_upload_logger, UploadLogState};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::fs;
use std::io;
use tokio::sync::mpsc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();

    fs::create_dir_all(config.image_dir())?;
    fs::create_dir_all(config.video_dir())?;
    fs::create_dir_all(config.preview_dir())?;

    let catalog = CatalogState::load(config.store_path())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // Upload lifecycle logger: handlers send events, the task owns the file.
    let (tx, rx) = mpsc::channel(100);
    let upload_log = UploadLogState { tx };
    tokio::spawn(start_upload_logger(config.log_path(), rx));

    let bind_addr = (config.host.clone(), config.port);
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(upload_log.clone()))
            .service(services::products::configure_routes())
    })
    .bind(bind_addr)?
    .run()
    .await
}
