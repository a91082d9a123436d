//! Records upload lifecycle events to an append-only log file.
//!
//! Handlers never touch the log file directly: they send `UploadEvent`s
//! through `UploadLogState`, and the `start_upload_logger` task, spawned
//! once in `main.rs`, owns the file and appends one timestamped line per
//! event. An append failure is reported through `log::error!` and dropped;
//! it never fails the request that produced the event.

use chrono::Local;
use common::uploads::UploadEvent;
use log::error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Clonable sender handle shared across the Actix application as
/// `web::Data`.
#[derive(Clone)]
pub struct UploadLogState {
    pub tx: mpsc::Sender<UploadEvent>,
}

impl UploadLogState {
    /// Queues an event for the logger task. Dropped if the task has exited.
    pub async fn record(&self, event: UploadEvent) {
        let _ = self.tx.send(event).await;
    }
}

/// Runs the logger task: receives events until every sender is dropped and
/// appends one line per event to `log_path`.
pub async fn start_upload_logger(log_path: PathBuf, mut rx: mpsc::Receiver<UploadEvent>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = append_entry(&log_path, event) {
            error!("Error writing to log file {}: {}", log_path.display(), e);
        }
    }
}

fn append_entry(log_path: &Path, event: UploadEvent) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(
        file,
        "{} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        event.message()
    )
}
