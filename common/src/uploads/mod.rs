/// Lifecycle of a single multipart upload, as recorded in the upload log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    Started,
    Finished,
    Failed,
}

impl UploadEvent {
    /// The fixed log line body for this event.
    pub fn message(self) -> &'static str {
        match self {
            UploadEvent::Started => "File upload has started",
            UploadEvent::Finished => "File has been uploaded",
            UploadEvent::Failed => "Error occurred, file upload was failed",
        }
    }
}
