use serde::{Deserialize, Serialize};

/// A catalog product together with the filenames of the media assets
/// attached to it.
///
/// The `videos`, `images` and `previews` lists are append-only and ordered
/// by upload completion. Every `previews` entry is the thumbnail of the
/// `images` entry it was appended alongside, stored under the same name
/// with a `thumb-` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Opaque token generated at creation time.
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub videos: Vec<String>,
    pub images: Vec<String>,
    pub previews: Vec<String>,
}
