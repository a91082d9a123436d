use std::env;
use std::path::PathBuf;

/// Server configuration resolved from the environment at startup.
///
/// `HOST` and `PORT` control the bind address; `DATA_DIR` is the root under
/// which the product store, the upload log and the `uploads/` media
/// directories live. Every value has a default so the server runs with no
/// environment at all.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self {
            host,
            port,
            data_dir,
        }
    }

    /// The flat JSON file holding the full product list.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("products.store.json")
    }

    /// The append-only upload lifecycle log.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("filesUpload.log")
    }

    pub fn image_dir(&self) -> PathBuf {
        self.data_dir.join("uploads").join("images")
    }

    pub fn video_dir(&self) -> PathBuf {
        self.data_dir.join("uploads").join("videos")
    }

    pub fn preview_dir(&self) -> PathBuf {
        self.data_dir.join("uploads").join("previews")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_data_dir() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("/srv/catalog"),
        };
        assert_eq!(
            config.store_path(),
            PathBuf::from("/srv/catalog/products.store.json")
        );
        assert_eq!(
            config.log_path(),
            PathBuf::from("/srv/catalog/filesUpload.log")
        );
        assert_eq!(
            config.image_dir(),
            PathBuf::from("/srv/catalog/uploads/images")
        );
        assert_eq!(
            config.video_dir(),
            PathBuf::from("/srv/catalog/uploads/videos")
        );
        assert_eq!(
            config.preview_dir(),
            PathBuf::from("/srv/catalog/uploads/previews")
        );
    }
}
