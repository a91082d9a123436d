//! Shared in-memory product catalog, mirrored to a flat JSON file.
//!
//! `CatalogState` is created in `main.rs` and shared across the Actix
//! application as `web::Data`. The in-memory list is the single source of
//! truth for the catalog; the store file is rewritten wholesale after every
//! mutation, so a restart reloads exactly what the last mutation left
//! behind.
//!
//! Every mutating operation appends under one write-lock hold and rewrites
//! the store before releasing it, so concurrent requests serialize their
//! writes instead of interleaving them.

use common::model::product::Product;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe, shareable handle to the product catalog.
#[derive(Clone)]
pub struct CatalogState {
    /// The full product list, shared by all request handlers.
    products: Arc<RwLock<Vec<Product>>>,
    /// Location of the JSON store file rewritten on every mutation.
    store_path: PathBuf,
}

impl CatalogState {
    /// Loads the catalog from `store_path`.
    ///
    /// A missing store file yields an empty catalog; a present but
    /// unparsable one is an error.
    pub fn load(store_path: PathBuf) -> Result<Self, String> {
        let products = if store_path.exists() {
            let content = fs::read_to_string(&store_path).map_err(|e| e.to_string())?;
            serde_json::from_str(&content).map_err(|e| e.to_string())?
        } else {
            Vec::new()
        };
        Ok(Self {
            products: Arc::new(RwLock::new(products)),
            store_path,
        })
    }

    /// Appends a new product and rewrites the store.
    pub async fn insert(&self, product: Product) -> Result<(), String> {
        let mut products = self.products.write().await;
        products.push(product);
        self.write_store(&products)
    }

    /// Returns a clone of the product with the given id, if any.
    pub async fn find(&self, product_id: &str) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| p.id == product_id).cloned()
    }

    /// Returns a clone of the full product list.
    pub async fn all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Appends an image filename and its preview to the matching product
    /// and rewrites the store. Returns `false` when no product matches.
    pub async fn attach_image(
        &self,
        product_id: &str,
        file_name: &str,
        preview_name: &str,
    ) -> Result<bool, String> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            return Ok(false);
        };
        product.images.push(file_name.to_string());
        product.previews.push(preview_name.to_string());
        self.write_store(&products)?;
        Ok(true)
    }

    /// Appends a video filename to the matching product and rewrites the
    /// store. Returns `false` when no product matches.
    pub async fn attach_video(&self, product_id: &str, file_name: &str) -> Result<bool, String> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            return Ok(false);
        };
        product.videos.push(file_name.to_string());
        self.write_store(&products)?;
        Ok(true)
    }

    fn write_store(&self, products: &[Product]) -> Result<(), String> {
        let content = serde_json::to_string_pretty(products).map_err(|e| e.to_string())?;
        fs::write(&self.store_path, content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Chair".to_string(),
            description: "Oak chair".to_string(),
            price: 49.9,
            videos: Vec::new(),
            images: Vec::new(),
            previews: Vec::new(),
        }
    }

    #[actix_web::test]
    async fn missing_store_file_loads_empty() {
        let dir = tempdir().unwrap();
        let catalog = CatalogState::load(dir.path().join("products.store.json")).unwrap();
        assert!(catalog.all().await.is_empty());
    }

    #[actix_web::test]
    async fn insert_survives_a_reload() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("products.store.json");

        let catalog = CatalogState::load(store_path.clone()).unwrap();
        catalog.insert(sample("p-1")).await.unwrap();

        let reloaded = CatalogState::load(store_path).unwrap();
        let found = reloaded.find("p-1").await.unwrap();
        assert_eq!(found.name, "Chair");
    }

    #[actix_web::test]
    async fn attach_image_appends_both_lists() {
        let dir = tempdir().unwrap();
        let catalog = CatalogState::load(dir.path().join("products.store.json")).unwrap();
        catalog.insert(sample("p-1")).await.unwrap();

        let updated = catalog
            .attach_image("p-1", "a.png", "thumb-a.png")
            .await
            .unwrap();
        assert!(updated);

        let product = catalog.find("p-1").await.unwrap();
        assert_eq!(product.images, vec!["a.png"]);
        assert_eq!(product.previews, vec!["thumb-a.png"]);
        assert!(product.videos.is_empty());
    }

    #[actix_web::test]
    async fn attach_to_unknown_product_reports_miss() {
        let dir = tempdir().unwrap();
        let catalog = CatalogState::load(dir.path().join("products.store.json")).unwrap();

        assert!(!catalog
            .attach_image("nope", "a.png", "thumb-a.png")
            .await
            .unwrap());
        assert!(!catalog.attach_video("nope", "a.mp4").await.unwrap());
    }

    #[actix_web::test]
    async fn unparsable_store_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("products.store.json");
        fs::write(&store_path, "not json").unwrap();

        assert!(CatalogState::load(store_path).is_err());
    }
}
