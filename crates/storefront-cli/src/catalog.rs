//! Loading a product collection from the catalog API or a local JSON file

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use storefront_core::product::decode_collection;
use storefront_core::Product;

/// Default catalog API endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Where the collection comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// A file wins over a URL; with neither, the public catalog API is used
    pub fn from_args(source: Option<String>, file: Option<PathBuf>) -> Self {
        match (file, source) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            (None, None) => Source::Url(DEFAULT_CATALOG_URL.to_string()),
        }
    }
}

/// Fetch or read the whole collection
pub async fn load_products(source: &Source) -> Result<Vec<Product>> {
    let body = match source {
        Source::Url(url) => fetch_text(url).await?,
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };

    let products = decode_collection(&body).context("Invalid product collection")?;
    tracing::info!(count = products.len(), "loaded product collection");
    Ok(products)
}

async fn fetch_text(url: &str) -> Result<String> {
    tracing::debug!(url, "fetching product collection");
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .context("Failed to send request")?
        .error_for_status()
        .context("HTTP error")?;

    response.text().await.context("Failed to read response body")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_prefers_file() {
        let source = Source::from_args(Some("http://example.test/p".into()), Some("products.json".into()));
        assert_eq!(source, Source::File(PathBuf::from("products.json")));
    }

    #[test]
    fn test_source_defaults_to_catalog_api() {
        assert_eq!(Source::from_args(None, None), Source::Url(DEFAULT_CATALOG_URL.to_string()));
        assert_eq!(
            Source::from_args(Some("http://localhost:8080/products".into()), None),
            Source::Url("http://localhost:8080/products".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_products_from_file() {
        let path = std::env::temp_dir().join(format!("storefront-catalog-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"id":1,"title":"Backpack","price":109.95,"category":"men's clothing","image":"b.jpg","rating":{"rate":3.9,"count":120}}]"#,
        )
        .unwrap();

        let products = load_products(&Source::File(path.clone())).await.unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Backpack");
        assert_eq!(products[0].image_ref, "b.jpg");
    }

    #[tokio::test]
    async fn test_load_products_missing_file() {
        let err = load_products(&Source::File("/nonexistent/storefront.json".into()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
