//! Catalog API bindings for the frontend
//!
//! The collection is fetched once at startup; the detail page fetches a
//! single product by id. Bodies are decoded by `storefront_core` so the
//! browser and the CLI validate products the same way.

use storefront_core::product::{decode_collection, decode_product};
use storefront_core::Product;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Base URL of the catalog API
const CATALOG_API_BASE: &str = "https://fakestoreapi.com";

// ============ HTTP Fetch Helpers ============

async fn http_get_text(path: &str) -> Result<String, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response, console};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}{}", CATALOG_API_BASE, path);
    console::log_1(&format!("http_get: Fetching {}", url).into());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| {
        console::error_1(&format!("http_get: Request creation failed: {:?}", e).into());
        format!("{:?}", e)
    })?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            console::error_1(&format!("http_get: Fetch failed: {:?}", e).into());
            format!("{:?}", e)
        })?;

    let resp: Response = resp_value.dyn_into().map_err(|e: JsValue| format!("{:?}", e))?;
    console::log_1(&format!("http_get: Response status {}", resp.status()).into());

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let body = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| {
            console::error_1(&format!("http_get: Reading body failed: {:?}", e).into());
            format!("{:?}", e)
        })?;

    body.as_string().ok_or_else(|| "Response body was not text".to_string())
}

// ============ Catalog ============

/// Fetch the whole product collection
pub async fn get_products() -> Result<Vec<Product>, String> {
    let body = http_get_text("/products").await?;
    decode_collection(&body).map_err(|e| {
        web_sys::console::error_1(&format!("get_products: {}", e).into());
        e.to_string()
    })
}

/// Fetch one product for the detail page
pub async fn get_product(id: u32) -> Result<Product, String> {
    let body = http_get_text(&format!("/products/{}", id)).await?;
    decode_product(&body).map_err(|e| e.to_string())
}
