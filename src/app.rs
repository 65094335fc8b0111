use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::Product;
use web_sys::console;

use crate::api;
use crate::components::{NotFound, ProductDetails, ProductListing, Toolbar};

/// Build identification injected by build.rs
const BUILD_HASH: &str = env!("BUILD_HASH");
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

#[component]
pub fn App() -> impl IntoView {
    // Which page the URL hash points at
    let (route, set_route) = signal(Route::current());
    // Product collection: None while loading
    let (products, set_products) = signal::<Option<Result<Vec<Product>, String>>>(None);

    // Fetch the collection once on mount
    spawn_local(async move {
        let result = api::get_products().await;
        match &result {
            Ok(list) => console::log_1(&format!("App: Loaded {} products", list.len()).into()),
            Err(e) => console::error_1(&format!("Failed to load products: {}", e).into()),
        }
        set_products.set(Some(result));
    });

    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        set_route.set(Route::current());
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        <div class="app-container">
            <Toolbar />
            <main class="main-content">
                {move || match route.get() {
                    Route::Listing => match products.get() {
                        None => view! {
                            <div class="loading">"Loading product listing…"</div>
                        }.into_any(),
                        Some(Err(_)) => view! { <LoadError /> }.into_any(),
                        Some(Ok(list)) => view! { <ProductListing products=list /> }.into_any(),
                    },
                    Route::Product(id) => view! { <ProductDetails id=id /> }.into_any(),
                    Route::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>
            <footer class="site-footer">
                <span>"© Product Explorer. All rights reserved."</span>
                <span class="build-info" title=BUILD_TIMESTAMP>{format!("build {}", BUILD_HASH)}</span>
            </footer>
        </div>
    }
}

/// Static view shown instead of the listing when the collection fetch fails
#[component]
fn LoadError() -> impl IntoView {
    view! {
        <div class="load-error">
            <h1>"Failed to load products"</h1>
            <p class="muted">
                "There was a problem fetching products from the API. Please check your "
                "network connection or try again later."
            </p>
            <div class="load-error-actions">
                <a class="btn btn-primary" href="/">"Retry"</a>
                <a class="btn btn-outline" href="/">"Back to Home"</a>
            </div>
        </div>
    }
}

/// Hash-based routes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Listing,
    Product(u32),
    NotFound,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        if path.is_empty() {
            return Route::Listing;
        }
        path.strip_prefix("/product/")
            .and_then(|id| id.parse().ok())
            .map(Route::Product)
            .unwrap_or(Route::NotFound)
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Route::from_hash(&hash))
            .unwrap_or(Route::Listing)
    }

    pub fn href(&self) -> String {
        match self {
            Route::Listing => "#/".to_string(),
            Route::Product(id) => format!("#/product/{}", id),
            Route::NotFound => "#/404".to_string(),
        }
    }
}
