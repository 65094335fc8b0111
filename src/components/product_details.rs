//! Single product page with quantity stepper

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::product::{capitalize_first, clamp_quantity, MAX_QUANTITY};
use storefront_core::Product;
use web_sys::console;

use crate::api;
use crate::app::Route;

#[component]
pub fn ProductDetails(id: u32) -> impl IntoView {
    let (product, set_product) = signal::<Option<Result<Product, String>>>(None);

    spawn_local(async move {
        let result = api::get_product(id).await;
        if let Err(e) = &result {
            console::error_1(&format!("ProductDetails: Failed to load product {}: {}", id, e).into());
        }
        set_product.set(Some(result));
    });

    move || match product.get() {
        None => view! {
            <div class="loading">"Loading..."</div>
        }
        .into_any(),
        Some(Err(_)) => view! {
            <div class="load-error">
                <h1>"Product not available"</h1>
                <p class="muted">"This product could not be loaded. It may have been removed."</p>
                <div class="load-error-actions">
                    <a class="btn btn-primary" href=Route::Listing.href()>"Back to products"</a>
                </div>
            </div>
        }
        .into_any(),
        Some(Ok(product)) => view! { <ProductDetailsContent product=product /> }.into_any(),
    }
}

#[component]
fn ProductDetailsContent(product: Product) -> impl IntoView {
    let (quantity, set_quantity) = signal(1u8);

    let stars = product.detail_stars();
    let rating_text = product
        .rating
        .map(|r| format!("({:.1})", r.rate))
        .unwrap_or_default();
    let price_label = product.price_label();
    let total_product = product.clone();

    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                console::warn_1(&format!("ProductDetails: history.back failed: {:?}", e).into());
            }
        }
    };

    let decrease = move |_: web_sys::MouseEvent| set_quantity.update(|q| *q = clamp_quantity(i32::from(*q) - 1));
    let increase = move |_: web_sys::MouseEvent| set_quantity.update(|q| *q = clamp_quantity(i32::from(*q) + 1));

    view! {
        <div class="product-details">
            <header class="details-header">
                <nav class="breadcrumb" aria-label="Breadcrumb">
                    <a href=Route::Listing.href()>"Products"</a>
                    <span class="crumb-sep">"›"</span>
                    <span>{capitalize_first(&product.category)}</span>
                    <span class="crumb-sep">"›"</span>
                    <span class="crumb-title">{product.title.clone()}</span>
                </nav>
                <button type="button" class="btn-back" aria-label="Back" on:click=go_back>
                    "‹ Back"
                </button>
            </header>

            <div class="details-body">
                <section class="details-media">
                    <img src=product.image_ref.clone() alt=product.title.clone() class="details-image" />
                </section>

                <aside class="details-info">
                    <div class="details-meta">
                        <span class="category-badge">{product.category.clone()}</span>
                        <div class="stars" aria-hidden="true">
                            {stars.into_iter().map(|filled| view! {
                                <span class="star">{if filled { "★" } else { "☆" }}</span>
                            }).collect::<Vec<_>>()}
                        </div>
                        <span class="rating-number">{rating_text}</span>
                    </div>

                    <h1 class="details-title">{product.title.clone()}</h1>
                    <div class="details-price">{price_label}</div>

                    <div class="details-description">
                        <h3>"Description"</h3>
                        <p>{product.description.clone()}</p>
                    </div>

                    <div class="purchase-card">
                        <div class="purchase-row">
                            <div>
                                <div class="purchase-label">"Quantity"</div>
                                <div class="quantity-stepper">
                                    <button
                                        type="button"
                                        aria-label="Decrease quantity"
                                        disabled={move || quantity.get() <= 1}
                                        on:click=decrease
                                    >
                                        "−"
                                    </button>
                                    <span class="quantity-value">{move || quantity.get()}</span>
                                    <button
                                        type="button"
                                        aria-label="Increase quantity"
                                        disabled={move || quantity.get() >= MAX_QUANTITY}
                                        on:click=increase
                                    >
                                        "+"
                                    </button>
                                </div>
                            </div>
                            <div class="stock-info">
                                <div class="in-stock">"In Stock"</div>
                            </div>
                        </div>

                        // Cart and wishlist are placeholders
                        <div class="purchase-actions">
                            <button type="button" class="btn btn-primary btn-block">
                                <span>"Add to Cart"</span>
                                <span class="purchase-total">
                                    {move || total_product.total_label(quantity.get())}
                                </span>
                            </button>
                            <button type="button" class="btn btn-outline btn-block">
                                "Add to Wishlist"
                            </button>
                        </div>
                    </div>

                    <div class="shipping-card">
                        <h3>"Shipping & Returns"</h3>
                        <ul>
                            <li>"Free shipping on orders over $50"</li>
                            <li>"30-day return policy"</li>
                            <li>"1-year warranty included"</li>
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}
