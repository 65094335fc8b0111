//! Product grid and list views

use leptos::prelude::*;
use storefront_core::{Product, StarFill, ViewMode};

use crate::app::Route;

#[component]
pub fn ProductGrid(items: Signal<Vec<Product>>, view_mode: Signal<ViewMode>) -> impl IntoView {
    move || {
        let products = items.get();
        if products.is_empty() {
            return view! {
                <div class="empty-state">
                    <p>"No products match your filters."</p>
                </div>
            }
            .into_any();
        }

        match view_mode.get() {
            ViewMode::Grid => view! {
                <div class="product-grid">
                    {products.into_iter().map(|product| view! {
                        <ProductCard product=product />
                    }).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            ViewMode::List => view! {
                <div class="product-list">
                    {products.into_iter().map(|product| view! {
                        <ProductListItem product=product />
                    }).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }
    }
}

fn star_class(fill: StarFill) -> &'static str {
    // Half stars are drawn filled
    match fill {
        StarFill::Full | StarFill::Half => "star-filled",
        StarFill::Empty => "star-empty",
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = Route::Product(product.id).href();
    let stars = product.card_stars();
    let rating = product.rating_label();
    let price = product.price_label();

    view! {
        <article class="product-card">
            <a class="product-media" href=href aria-label=product.title.clone()>
                <img
                    src=product.image_ref.clone()
                    alt=product.title.clone()
                    class="product-image"
                    loading="lazy"
                />
            </a>
            <div class="product-content">
                <div class="product-title-row">
                    <h3 class="product-title">{product.title.clone()}</h3>
                    <span class="category-tag">{product.category.clone()}</span>
                </div>
                <div class="product-meta">
                    <div class="rating-row">
                        <div class="stars" aria-hidden="true">
                            {stars.into_iter().map(|fill| view! {
                                <span class=star_class(fill)>"★"</span>
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="rating-number">{format!("({})", rating)}</div>
                    </div>
                    <div class="product-price">{price}</div>
                </div>
            </div>
        </article>
    }
}

#[component]
fn ProductListItem(product: Product) -> impl IntoView {
    let href = Route::Product(product.id).href();
    let rating = product.rating_label();
    let price = product.price_label();
    let reviews = product.rating.map(|r| format!("{} reviews", r.count)).unwrap_or_default();

    view! {
        <a class="product-list-item" href=href>
            <img src=product.image_ref.clone() alt=product.title.clone() class="product-thumb" loading="lazy" />
            <span class="product-title">{product.title.clone()}</span>
            <span class="category-tag">{product.category.clone()}</span>
            <span class="rating-number">{format!("★ {}", rating)}</span>
            <span class="review-count">{reviews}</span>
            <span class="product-price">{price}</span>
        </a>
    }
}
