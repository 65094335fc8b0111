//! Plain-text rendering of a listing page

use std::fmt::Write;

use storefront_core::paginate::page_numbers;
use storefront_core::{ListingView, Product, StarFill, ViewMode};

const TITLE_WIDTH: usize = 40;

/// Header, the visible products and the page bar
pub fn render_listing(view: &ListingView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.showing_label());
    let mut filters = Vec::new();
    if !view.search_term.trim().is_empty() {
        filters.push(format!("search \"{}\"", view.search_term.trim()));
    }
    if view.category != storefront_core::CATEGORY_ALL {
        filters.push(format!("category {}", view.category));
    }
    filters.push(format!("sort {}", view.sort_mode.label()));
    let _ = writeln!(out, "({})", filters.join(", "));
    out.push('\n');

    if view.visible_items.is_empty() {
        out.push_str("No products match your filters.\n");
    } else {
        match view.view_mode {
            ViewMode::List => render_table(&mut out, &view.visible_items),
            ViewMode::Grid => render_cards(&mut out, &view.visible_items),
        }
    }

    out.push('\n');
    out.push_str(&page_bar(view.current_page, view.page_count));
    out.push('\n');
    out
}

fn render_table(out: &mut String, products: &[Product]) {
    let _ = writeln!(
        out,
        "{:>4}  {:<width$}  {:<18}  {:>6}  {:>9}",
        "ID",
        "Title",
        "Category",
        "Rating",
        "Price",
        width = TITLE_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(4 + 2 + TITLE_WIDTH + 2 + 18 + 2 + 6 + 2 + 9));
    for product in products {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:<18}  {:>6}  {:>9}",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            truncate(&product.category, 18),
            product.rating_label(),
            product.price_label(),
            width = TITLE_WIDTH
        );
    }
}

fn render_cards(out: &mut String, products: &[Product]) {
    for product in products {
        let _ = writeln!(
            out,
            "[{}] {}  {} ({})  {}",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            stars(product),
            product.rating_label(),
            product.price_label()
        );
        let _ = writeln!(out, "      {}", product.category);
    }
}

fn stars(product: &Product) -> String {
    product
        .card_stars()
        .iter()
        .map(|fill| match fill {
            StarFill::Full | StarFill::Half => '★',
            StarFill::Empty => '☆',
        })
        .collect()
}

/// `< Prev  1 [2] 3  Next >`, with unavailable ends dropped
pub fn page_bar(current: usize, page_count: usize) -> String {
    let mut parts = Vec::new();
    if current > 1 {
        parts.push("< Prev".to_string());
    }
    let numbers: Vec<String> = page_numbers(page_count)
        .map(|page| {
            if page == current {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();
    parts.push(numbers.join(" "));
    if current < page_count {
        parts.push("Next >".to_string());
    }
    parts.join("  ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
