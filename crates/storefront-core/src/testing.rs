//! Fixtures and test doubles shared by unit tests, integration tests and
//! downstream crates.

use std::cell::Cell;
use std::rc::Rc;

use crate::listing::Viewport;
use crate::product::{Product, Rating};

/// A minimal product with a 4.0 rating
pub fn product(id: u32, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        category: category.to_string(),
        description: format!("{title} description"),
        image_ref: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: Some(Rating { rate: 4.0, count: 10 }),
    }
}

/// `count` products cycling through `categories`, priced 1.0, 2.0, ...
/// With no categories given every product is `"general"`.
pub fn catalog(count: u32, categories: &[&str]) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let category = categories
                .get((id as usize - 1) % categories.len().max(1))
                .copied()
                .unwrap_or("general");
            product(id, &format!("Item {id}"), id as f64, category)
        })
        .collect()
}

/// Counts scroll-to-top requests
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    scrolls: Rc<Cell<usize>>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}
