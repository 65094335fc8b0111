//! Access to the shareable address (the page URL's query string)

use std::cell::RefCell;

/// Read and in-place replace the current query string.
///
/// Implementations take `&self` because the address is shared between the
/// listing controller and its pending debounced write.
pub trait AddressBar {
    /// Query string without the leading `?`
    fn query(&self) -> String;

    /// Replace the query string without adding a history entry
    fn replace_query(&self, query: &str);
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn split_pair(pair: &str) -> (&str, &str) {
    match pair.split_once('=') {
        Some((name, value)) => (name, value),
        None => (pair, ""),
    }
}

/// Look up a decoded parameter value. The first occurrence wins.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(split_pair)
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

/// Rebuild `query` with `name` set to `value`, or removed when `value` is `None`.
///
/// Other parameters keep their text and position. A parameter that was absent
/// is appended.
pub fn with_query_param(query: &str, name: &str, value: Option<&str>) -> String {
    let encoded = value.map(|v| format!("{}={}", urlencoding::encode(name), urlencoding::encode(v)));
    let mut replaced = false;
    let mut pairs: Vec<String> = Vec::new();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, _) = split_pair(pair);
        if decode_component(key) != name {
            pairs.push(pair.to_string());
            continue;
        }
        if !replaced {
            if let Some(encoded) = &encoded {
                pairs.push(encoded.clone());
            }
            replaced = true;
        }
    }

    if !replaced {
        if let Some(encoded) = encoded {
            pairs.push(encoded);
        }
    }

    pairs.join("&")
}

/// In-memory address for tests and hosts without a browser
#[derive(Debug, Default)]
pub struct MemoryAddress {
    query: RefCell<String>,
    replacements: RefCell<Vec<String>>,
}

impl MemoryAddress {
    pub fn new(query: &str) -> Self {
        Self {
            query: RefCell::new(query.trim_start_matches('?').to_string()),
            replacements: RefCell::new(Vec::new()),
        }
    }

    /// Simulate the user navigating to a different address
    pub fn navigate(&self, query: &str) {
        *self.query.borrow_mut() = query.trim_start_matches('?').to_string();
    }

    /// Every query written through [`AddressBar::replace_query`], oldest first
    pub fn replacements(&self) -> Vec<String> {
        self.replacements.borrow().clone()
    }

    pub fn param(&self, name: &str) -> Option<String> {
        query_param(&self.query.borrow(), name)
    }
}

impl AddressBar for MemoryAddress {
    fn query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.replacements.borrow_mut().push(query.to_string());
    }
}
