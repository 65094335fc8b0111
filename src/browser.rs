//! Browser-backed capabilities for the listing engine
//!
//! - address: `location.search` read, `history.replaceState` write
//! - preferences: `window.localStorage`
//! - debounce timers: `gloo_timers` timeouts
//! - viewport: smooth `window.scrollTo`

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use storefront_core::schedule::Task;
use storefront_core::{
    AddressBar, ListingConfig, ListingController, PreferenceStore, PrefsError, Product, Scheduler,
    TaskHandle, Viewport,
};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, console};

/// The listing controller as wired up in the browser
pub type BrowserListing = ListingController<LocationAddress, LocalStoragePrefs, TimeoutScheduler, WindowViewport>;

/// Mount a listing over `products` using the page's URL and localStorage
pub fn mount_listing(products: Vec<Product>) -> BrowserListing {
    ListingController::new(
        products,
        ListingConfig::default(),
        Rc::new(LocationAddress),
        LocalStoragePrefs,
        TimeoutScheduler,
        WindowViewport,
    )
}

// ============ Address ============

/// The current page URL
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationAddress;

impl AddressBar for LocationAddress {
    fn query(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let mut url = location.pathname().unwrap_or_else(|_| "/".to_string());
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url.push_str(&location.hash().unwrap_or_default());

        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            console::warn_1(&format!("Failed to update address: {:?}", e).into());
        }
    }
}

// ============ Preferences ============

/// Preferences kept in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePrefs;

fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .ok_or(PrefsError::Unavailable)?
        .local_storage()
        .map_err(|e| PrefsError::Backend(format!("{:?}", e)))?
        .ok_or(PrefsError::Unavailable)
}

impl PreferenceStore for LocalStoragePrefs {
    fn load(&self, key: &str) -> Result<Option<String>, PrefsError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PrefsError::Backend(format!("{:?}", e)))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PrefsError::Backend(format!("{:?}", e)))
    }

    // There is no tracing subscriber in the browser, so report here
    fn get(&self, key: &str) -> Option<String> {
        or_report(self.load(key), "read", key, console_warn).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        or_report(self.store(key, value), "save", key, console_warn);
    }
}

/// Unwrap a storage result, handing any failure to `report`
fn or_report<T>(result: Result<T, PrefsError>, action: &str, key: &str, report: impl FnOnce(String)) -> Option<T> {
    result
        .map_err(|e| report(format!("Failed to {} preference {}: {}", action, key, e)))
        .ok()
}

fn console_warn(message: String) {
    console::warn_1(&message.into());
}

// ============ Timers ============

/// Schedules tasks on the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

/// A pending browser timeout. Dropping it also cancels the timer.
pub struct TimeoutHandle(Timeout);

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Task) -> TimeoutHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutHandle(Timeout::new(millis, task))
    }
}

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

// ============ Viewport ============

/// The browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
