//! Storefront Core - listing state engine for the product catalog browser
//!
//! Filtering, pagination, address sync and view preferences for a product
//! collection held entirely in memory. Browser specifics stay behind the
//! [`AddressBar`], [`PreferenceStore`], [`Scheduler`] and [`Viewport`] traits.

pub mod address;
pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod paginate;
pub mod prefs;
pub mod product;
pub mod query_sync;
pub mod schedule;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use address::{AddressBar, MemoryAddress};
pub use config::ListingConfig;
pub use error::{CatalogError, ConfigError, ParseSortModeError, ParseViewModeError, PrefsError};
pub use filter::{CATEGORY_ALL, SortMode, categories, filter_products};
pub use listing::{ListingAction, ListingController, ListingState, ListingView, NoopViewport, Viewport};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use prefs::{MemoryPrefs, PreferenceStore, VIEW_MODE_KEY, ViewMode};
pub use product::{Product, Rating, StarFill};
pub use query_sync::QuerySync;
pub use schedule::{ManualScheduler, Scheduler, TaskHandle};
