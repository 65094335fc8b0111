//! Listing controller: owns search/category/sort/page/view state for one
//! product listing and derives the visible page from it.
//!
//! The controller is the only writer of [`ListingState`]. Everything it shows
//! is recomputed from `(products, search, category, sort, page)` on demand, so
//! there is no cached result that can drift from the inputs.

use std::rc::Rc;

use serde::Serialize;

use crate::address::AddressBar;
use crate::config::ListingConfig;
use crate::filter::{self, CATEGORY_ALL, SortMode};
use crate::paginate::{self, paginate};
use crate::prefs::{PreferenceStore, ViewMode, load_view_mode, save_view_mode};
use crate::product::Product;
use crate::query_sync::QuerySync;
use crate::schedule::Scheduler;

/// Scroll control for the page hosting the listing
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Viewport for hosts with nothing to scroll
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to_top(&self) {}
}

/// Mutable listing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub search_term: String,
    /// [`CATEGORY_ALL`] disables the category filter
    pub category: String,
    pub sort_mode: SortMode,
    /// 1-based, always within the current page count
    pub page: usize,
    pub view_mode: ViewMode,
}

/// Everything a presentation layer needs to draw the listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub visible_items: Vec<Product>,
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub categories: Vec<String>,
    pub view_mode: ViewMode,
    pub search_term: String,
    pub category: String,
    pub sort_mode: SortMode,
}

impl ListingView {
    /// `Showing 1–9 of 20 products`
    pub fn showing_label(&self) -> String {
        format!("Showing {}–{} of {} products", self.start, self.end, self.total)
    }
}

/// Inbound transitions, one per user or navigation event
#[derive(Debug, Clone, PartialEq)]
pub enum ListingAction {
    SetSearch(String),
    /// Enter key or search button
    CommitSearch,
    ClearSearch,
    /// The address changed under us (back/forward navigation)
    SyncFromAddress,
    SetCategory(String),
    SetSort(SortMode),
    SetPage(i64),
    NextPage,
    PreviousPage,
    SetViewMode(ViewMode),
}

pub struct ListingController<A, P, S, V>
where
    A: AddressBar + 'static,
    P: PreferenceStore,
    S: Scheduler,
    V: Viewport,
{
    config: ListingConfig,
    products: Vec<Product>,
    categories: Vec<String>,
    state: ListingState,
    search_sync: QuerySync<A, S>,
    prefs: P,
    viewport: V,
}

impl<A, P, S, V> ListingController<A, P, S, V>
where
    A: AddressBar + 'static,
    P: PreferenceStore,
    S: Scheduler,
    V: Viewport,
{
    /// Mount a listing over a fully loaded collection.
    ///
    /// The search term is seeded from the address and the view mode from the
    /// preference store; everything else starts at its default.
    pub fn new(
        products: Vec<Product>,
        config: ListingConfig,
        address: Rc<A>,
        prefs: P,
        scheduler: S,
        viewport: V,
    ) -> Self {
        let search_sync = QuerySync::new(config.search_param.clone(), address, scheduler, config.debounce());
        let state = ListingState {
            search_term: search_sync.read_inbound(),
            category: CATEGORY_ALL.to_string(),
            sort_mode: SortMode::Default,
            page: 1,
            view_mode: load_view_mode(&prefs, &config.view_mode_key),
        };
        let categories = filter::categories(&products);

        tracing::debug!(
            products = products.len(),
            categories = categories.len() - 1,
            search = %state.search_term,
            view_mode = %state.view_mode,
            "listing mounted"
        );

        Self {
            config,
            products,
            categories,
            state,
            search_sync,
            prefs,
            viewport,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// `All` plus every category in the collection, first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether a debounced address write is outstanding
    pub fn has_pending_sync(&self) -> bool {
        self.search_sync.has_pending()
    }

    fn filtered(&self) -> Vec<&Product> {
        filter::filter_products(
            &self.products,
            &self.state.search_term,
            &self.state.category,
            self.state.sort_mode,
        )
    }

    pub fn page_count(&self) -> usize {
        paginate::page_count(self.filtered().len(), self.config.page_size)
    }

    /// Derive the visible page from the current state
    pub fn view(&self) -> ListingView {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.state.page as i64, self.config.page_size);

        ListingView {
            visible_items: page.items.iter().map(|p| (*p).clone()).collect(),
            start: page.start,
            end: page.end,
            total: page.total,
            page_count: page.page_count,
            current_page: page.page,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            categories: self.categories.clone(),
            view_mode: self.state.view_mode,
            search_term: self.state.search_term.clone(),
            category: self.state.category.clone(),
            sort_mode: self.state.sort_mode,
        }
    }

    pub fn apply(&mut self, action: ListingAction) {
        match action {
            ListingAction::SetSearch(term) => self.set_search(term),
            ListingAction::CommitSearch => self.commit_search(),
            ListingAction::ClearSearch => self.clear_search(),
            ListingAction::SyncFromAddress => self.sync_from_address(),
            ListingAction::SetCategory(category) => self.set_category(category),
            ListingAction::SetSort(mode) => self.set_sort(mode),
            ListingAction::SetPage(page) => {
                self.set_page(page);
            }
            ListingAction::NextPage => {
                self.next_page();
            }
            ListingAction::PreviousPage => {
                self.previous_page();
            }
            ListingAction::SetViewMode(mode) => self.set_view_mode(mode),
        }
    }

    // Search, category and sort changes can shrink the result, so each one
    // puts the user back on the first page.
    fn reset_page(&mut self) {
        self.state.page = 1;
    }

    fn assign_search(&mut self, term: String) {
        if term != self.state.search_term {
            self.state.search_term = term;
            self.reset_page();
        }
    }

    /// Update the search term; the address follows after the debounce delay
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.assign_search(term.into());
        self.search_sync.schedule_outbound(&self.state.search_term);
        tracing::debug!(search = %self.state.search_term, "search changed");
    }

    /// Write the current search term to the address now
    pub fn commit_search(&mut self) {
        self.search_sync.flush(&self.state.search_term);
    }

    pub fn clear_search(&mut self) {
        self.assign_search(String::new());
        self.search_sync.flush("");
    }

    /// Take the search term from the address when its parameter changed,
    /// dropping any pending write. Navigation that leaves it alone is a no-op.
    pub fn sync_from_address(&mut self) {
        let Some(term) = self.search_sync.take_inbound_change() else {
            return;
        };
        tracing::debug!(search = %term, "search read from address");
        self.assign_search(term);
        self.search_sync.schedule_outbound(&self.state.search_term);
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.state.category {
            tracing::debug!(%category, "category changed");
            self.state.category = category;
            self.reset_page();
        }
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        if mode != self.state.sort_mode {
            tracing::debug!(sort = %mode, "sort changed");
            self.state.sort_mode = mode;
            self.reset_page();
        }
    }

    /// Move to `page` if it exists. Returns whether the move was accepted;
    /// out-of-range pages are ignored.
    pub fn set_page(&mut self, page: i64) -> bool {
        let page_count = self.page_count();
        if page < 1 || page > page_count as i64 {
            tracing::debug!(page, page_count, "ignoring out-of-range page");
            return false;
        }
        self.state.page = page as usize;
        self.viewport.scroll_to_top();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.page as i64 + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.page as i64 - 1)
    }

    /// Switch density and persist it immediately
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
        save_view_mode(&self.prefs, &self.config.view_mode_key, mode);
    }

    /// Swap in a new collection, e.g. after a refetch
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.categories = filter::categories(&self.products);
        if self.state.page > self.page_count() {
            self.reset_page();
        }
    }

    /// Tear down: cancel any pending address write
    pub fn unmount(&mut self) {
        self.search_sync.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::MemoryAddress;
    use crate::prefs::{MemoryPrefs, VIEW_MODE_KEY};
    use crate::schedule::ManualScheduler;
    use crate::testing::{RecordingViewport, catalog, product};

    type TestListing = ListingController<MemoryAddress, Rc<MemoryPrefs>, ManualScheduler, RecordingViewport>;

    struct Harness {
        address: Rc<MemoryAddress>,
        prefs: Rc<MemoryPrefs>,
        scheduler: ManualScheduler,
        viewport: RecordingViewport,
        listing: TestListing,
    }

    fn mount(products: Vec<Product>, query: &str, prefs: MemoryPrefs) -> Harness {
        let address = Rc::new(MemoryAddress::new(query));
        let prefs = Rc::new(prefs);
        let scheduler = ManualScheduler::new();
        let viewport = RecordingViewport::new();
        let listing = ListingController::new(
            products,
            ListingConfig::default(),
            Rc::clone(&address),
            Rc::clone(&prefs),
            scheduler.clone(),
            viewport.clone(),
        );
        Harness { address, prefs, scheduler, viewport, listing }
    }

    #[test]
    fn test_mount_defaults() {
        let h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        let state = h.listing.state();
        assert_eq!(state.search_term, "");
        assert_eq!(state.category, "All");
        assert_eq!(state.sort_mode, SortMode::Default);
        assert_eq!(state.page, 1);
        assert_eq!(state.view_mode, ViewMode::Grid);
    }

    #[test]
    fn test_mount_seeds_from_address_and_prefs() {
        let h = mount(
            catalog(5, &["a"]),
            "?search=Item%203",
            MemoryPrefs::with_value(VIEW_MODE_KEY, "list"),
        );
        assert_eq!(h.listing.state().search_term, "Item 3");
        assert_eq!(h.listing.state().view_mode, ViewMode::List);
        assert_eq!(h.listing.view().total, 1);
        assert!(!h.listing.has_pending_sync());
    }

    #[test]
    fn test_set_page_bounds_and_scroll() {
        let mut h = mount(catalog(20, &["a"]), "", MemoryPrefs::new());
        assert!(!h.listing.set_page(0));
        assert!(!h.listing.set_page(4));
        assert_eq!(h.viewport.scrolls(), 0);

        assert!(h.listing.set_page(2));
        assert_eq!(h.listing.state().page, 2);
        assert_eq!(h.viewport.scrolls(), 1);

        assert!(h.listing.next_page());
        assert!(!h.listing.next_page());
        assert_eq!(h.listing.state().page, 3);
        assert!(h.listing.previous_page());
        assert_eq!(h.listing.state().page, 2);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut h = mount(catalog(30, &["a", "b"]), "", MemoryPrefs::new());
        h.listing.set_page(3);

        h.listing.set_sort(SortMode::PriceDesc);
        assert_eq!(h.listing.state().page, 1);

        h.listing.set_page(2);
        h.listing.set_category("b");
        assert_eq!(h.listing.state().page, 1);
        assert_eq!(h.listing.view().total, 15);

        h.listing.set_page(2);
        h.listing.set_search("Item 1");
        assert_eq!(h.listing.state().page, 1);
    }

    #[test]
    fn test_unchanged_values_keep_page() {
        let mut h = mount(catalog(30, &["a"]), "", MemoryPrefs::new());
        h.listing.set_page(2);
        h.listing.set_category("All");
        h.listing.set_sort(SortMode::Default);
        h.listing.set_search("");
        assert_eq!(h.listing.state().page, 2);
    }

    #[test]
    fn test_search_reaches_address_after_debounce() {
        let mut h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        h.listing.set_search("Item");
        assert_eq!(h.address.param("search"), None);
        h.scheduler.advance(300);
        assert_eq!(h.address.param("search"), Some("Item".to_string()));
    }

    #[test]
    fn test_commit_and_clear_flush_immediately() {
        let mut h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        h.listing.apply(ListingAction::SetSearch("  Item 2 ".to_string()));
        h.listing.apply(ListingAction::CommitSearch);
        assert_eq!(h.address.param("search"), Some("Item 2".to_string()));
        assert!(!h.listing.has_pending_sync());

        h.listing.apply(ListingAction::ClearSearch);
        assert_eq!(h.address.query(), "");
        assert_eq!(h.listing.state().search_term, "");
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_navigation_supersedes_pending_write() {
        let mut h = mount(catalog(5, &["a"]), "search=Item%201", MemoryPrefs::new());
        h.listing.set_search("Item 4");
        assert!(h.listing.has_pending_sync());

        h.address.navigate("search=Item%202");
        h.listing.apply(ListingAction::SyncFromAddress);
        assert_eq!(h.listing.state().search_term, "Item 2");
        assert!(!h.listing.has_pending_sync());

        h.scheduler.advance(1_000);
        assert_eq!(h.address.param("search"), Some("Item 2".to_string()));
        assert!(h.address.replacements().is_empty());
    }

    #[test]
    fn test_view_pager_flags_follow_page() {
        let mut h = mount(catalog(20, &["a"]), "", MemoryPrefs::new());
        let first = h.listing.view();
        assert!(!first.has_previous);
        assert!(first.has_next);

        h.listing.apply(ListingAction::NextPage);
        let middle = h.listing.view();
        assert!(middle.has_previous && middle.has_next);

        h.listing.apply(ListingAction::SetPage(3));
        let last = h.listing.view();
        assert!(last.has_previous);
        assert!(!last.has_next);

        h.listing.set_search("Item 20");
        let single = h.listing.view();
        assert!(!single.has_previous && !single.has_next);
    }

    #[test]
    fn test_hash_only_navigation_keeps_pending_search() {
        let mut h = mount(catalog(12, &["a"]), "", MemoryPrefs::new());
        h.listing.set_search("Item 1");
        h.scheduler.advance(100);

        // Address untouched, e.g. popstate from a `#/` link
        h.listing.apply(ListingAction::SyncFromAddress);
        assert_eq!(h.listing.state().search_term, "Item 1");
        assert!(h.listing.has_pending_sync());

        h.scheduler.advance(200);
        assert_eq!(h.address.param("search"), Some("Item 1".to_string()));
        assert_eq!(h.address.replacements().len(), 1);

        // The listing's own write does not count as navigation either
        h.listing.set_search("Item 11");
        h.listing.apply(ListingAction::SyncFromAddress);
        assert_eq!(h.listing.state().search_term, "Item 11");
        h.scheduler.advance(300);
        assert_eq!(h.address.param("search"), Some("Item 11".to_string()));
    }

    #[test]
    fn test_unmount_cancels_pending_write() {
        let mut h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        h.listing.set_search("Item");
        h.listing.unmount();
        h.scheduler.advance(1_000);
        assert!(h.address.replacements().is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_write() {
        let Harness { address, scheduler, mut listing, .. } = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        listing.set_search("Item");
        drop(listing);
        scheduler.advance(1_000);
        assert!(address.replacements().is_empty());
    }

    #[test]
    fn test_view_mode_persists_synchronously() {
        let mut h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        h.listing.apply(ListingAction::SetViewMode(ViewMode::List));
        assert_eq!(h.prefs.get(VIEW_MODE_KEY).as_deref(), Some("list"));
        assert_eq!(h.listing.view().view_mode, ViewMode::List);
    }

    #[test]
    fn test_view_mode_survives_storage_failure() {
        let mut h = mount(catalog(5, &["a"]), "", MemoryPrefs::new());
        h.prefs.set_unavailable(true);
        h.listing.set_view_mode(ViewMode::List);
        assert_eq!(h.listing.state().view_mode, ViewMode::List);
    }

    #[test]
    fn test_replace_products_recomputes_categories_and_clamps_page() {
        let mut h = mount(catalog(20, &["a", "b"]), "", MemoryPrefs::new());
        h.listing.set_page(3);
        h.listing.replace_products(vec![
            product(1, "Ring", 5.0, "jewelery"),
            product(2, "Tee", 9.0, "clothing"),
        ]);
        assert_eq!(h.listing.categories(), &["All", "jewelery", "clothing"]);
        assert_eq!(h.listing.state().page, 1);
        assert_eq!(h.listing.view().end, 2);
    }

    #[test]
    fn test_showing_label() {
        let h = mount(catalog(20, &["a"]), "", MemoryPrefs::new());
        assert_eq!(h.listing.view().showing_label(), "Showing 1–9 of 20 products");
    }
}
