//! Listing page: filters sidebar, result header, product grid/list and pager
//!
//! All state lives in the core listing controller. The component keeps it in
//! a local `StoredValue`, sends it [`ListingAction`]s from event handlers and
//! republishes the derived view through a signal after every action.

use leptos::prelude::*;
use storefront_core::{ListingAction, Product};
use web_sys::console;

use crate::browser::mount_listing;
use crate::components::{Filters, Pagination, ProductGrid, ViewToggle};

#[component]
pub fn ProductListing(products: Vec<Product>) -> impl IntoView {
    let controller = StoredValue::new_local(mount_listing(products));
    let (view, set_view) = signal(controller.with_value(|c| c.view()));

    console::log_1(
        &format!(
            "ProductListing: {} products, search '{}', view {}",
            view.get_untracked().total,
            view.get_untracked().search_term,
            view.get_untracked().view_mode
        )
        .into(),
    );

    let dispatch = Callback::new(move |action: ListingAction| {
        controller.update_value(|c| c.apply(action));
        set_view.set(controller.with_value(|c| c.view()));
    });

    // Back/forward navigation changes the address under us
    let popstate_listener = window_event_listener(leptos::ev::popstate, move |_| {
        dispatch.run(ListingAction::SyncFromAddress);
    });

    on_cleanup(move || {
        popstate_listener.remove();
        controller.try_update_value(|c| c.unmount());
    });

    view! {
        <div class="listing-layout">
            <Filters
                search=Signal::derive(move || view.get().search_term)
                category=Signal::derive(move || view.get().category)
                categories=Signal::derive(move || view.get().categories)
                sort=Signal::derive(move || view.get().sort_mode)
                dispatch=dispatch
            />
            <section class="listing-results">
                <div class="listing-header">
                    <div class="listing-summary">
                        "Showing " <strong>{move || view.get().start}</strong>
                        "–" <strong>{move || view.get().end}</strong>
                        " of " <strong>{move || view.get().total}</strong> " products"
                    </div>
                    <ViewToggle
                        mode=Signal::derive(move || view.get().view_mode)
                        dispatch=dispatch
                    />
                </div>
                <ProductGrid
                    items=Signal::derive(move || view.get().visible_items)
                    view_mode=Signal::derive(move || view.get().view_mode)
                />
                <Pagination
                    current=Signal::derive(move || view.get().current_page)
                    page_count=Signal::derive(move || view.get().page_count)
                    has_previous=Signal::derive(move || view.get().has_previous)
                    has_next=Signal::derive(move || view.get().has_next)
                    dispatch=dispatch
                />
            </section>
        </div>
    }
}
