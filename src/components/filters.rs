//! Filters sidebar: search box, category and sort selects

use leptos::prelude::*;
use storefront_core::{ListingAction, SortMode};
use web_sys::console;

#[component]
pub fn Filters(
    search: Signal<String>,
    category: Signal<String>,
    categories: Signal<Vec<String>>,
    sort: Signal<SortMode>,
    dispatch: Callback<ListingAction>,
) -> impl IntoView {
    let on_search_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            dispatch.run(ListingAction::CommitSearch);
        }
    };

    let on_sort_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<SortMode>() {
            Ok(mode) => dispatch.run(ListingAction::SetSort(mode)),
            Err(e) => console::warn_1(&format!("Filters: {}", e).into()),
        }
    };

    view! {
        <aside class="filters">
            <div class="filter-group">
                <label class="filter-label" for="filter-search">"Search"</label>
                <div class="search-box">
                    <input
                        id="filter-search"
                        type="text"
                        placeholder="Search products..."
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            dispatch.run(ListingAction::SetSearch(event_target_value(&ev)));
                        }
                        on:keydown=on_search_keydown
                    />
                    <Show when=move || !search.get().is_empty()>
                        <button
                            class="search-clear"
                            on:click=move |_| dispatch.run(ListingAction::ClearSearch)
                            title="Clear search"
                        >
                            "×"
                        </button>
                    </Show>
                    <button
                        class="search-submit"
                        on:click=move |_| dispatch.run(ListingAction::CommitSearch)
                        title="Search"
                    >
                        "Search"
                    </button>
                </div>
            </div>

            <div class="filter-group">
                <label class="filter-label" for="filter-category">"Category"</label>
                <select
                    id="filter-category"
                    class="filter-select"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        dispatch.run(ListingAction::SetCategory(event_target_value(&ev)));
                    }
                >
                    <For
                        each=move || categories.get()
                        key=|c| c.clone()
                        children=move |c| {
                            let value = c.clone();
                            let is_selected = c.clone();
                            view! {
                                <option value=value selected=move || category.get() == is_selected>
                                    {c}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="filter-group">
                <label class="filter-label" for="filter-sort">"Sort By"</label>
                <select
                    id="filter-sort"
                    class="filter-select"
                    prop:value=move || sort.get().as_str()
                    on:change=on_sort_change
                >
                    {SortMode::all().iter().map(|mode| {
                        let mode = *mode;
                        view! {
                            <option value=mode.as_str() selected=move || sort.get() == mode>
                                {mode.label()}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </aside>
    }
}
