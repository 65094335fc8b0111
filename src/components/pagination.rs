use leptos::prelude::*;
use storefront_core::paginate::page_numbers;
use storefront_core::ListingAction;

/// Previous / numbered pages / Next
#[component]
pub fn Pagination(
    current: Signal<usize>,
    page_count: Signal<usize>,
    has_previous: Signal<bool>,
    has_next: Signal<bool>,
    dispatch: Callback<ListingAction>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="page-btn"
                disabled=move || !has_previous.get()
                on:click=move |_| dispatch.run(ListingAction::PreviousPage)
            >
                "Previous"
            </button>
            <For
                each={move || page_numbers(page_count.get()).collect::<Vec<_>>()}
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class="page-btn"
                            class:active=move || current.get() == page
                            aria-current=move || (current.get() == page).then_some("page")
                            on:click=move |_| dispatch.run(ListingAction::SetPage(page as i64))
                        >
                            {page}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || !has_next.get()
                on:click=move |_| dispatch.run(ListingAction::NextPage)
            >
                "Next"
            </button>
        </nav>
    }
}
