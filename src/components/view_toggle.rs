use leptos::prelude::*;
use storefront_core::{ListingAction, ViewMode};

/// Grid/list density switch. The choice is persisted by the listing controller.
#[component]
pub fn ViewToggle(mode: Signal<ViewMode>, dispatch: Callback<ListingAction>) -> impl IntoView {
    view! {
        <div class="view-toggle">
            {[ViewMode::Grid, ViewMode::List].into_iter().map(|option| {
                view! {
                    <button
                        type="button"
                        class="view-btn"
                        class:active=move || mode.get() == option
                        aria-label=option.label()
                        aria-pressed=move || (mode.get() == option).to_string()
                        title=option.label()
                        on:click=move |_| dispatch.run(ListingAction::SetViewMode(option))
                    >
                        {match option {
                            ViewMode::Grid => "Grid",
                            ViewMode::List => "List",
                        }}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
