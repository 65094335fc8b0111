use leptos::prelude::*;

use crate::app::Route;
use crate::components::ThemeToggle;

#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <header class="toolbar">
            <div class="toolbar-left">
                <a class="app-title" href=Route::Listing.href()>"Product Explorer"</a>
            </div>
            <div class="toolbar-right">
                <ThemeToggle />
            </div>
        </header>
    }
}
