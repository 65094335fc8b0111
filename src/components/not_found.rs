use leptos::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p class="muted">"The page you are looking for does not exist."</p>
            <a class="btn btn-primary" href=Route::Listing.href()>"Return Home"</a>
        </div>
    }
}
