//! Light/dark theme switch, remembered in localStorage

use leptos::prelude::*;
use storefront_core::PreferenceStore;
use web_sys::console;

use crate::browser::LocalStoragePrefs;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved choice, else the OS color scheme
    fn initial() -> Self {
        LocalStoragePrefs
            .get(THEME_KEY)
            .and_then(|saved| Theme::parse(&saved))
            .unwrap_or_else(|| {
                if prefers_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            })
    }

    /// Set `data-theme` on the root element
    fn apply(self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", self.as_str()) {
                console::warn_1(&format!("Failed to apply theme: {:?}", e).into());
            }
        }
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let initial = Theme::initial();
    initial.apply();
    let (theme, set_theme) = signal(initial);

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        next.apply();
        LocalStoragePrefs.set(THEME_KEY, next.as_str());
        set_theme.set(next);
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label="Toggle theme"
            title=move || match theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
            on:click=toggle
        >
            {move || match theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
