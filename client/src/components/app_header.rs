//! Top bar: home link, active universe, and the dark mode switch.

use leptos::prelude::*;

use crate::state::config::AppConfig;
use crate::util::dark_mode;

#[component]
pub fn AppHeader() -> impl IntoView {
    let config = expect_context::<RwSignal<AppConfig>>();

    let on_toggle_theme = move |_| {
        let current = config.get_untracked();
        let next = dark_mode::toggle(current.dark_mode);
        config.set(current.with_dark_mode(next));
    };
    let universe_name = move || config.with(|c| c.universe.map(|u| u.name()));

    view! {
        <header class="app-header">
            <a class="app-header__home" href="/">"TierSaga"</a>
            {move || universe_name().map(|name| view! { <span class="app-header__universe">{name}</span> })}
            <button
                class="app-header__theme"
                title="Toggle dark mode"
                aria-label="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || if config.with(|c| c.dark_mode) { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
