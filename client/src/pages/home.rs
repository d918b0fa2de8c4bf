//! Home page: pick a universe to rank.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use grid::catalog::Universe;

use crate::components::app_header::AppHeader;
use crate::state::config::AppConfig;

/// Route of the custom tier list.
const CUSTOM_HREF: &str = "/custom";

/// Tier-list route for `universe` with every filter selected.
fn universe_href(universe: Universe) -> String {
    let filters = universe.all_filter_ids();
    if filters.is_empty() {
        format!("/tier-list/{}", universe.id())
    } else {
        format!("/tier-list/{}?filters={}", universe.id(), filters.join(","))
    }
}

/// Style giving a universe card its palette.
fn card_style(universe: Universe) -> String {
    let palette = universe.palette();
    format!("--card-primary: {}; --card-accent: {}", palette.primary, palette.accent)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<RwSignal<AppConfig>>();
    if config.with_untracked(|c| c.universe.is_some()) {
        config.set(config.get_untracked().with_universe(None));
    }

    view! {
        <div class="home-page">
            <AppHeader/>
            <main class="home-page__main">
                <h1 class="home-page__title">"Pick a universe"</h1>
                <div class="home-page__universes">
                    {Universe::ALL
                        .into_iter()
                        .map(|universe| {
                            view! {
                                <a class="universe-card" href=universe_href(universe) style=card_style(universe)>
                                    <span class="universe-card__name">{universe.name()}</span>
                                    <span class="universe-card__description">{universe.description()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <a class="universe-card universe-card--custom" href=CUSTOM_HREF>
                        <span class="universe-card__name">"Custom"</span>
                        <span class="universe-card__description">"Start empty and rank your own uploads."</span>
                    </a>
                </div>
            </main>
        </div>
    }
}
