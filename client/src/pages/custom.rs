//! Custom tier list: an empty board filled only with uploaded characters.
//!
//! Exports carry `universe: "custom"`. A share link opened here restores
//! both the uploaded characters and their placements from `data`.

#[cfg(test)]
#[path = "custom_test.rs"]
mod custom_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use grid::consts::{CUSTOM_UNIVERSE, SHARE_PARAM};
use grid::engine::GridCore;
use grid::layout::{LayoutContext, shared_from_query};

use crate::components::app_header::AppHeader;
use crate::components::character_modal::CharacterModal;
use crate::components::custom_character_form::CustomCharacterForm;
use crate::components::export_panel::ExportPanel;
use crate::components::tier_list_grid::TierListGrid;
use crate::state::config::AppConfig;
use crate::state::tier_list::TierListState;

fn custom_state() -> TierListState {
    let mut state = TierListState::new(LayoutContext { universe: CUSTOM_UNIVERSE.to_owned(), ..LayoutContext::default() });
    state.finish_load(false);
    state
}

/// Empty board with default tiers, or the board a share link describes.
fn custom_grid(data: Option<&str>) -> GridCore {
    let Some(shared) = shared_from_query(data) else {
        return GridCore::new(Vec::new());
    };
    let seed = match shared.seed() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("custom: share data has no layout: {e}");
            None
        }
    };
    GridCore::from_seed(shared.characters, seed)
}

#[component]
pub fn CustomTierListPage() -> impl IntoView {
    let config = expect_context::<RwSignal<AppConfig>>();
    if config.with_untracked(|c| c.universe.is_some()) {
        config.set(config.get_untracked().with_universe(None));
    }

    let query = use_query_map();
    let data = query.with_untracked(|q| q.get(SHARE_PARAM));
    let grid = RwSignal::new(custom_grid(data.as_deref()));
    let page = RwSignal::new(custom_state());
    provide_context(grid);
    provide_context(page);

    let is_blank = move || grid.with(|g| g.characters().is_empty());

    view! {
        <div class="tier-list-page tier-list-page--custom">
            <AppHeader/>
            <header class="tier-list-page__header">
                <h1 class="tier-list-page__title">{move || page.with(TierListState::title)}</h1>
            </header>
            <Show when=is_blank>
                <p class="tier-list-page__notice">"Add characters with the form to start ranking."</p>
            </Show>
            <div class="tier-list-page__body">
                <TierListGrid/>
                <aside class="tier-list-page__side">
                    <CustomCharacterForm/>
                    <ExportPanel/>
                </aside>
            </div>
            <CharacterModal/>
        </div>
    }
}
