//! Tier-list page: route-level coordinator for one ranking session.
//!
//! ARCHITECTURE
//! ============
//! Reads `/tier-list/:universe` plus the `filters`, `lang`, `variant`, and
//! `data` query parameters, fetches the character list, and owns the
//! page-scoped `RwSignal<GridCore>` and `RwSignal<TierListState>` contexts
//! that every tier-list component reads.
//!
//! TRADE-OFFS
//! ==========
//! A route change inside the same universe (filters edited) reconciles the
//! new character list into the existing grid so placements survive; a new
//! universe starts a fresh grid, seeded from `data` when present.

#[cfg(test)]
#[path = "tier_list_test.rs"]
mod tier_list_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use grid::catalog::Universe;
use grid::character::{Character, ForeignUniverse};
use grid::engine::GridCore;
use grid::layout::{LayoutSeed, PageParams};

use crate::components::app_header::AppHeader;
use crate::components::character_modal::CharacterModal;
use crate::components::custom_character_form::CustomCharacterForm;
use crate::components::export_panel::ExportPanel;
use crate::components::tier_list_grid::{TierListGrid, report_unknown};
use crate::net::api::fetch_characters;
use crate::state::config::AppConfig;
use crate::state::tier_list::{LoadStatus, TierListState};

/// How a finished fetch is applied to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reload {
    /// New grid from the fetched list (and seed).
    Fresh,
    /// Reconcile the fetched list into the current grid.
    Reconcile,
}

fn reload_kind(loaded_universe: Option<&str>, next_universe: &str) -> Reload {
    if loaded_universe == Some(next_universe) { Reload::Reconcile } else { Reload::Fresh }
}

/// Ticket counter for character loads. Only the newest load may apply its
/// result; anything issued before it is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LoadSequence(u64);

impl LoadSequence {
    fn issue(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    fn is_current(self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Grid for a freshly opened universe. Characters added later that belong
/// to another universe are held in the unknown area.
fn fresh_grid(universe: Universe, characters: Vec<Character>, seed: Option<LayoutSeed>) -> GridCore {
    GridCore::from_seed(characters, seed).with_policy(Box::new(ForeignUniverse::new(universe.id())))
}

#[component]
pub fn TierListPage() -> impl IntoView {
    let config = expect_context::<RwSignal<AppConfig>>();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let grid = RwSignal::new(GridCore::default());
    let page = RwSignal::new(TierListState::default());
    provide_context(grid);
    provide_context(page);

    let loaded_universe = RwSignal::new(None::<String>);
    let loads = RwSignal::new(LoadSequence::default());

    Effect::new(move || {
        let universe_id = params.read().get("universe").unwrap_or_default();
        let resolved = {
            let q = query.read();
            PageParams::resolve(
                &universe_id,
                q.get("filters").as_deref(),
                q.get("lang").as_deref(),
                q.get("variant").as_deref(),
                q.get("data").as_deref(),
            )
        };
        let Some(universe) = Universe::from_id(&universe_id) else {
            log::warn!("tier list: unknown universe {universe_id:?}");
            navigate("/", NavigateOptions::default());
            return;
        };

        config.set(config.get_untracked().with_universe(Some(universe)).with_language(&resolved.context.language));

        // PHASE: START LOAD
        // Later loads supersede earlier ones; a stale fetch is dropped.
        let reload = reload_kind(loaded_universe.get_untracked().as_deref(), universe.id());
        let filters = resolved.context.filters.clone();
        let seed = resolved.seed;
        page.update(|p| p.begin_load(resolved.context));
        let ticket = loads.try_update_untracked(LoadSequence::issue).unwrap_or_default();

        leptos::task::spawn_local(async move {
            let batch = fetch_characters(universe, &filters).await;
            if !loads.with_untracked(|l| l.is_current(ticket)) {
                log::debug!("tier list: dropping stale load {ticket}");
                return;
            }

            // PHASE: APPLY
            match reload {
                Reload::Fresh => grid.set(fresh_grid(universe, batch.characters, seed)),
                Reload::Reconcile => grid.update(|g| {
                    let report = g.set_characters(batch.characters);
                    if !report.is_noop() {
                        log::info!("tier list: reconciled {report:?}");
                    }
                }),
            }
            loaded_universe.set(Some(universe.id().to_owned()));
            page.update(|p| p.finish_load(batch.fallback));
            report_unknown(grid, page);
        });
    });

    let title = move || page.with(TierListState::title);
    let filter_labels = move || page.with(TierListState::filter_labels);

    view! {
        <div class="tier-list-page">
            <AppHeader/>
            <header class="tier-list-page__header">
                <h1 class="tier-list-page__title">{title}</h1>
                <ul class="tier-list-page__filters">
                    <For
                        each=filter_labels
                        key=|label| label.clone()
                        children=|label| view! { <li class="filter-chip">{label}</li> }
                    />
                </ul>
            </header>
            <Show when=move || page.with(|p| p.status == LoadStatus::Fallback)>
                <p class="tier-list-page__notice">"Could not reach the character source. Showing offline data."</p>
            </Show>
            <Show
                when=move || !page.with(TierListState::is_loading)
                fallback=|| view! { <div class="tier-list-page__loading">"Loading characters…"</div> }
            >
                <div class="tier-list-page__body">
                    <TierListGrid/>
                    <aside class="tier-list-page__side">
                        <ExportPanel/>
                        <CustomCharacterForm/>
                    </aside>
                </div>
            </Show>
            <CharacterModal/>
        </div>
    }
}
