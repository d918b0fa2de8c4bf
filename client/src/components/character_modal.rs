//! Detail view for a clicked character.

#[cfg(test)]
#[path = "character_modal_test.rs"]
mod character_modal_test;

use leptos::prelude::*;

use grid::container::ContainerId;
use grid::engine::GridCore;

use crate::components::character_card::CharacterTile;
use crate::state::tier_list::TierListState;

/// Where a character currently sits, for display.
fn placement_label(core: &GridCore, id: &str) -> String {
    match core.store().locate(id) {
        Some(ContainerId::Tier(tier_id)) => {
            let label = core.store().tier(&tier_id).map_or(tier_id.clone(), |t| t.label.clone());
            format!("Ranked in tier {label}")
        }
        Some(ContainerId::Pool) => "Not ranked yet".to_owned(),
        Some(ContainerId::Unknown) => "Waiting in the unknown area".to_owned(),
        None => "Not on the board".to_owned(),
    }
}

#[component]
pub fn CharacterModal() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let page = expect_context::<RwSignal<TierListState>>();

    let detail = move || {
        let id = page.with(|p| p.detail_id.clone())?;
        grid.with(|g| g.character(&id).cloned().map(|c| (c, placement_label(g, &id))))
    };
    let close = move || page.update(TierListState::close_detail);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    move || {
        detail().map(|(character, placement)| {
            let universe = character.universe.clone();
            view! {
                <div class="dialog-backdrop" on:click=move |_| close()>
                    <div
                        class="dialog dialog--character"
                        role="dialog"
                        aria-modal="true"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <CharacterTile character=character large=true/>
                        <dl class="dialog__facts">
                            <dt>"Universe"</dt>
                            <dd>{universe}</dd>
                            <dt>"Placement"</dt>
                            <dd>{placement}</dd>
                        </dl>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close() autofocus=true>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
