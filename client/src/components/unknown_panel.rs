//! Holding area for characters that do not belong to the active universe.
//!
//! Hidden while empty, except during a character drag so it can still take
//! a drop.

use leptos::prelude::*;

use grid::container::ContainerId;
use grid::drag::DragSubject;
use grid::engine::GridCore;

use crate::components::character_card::CharacterCard;
use crate::state::tier_list::TierListState;
use crate::util::dom::KIND_CONTAINER;

#[component]
pub fn UnknownPanel() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let page = expect_context::<RwSignal<TierListState>>();
    let characters =
        move || grid.with(|g| g.resolve(&ContainerId::Unknown).into_iter().cloned().collect::<Vec<_>>());
    let visible = move || {
        !page.with(|p| p.unknown.is_empty())
            || grid.with(|g| g.drag_session().is_some_and(|s| matches!(s.subject, DragSubject::Character(_))))
    };

    view! {
        <Show when=visible>
            <section
                class="unknown-panel"
                data-drop-kind=KIND_CONTAINER
                data-drop-id=ContainerId::Unknown.key().to_owned()
            >
                <h2 class="unknown-panel__title">"Unknown"</h2>
                <p class="unknown-panel__hint">"Characters from outside this universe. Drag them into a tier or the pool."</p>
                <div class="unknown-panel__items">
                    <For
                        each=characters
                        key=|c| c.id.clone()
                        children=move |character| view! { <CharacterCard character=character/> }
                    />
                </div>
            </section>
        </Show>
    }
}
