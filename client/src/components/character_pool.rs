//! Unranked characters.

use leptos::prelude::*;

use grid::container::ContainerId;
use grid::engine::GridCore;

use crate::components::character_card::CharacterCard;
use crate::util::dom::KIND_CONTAINER;

#[component]
pub fn CharacterPool() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let characters = move || grid.with(|g| g.resolve(&ContainerId::Pool).into_iter().cloned().collect::<Vec<_>>());
    let count = move || grid.with(|g| g.store().pool().len());

    view! {
        <section
            class="character-pool"
            data-drop-kind=KIND_CONTAINER
            data-drop-id=ContainerId::Pool.key().to_owned()
        >
            <h2 class="character-pool__title">"Characters " <span class="character-pool__count">{count}</span></h2>
            <div class="character-pool__items">
                <For
                    each=characters
                    key=|c| c.id.clone()
                    children=move |character| view! { <CharacterCard character=character/> }
                />
                <Show when=move || count() == 0>
                    <span class="character-pool__placeholder">"All characters have been ranked"</span>
                </Show>
            </div>
        </section>
    }
}
