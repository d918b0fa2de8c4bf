//! Character cards: the draggable card in a container and the plain tile
//! used by the overlay, hover ghosts, and the detail modal.

use leptos::prelude::*;

use grid::character::Character;
use grid::collision::CollisionTarget;

use crate::util::dom::KIND_CHARACTER;

/// Image plus name, with no drag or drop markers.
#[component]
pub fn CharacterTile(
    character: Character,
    #[prop(optional)] ghost: bool,
    #[prop(optional)] overlay: bool,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let image = if large { character.image.clone() } else { character.card_image().to_owned() };
    view! {
        <div
            class="character-tile"
            class:character-tile--ghost=ghost
            class:character-tile--overlay=overlay
            class:character-tile--large=large
        >
            <img class="character-tile__image" src=image alt=character.name.clone() draggable="false" loading="lazy"/>
            <span class="character-tile__name">{character.name}</span>
        </div>
    }
}

/// A character inside a container: draggable, focusable, and a drop target
/// for reordering.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let grid = expect_context::<RwSignal<grid::engine::GridCore>>();
    let id = character.id.clone();
    let lifted = {
        let id = id.clone();
        move || grid.with(|g| g.active_character().is_some_and(|c| c.id == id))
    };
    let hovered = {
        let id = id.clone();
        move || {
            grid.with(|g| {
                g.drag_session()
                    .and_then(|s| s.over.as_ref())
                    .is_some_and(|over| matches!(over, CollisionTarget::Character(over_id) if *over_id == id))
            })
        }
    };
    let label = format!("{}, press space to pick up", character.name);

    view! {
        <div
            class="character-card"
            class:character-card--lifted=lifted
            class:character-card--over=hovered
            tabindex="0"
            role="button"
            aria-roledescription="draggable"
            aria-label=label
            data-drag-kind=KIND_CHARACTER
            data-drag-id=id.clone()
            data-drop-kind=KIND_CHARACTER
            data-drop-id=id
        >
            <CharacterTile character=character/>
        </div>
    }
}
