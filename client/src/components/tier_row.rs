//! One tier: handle, editable label and colour, its characters, and a
//! remove button.
//!
//! The whole row is a droppable container; the handle is both the tier's
//! drag handle and the drop target for reordering tiers. While a character
//! hovers the row, a ghost of it is shown at the end of the row.

#[cfg(test)]
#[path = "tier_row_test.rs"]
mod tier_row_test;

use leptos::prelude::*;

use grid::container::ContainerId;
use grid::engine::GridCore;
use grid::tier::{TierMeta, contrast_text_color};

use crate::components::character_card::{CharacterCard, CharacterTile};
use crate::util::dom::{KIND_CONTAINER, KIND_TIER, KIND_TIER_HANDLE};

/// Inline style of a tier label cell.
fn label_style(color: &str) -> String {
    format!("background-color: {color}; color: {}", contrast_text_color(color))
}

/// Coloured label chip, used by the row and the tier drag overlay.
#[component]
pub fn TierBadge(tier: TierMeta) -> impl IntoView {
    view! {
        <div class="tier-badge" style=label_style(&tier.color)>
            {tier.label}
        </div>
    }
}

/// A tier row, looked up by id so edits do not remount it.
#[component]
pub fn TierRow(tier_id: String) -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let container = ContainerId::tier(tier_id.as_str());

    let meta = {
        let tier_id = tier_id.clone();
        move || grid.with(|g| g.store().tier(&tier_id).cloned())
    };
    let label = {
        let meta = meta.clone();
        move || meta().map(|t| t.label).unwrap_or_default()
    };
    let color = {
        let meta = meta.clone();
        move || meta().map(|t| t.color).unwrap_or_default()
    };
    let characters = {
        let container = container.clone();
        move || grid.with(|g| g.resolve(&container).into_iter().cloned().collect::<Vec<_>>())
    };
    let preview = {
        let tier_id = tier_id.clone();
        move || grid.with(|g| g.hover_preview(&tier_id).cloned())
    };
    let is_empty = {
        let container = container.clone();
        let preview = preview.clone();
        move || grid.with(|g| g.store().items(&container).is_none_or(<[String]>::is_empty)) && preview().is_none()
    };
    let lifted = {
        let tier_id = tier_id.clone();
        move || grid.with(|g| g.active_tier().is_some_and(|t| t.id == tier_id))
    };

    let on_label_change = {
        let tier_id = tier_id.clone();
        let color = color.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let current = color();
            grid.update(|g| {
                g.update_tier(&tier_id, &value, &current);
            });
        }
    };
    let on_color_change = {
        let tier_id = tier_id.clone();
        let label = label.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let current = label();
            grid.update(|g| {
                g.update_tier(&tier_id, &current, &value);
            });
        }
    };
    let on_remove = {
        let tier_id = tier_id.clone();
        move |_| {
            grid.update(|g| {
                g.remove_tier(&tier_id);
            });
        }
    };

    let label_cell_style = {
        let color = color.clone();
        move || label_style(&color())
    };
    let handle_label = {
        let label = label.clone();
        move || format!("Tier {}, press space to reorder", label())
    };

    view! {
        <div
            class="tier-row"
            class:tier-row--lifted=lifted
            data-drop-kind=KIND_CONTAINER
            data-drop-id=tier_id.clone()
        >
            <div
                class="tier-row__handle"
                tabindex="0"
                role="button"
                aria-roledescription="draggable"
                aria-label=handle_label
                data-drag-kind=KIND_TIER
                data-drag-id=tier_id.clone()
                data-drop-kind=KIND_TIER_HANDLE
                data-drop-id=tier_id.clone()
            >
                "⋮⋮"
            </div>
            <div class="tier-row__label" style=label_cell_style>
                <input
                    class="tier-row__label-input"
                    type="text"
                    aria-label="Tier label"
                    prop:value=label
                    on:change=on_label_change
                />
                <input
                    class="tier-row__color-input"
                    type="color"
                    aria-label="Tier colour"
                    prop:value=color
                    on:change=on_color_change
                />
            </div>
            <div class="tier-row__items">
                <For
                    each=characters
                    key=|c| c.id.clone()
                    children=move |character| view! { <CharacterCard character=character/> }
                />
                {move || preview().map(|character| view! { <CharacterTile character=character ghost=true/> })}
                <Show when=is_empty>
                    <span class="tier-row__placeholder">"Drop characters here"</span>
                </Show>
            </div>
            <button class="tier-row__remove" title="Remove tier" aria-label="Remove tier" on:click=on_remove>
                "✕"
            </button>
        </div>
    }
}
