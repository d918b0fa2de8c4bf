//! Drag host for the tier list: tiers, pool, unknown area, and overlay.
//!
//! ARCHITECTURE
//! ============
//! The root element takes pointer and keyboard input, measures every
//! `data-drop-*` region under it, and hands both to `GridCore`. The returned
//! `Action` fans out to the grid signal (membership or hover changed), the
//! page state (detail modal), the overlay offset, and the live region.
//!
//! DESIGN
//! ======
//! Pointer moves that only shift the overlay update a local offset signal
//! and leave the grid signal untouched, so tier rows re-render only when
//! something they show changes.

#[cfg(test)]
#[path = "tier_list_grid_test.rs"]
mod tier_list_grid_test;

use leptos::prelude::*;

use grid::container::ContainerId;
use grid::drag::{DragSubject, DropOutcome};
use grid::engine::{Action, GridCore};
use grid::geometry::{Point, Rect};

use crate::components::character_card::CharacterTile;
use crate::components::character_pool::CharacterPool;
use crate::components::tier_row::{TierBadge, TierRow};
use crate::components::unknown_panel::UnknownPanel;
use crate::state::tier_list::TierListState;
use crate::util::dom;

/// Whether grid subscribers need to see this action.
fn changes_grid(action: &Action) -> bool {
    !matches!(action, Action::None | Action::RenderNeeded)
}

/// Whether page state reacts to this action.
fn changes_page(action: &Action) -> bool {
    matches!(action, Action::OpenDetail(_) | Action::DragStarted(_))
}

/// Display name of a container for announcements.
fn container_label(core: &GridCore, container: &ContainerId) -> String {
    match container {
        ContainerId::Pool => "the pool".to_owned(),
        ContainerId::Unknown => "the unknown area".to_owned(),
        ContainerId::Tier(id) => {
            let label = core.store().tier(id).map_or(id.as_str(), |t| t.label.as_str());
            format!("tier {label}")
        }
    }
}

/// Screen-reader text for an action, if it is worth announcing.
fn announcement(core: &GridCore, action: &Action) -> Option<String> {
    let name = |id: &str| core.character(id).map_or_else(|| id.to_owned(), |c| c.name.clone());
    match action {
        Action::DragStarted(DragSubject::Character(id)) => Some(format!("Picked up {}.", name(id))),
        Action::DragStarted(DragSubject::Tier(id)) => {
            Some(format!("Picked up {}.", container_label(core, &ContainerId::tier(id.as_str()))))
        }
        Action::Dropped(DropOutcome::Moved { id, to, .. }) => {
            Some(format!("{} moved to {}.", name(id), container_label(core, to)))
        }
        Action::Dropped(DropOutcome::Reordered { container, to_index, .. }) => {
            Some(format!("Moved to position {} in {}.", to_index + 1, container_label(core, container)))
        }
        Action::Dropped(DropOutcome::TiersReordered { to_index, .. }) => {
            Some(format!("Tier moved to position {}.", to_index + 1))
        }
        Action::DragEnded => Some("Dropped. Nothing changed.".to_owned()),
        _ => None,
    }
}

/// Run one input handler against the grid and fan the result out.
fn dispatch(
    grid: RwSignal<GridCore>,
    page: RwSignal<TierListState>,
    offset: RwSignal<Point>,
    live: RwSignal<String>,
    handler: impl FnOnce(&mut GridCore) -> Action,
) -> Action {
    let Some(action) = grid.try_update_untracked(handler) else {
        return Action::None;
    };

    let next_offset = grid.with_untracked(GridCore::overlay_offset);
    if offset.get_untracked() != next_offset {
        offset.set(next_offset);
    }
    if changes_grid(&action) {
        log::debug!("tier list: {action:?}");
        grid.notify();
    }
    if changes_page(&action) {
        page.update(|p| {
            p.apply_action(&action);
        });
    }
    if let Some(text) = grid.with_untracked(|g| announcement(g, &action)) {
        live.set(text);
    }
    report_unknown(grid, page);
    action
}

/// Push unknown-area changes into page state. Call after any grid mutation
/// that can add characters.
pub fn report_unknown(grid: RwSignal<GridCore>, page: RwSignal<TierListState>) {
    if let Some(ids) = grid.try_update_untracked(GridCore::take_unknown_change).flatten() {
        page.update(|p| p.record_unknown(ids));
    }
}

#[cfg(feature = "csr")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "csr")]
fn droppables(root: NodeRef<leptos::html::Div>) -> Vec<grid::collision::Droppable> {
    root.get_untracked().map(|el| dom::measure_droppables(&el)).unwrap_or_default()
}

/// Keep the overlay anchored on the lifted element.
#[cfg(feature = "csr")]
fn track_overlay(root: NodeRef<leptos::html::Div>, origin: RwSignal<Option<Rect>>, action: &Action) {
    match action {
        Action::DragStarted(subject) => {
            let rect = root.get_untracked().and_then(|el| dom::subject_rect(&el, subject, dom::window_scroll()));
            origin.set(rect);
        }
        Action::Dropped(_) | Action::DragEnded | Action::OpenDetail(_) => origin.set(None),
        _ => {}
    }
}

/// Overlay anchor to draw with. A drag can end without an `Action`
/// reaching the host (a reload cancels it), so the anchor only counts while
/// the grid still has a drag session.
fn visible_overlay_origin(origin: Option<Rect>, dragging: bool) -> Option<Rect> {
    origin.filter(|_| dragging)
}

/// Overlay body for the active drag subject.
fn overlay_content(grid: RwSignal<GridCore>) -> Option<AnyView> {
    let (character, tier) = grid.with(|g| (g.active_character().cloned(), g.active_tier().cloned()));
    if let Some(character) = character {
        return Some(view! { <CharacterTile character=character overlay=true/> }.into_any());
    }
    tier.map(|tier| view! { <TierBadge tier=tier/> }.into_any())
}

/// Tier list drag host.
#[component]
pub fn TierListGrid() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let page = expect_context::<RwSignal<TierListState>>();
    let root = NodeRef::<leptos::html::Div>::new();
    let offset = RwSignal::new(Point::default());
    let overlay_origin = RwSignal::new(None::<Rect>);
    let live = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if grid.with_untracked(|g| g.drag_session().is_some()) {
                dispatch(grid, page, offset, live, |g| g.on_scroll(dom::window_scroll()));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if ev.button() != 0 || dom::is_form_control(ev.target()) {
                    return;
                }
                let Some(subject) = dom::subject_for(ev.target()) else {
                    return;
                };
                ev.prevent_default();
                if let Some(el) = root.get_untracked() {
                    let _ = el.set_pointer_capture(ev.pointer_id());
                }
                let pointer = pointer_point(&ev);
                let scroll = dom::window_scroll();
                dispatch(grid, page, offset, live, |g| g.on_pointer_down(subject, pointer, scroll));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if ev.buttons() == 0 {
                    return;
                }
                let pointer = pointer_point(&ev);
                let regions = droppables(root);
                let action = dispatch(grid, page, offset, live, |g| g.on_pointer_move(pointer, &regions));
                track_overlay(root, overlay_origin, &action);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let pointer = pointer_point(&ev);
                let regions = droppables(root);
                let action = dispatch(grid, page, offset, live, |g| g.on_pointer_up(pointer, &regions));
                track_overlay(root, overlay_origin, &action);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_cancel = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                let action = dispatch(grid, page, offset, live, GridCore::on_pointer_cancel);
                track_overlay(root, overlay_origin, &action);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                let dragging = grid.with_untracked(|g| g.drag_session().is_some());
                if !dragging && dom::is_form_control(ev.target()) {
                    return;
                }
                let focused = dom::focused_subject();
                let regions = droppables(root);
                let scroll = dom::window_scroll();
                let action =
                    dispatch(grid, page, offset, live, |g| g.on_key_down(&key, focused.as_ref(), &regions, scroll));
                if action != Action::None && dom::should_prevent_default_key(&key, true) {
                    ev.prevent_default();
                }
                track_overlay(root, overlay_origin, &action);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let tier_ids = move || grid.with(|g| g.tiers().iter().map(|t| t.id.clone()).collect::<Vec<_>>());
    let dragging = move || grid.with(|g| g.drag_session().is_some());
    let visible_origin = move || visible_overlay_origin(overlay_origin.get(), dragging());
    let overlay_style =
        move || visible_origin().map(|origin| dom::overlay_style(origin, offset.get())).unwrap_or_default();

    Effect::new(move || {
        if !dragging() && overlay_origin.get_untracked().is_some() {
            overlay_origin.set(None);
        }
    });

    view! {
        <div
            id=dom::GRID_ELEMENT_ID
            class="tier-list-grid"
            class:tier-list-grid--dragging=dragging
            node_ref=root
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:keydown=on_key_down
        >
            <div class="tier-list-grid__tiers">
                <For
                    each=tier_ids
                    key=|id| id.clone()
                    children=move |tier_id: String| view! { <TierRow tier_id=tier_id/> }
                />
            </div>
            <button
                class="btn tier-list-grid__add-tier"
                on:click=move |_| {
                    grid.update(|g| {
                        g.add_tier(None, None);
                    });
                }
            >
                "+ Add tier"
            </button>
            <CharacterPool/>
            <UnknownPanel/>
            <Show when=move || visible_origin().is_some()>
                <div class="drag-overlay" style=overlay_style aria-hidden="true">
                    {move || overlay_content(grid)}
                </div>
            </Show>
            <div class="sr-only" style=dom::VISUALLY_HIDDEN_STYLE aria-live="assertive">{move || live.get()}</div>
        </div>
    }
}
