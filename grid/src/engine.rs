//! Grid core: characters, assignment store, and drag controller in one place.
//!
//! `GridCore` is what the UI holds. Input handlers take the event data plus
//! the droppable regions the host just measured, and return an [`Action`]
//! telling the host what to redraw or report. All store mutations go through
//! here, so the unknown-area watcher sees every change.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::character::{Character, CharacterId, NeverUnknown, UnknownPolicy};
use crate::collision::{CollisionTarget, Droppable};
use crate::container::{ContainerId, TierId};
use crate::drag::{DragController, DragSession, DragStep, DragSubject, DropOutcome, KeyCommand, resolve_drop};
use crate::geometry::Point;
use crate::layout::{LayoutContext, LayoutSeed, SharedLayout};
use crate::store::{AssignmentStore, LayoutSnapshot, ReconcileReport};
use crate::tier::{TierMeta, default_tiers};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// A drag started; show the overlay for this subject.
    DragStarted(DragSubject),
    /// The hovered target changed.
    HoverChanged(Option<CollisionTarget>),
    /// A drop changed the store.
    Dropped(DropOutcome),
    /// The drag ended without changing anything.
    DragEnded,
    /// A character was clicked without dragging.
    OpenDetail(CharacterId),
    RenderNeeded,
}

/// Tier list engine. Separated from the UI so it can be tested without a browser.
pub struct GridCore {
    characters: Vec<Character>,
    store: AssignmentStore,
    drag: DragController,
    policy: Box<dyn UnknownPolicy>,
    last_unknown: Vec<CharacterId>,
}

impl Default for GridCore {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            store: AssignmentStore::new(),
            drag: DragController::new(),
            policy: Box::new(NeverUnknown),
            last_unknown: Vec::new(),
        }
    }
}

impl GridCore {
    /// Default tiers with every character in the pool.
    #[must_use]
    pub fn new(characters: Vec<Character>) -> Self {
        let mut core = Self::default();
        let ids = ids_of(&characters);
        core.store.initialize(&ids, default_tiers());
        core.characters = characters;
        core
    }

    /// Restore tiers and placements from a shared layout, or fall back to
    /// [`Self::new`] when there is no seed.
    #[must_use]
    pub fn from_seed(characters: Vec<Character>, seed: Option<LayoutSeed>) -> Self {
        let Some(seed) = seed else {
            return Self::new(characters);
        };
        let mut core = Self::default();
        let ids = ids_of(&characters);
        core.store.initialize_seeded(&ids, seed.tiers, &seed.character_map);
        core.characters = characters;
        core
    }

    /// Replace the classification policy for characters added later.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn UnknownPolicy>) -> Self {
        self.policy = policy;
        self
    }

    // --- Data inputs ---

    /// Swap in a freshly loaded character list and reconcile the store.
    /// An active drag is cancelled since its subject may be gone.
    pub fn set_characters(&mut self, characters: Vec<Character>) -> ReconcileReport {
        self.drag.cancel();
        let report = self.store.reconcile_classified(&characters, self.policy.as_ref());
        self.characters = characters;
        report
    }

    /// Append a user-created character; it lands at the end of the pool.
    pub fn add_custom_character(&mut self, character: Character) -> ReconcileReport {
        if self.character(&character.id).is_some() {
            return ReconcileReport::default();
        }
        self.characters.push(character);
        self.store.reconcile_classified(&self.characters, self.policy.as_ref())
    }

    // --- Tiers ---

    pub fn add_tier(&mut self, label: Option<&str>, color: Option<&str>) -> TierId {
        self.store.add_tier(label, color)
    }

    pub fn remove_tier(&mut self, tier_id: &str) -> bool {
        self.store.remove_tier(tier_id)
    }

    pub fn update_tier(&mut self, tier_id: &str, label: &str, color: &str) -> bool {
        self.store.update_tier(tier_id, label, color)
    }

    pub fn reorder_tiers(&mut self, from_index: usize, to_index: usize) -> bool {
        self.store.reorder_tiers(from_index, to_index)
    }

    // --- Pointer / keyboard input ---

    pub fn on_pointer_down(&mut self, subject: DragSubject, pointer: Point, scroll: Point) -> Action {
        match self.drag.pointer_down(subject, pointer, scroll) {
            DragStep::Armed => Action::None,
            step => self.handle_step(step),
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Point, droppables: &[Droppable]) -> Action {
        let step = self.drag.pointer_move(pointer, droppables);
        self.handle_step(step)
    }

    pub fn on_pointer_up(&mut self, pointer: Point, droppables: &[Droppable]) -> Action {
        let step = self.drag.pointer_up(pointer, droppables);
        self.handle_step(step)
    }

    /// Pointer left the window or the browser cancelled the gesture.
    pub fn on_pointer_cancel(&mut self) -> Action {
        let step = self.drag.cancel();
        self.handle_step(step)
    }

    pub fn on_scroll(&mut self, scroll: Point) -> Action {
        let step = self.drag.scroll(scroll);
        self.handle_step(step)
    }

    /// Keyboard input. `key` is a `KeyboardEvent.key` value; `focused` is
    /// the draggable holding focus, if any.
    pub fn on_key_down(&mut self, key: &str, focused: Option<&DragSubject>, droppables: &[Droppable], scroll: Point) -> Action {
        let Some(command) = KeyCommand::from_key_name(key) else {
            return Action::None;
        };
        let step = self.drag.key_down(command, focused, droppables, scroll);
        self.handle_step(step)
    }

    fn handle_step(&mut self, step: DragStep) -> Action {
        match step {
            DragStep::Ignored | DragStep::Armed => Action::None,
            DragStep::Lifted(subject) => Action::DragStarted(subject),
            DragStep::HoverChanged(over) => Action::HoverChanged(over),
            DragStep::Moved => Action::RenderNeeded,
            DragStep::Cancelled(_) => Action::DragEnded,
            DragStep::Clicked(DragSubject::Character(id)) => Action::OpenDetail(id),
            DragStep::Clicked(DragSubject::Tier(_)) => Action::None,
            DragStep::Released { subject, over } => {
                let outcome = resolve_drop(&self.store, &subject, over.as_ref());
                if outcome.apply(&mut self.store) {
                    log::debug!("grid: drop applied {outcome:?}");
                    Action::Dropped(outcome)
                } else {
                    Action::DragEnded
                }
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn store(&self) -> &AssignmentStore {
        &self.store
    }

    #[must_use]
    pub fn tiers(&self) -> &[TierMeta] {
        self.store.tiers()
    }

    /// A container's characters in order, resolved to full records. Ids
    /// without a record are skipped.
    #[must_use]
    pub fn resolve(&self, container: &ContainerId) -> Vec<&Character> {
        self.store
            .items(container)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.character(id))
            .collect()
    }

    /// Current `{tiers, characterMap}`.
    #[must_use]
    pub fn layout(&self) -> LayoutSnapshot {
        self.store.snapshot()
    }

    /// Full export payload for `context`.
    #[must_use]
    pub fn export(&self, context: &LayoutContext) -> SharedLayout {
        SharedLayout::capture(context, &self.characters, self.store.snapshot())
    }

    /// The unknown area's contents when they differ from the last call.
    pub fn take_unknown_change(&mut self) -> Option<Vec<CharacterId>> {
        if self.store.unknown() == self.last_unknown.as_slice() {
            return None;
        }
        self.last_unknown = self.store.unknown().to_vec();
        Some(self.last_unknown.clone())
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// The character being dragged, for the overlay.
    #[must_use]
    pub fn active_character(&self) -> Option<&Character> {
        match &self.drag.session()?.subject {
            DragSubject::Character(id) => self.character(id),
            DragSubject::Tier(_) => None,
        }
    }

    /// The tier being dragged by its handle.
    #[must_use]
    pub fn active_tier(&self) -> Option<&TierMeta> {
        match &self.drag.session()?.subject {
            DragSubject::Tier(id) => self.store.tier(id),
            DragSubject::Character(_) => None,
        }
    }

    /// Ghost preview for `tier`: the dragged character while it hovers the
    /// tier (its body, handle, or one of its cards) and is not already in it.
    #[must_use]
    pub fn hover_preview(&self, tier_id: &str) -> Option<&Character> {
        let session = self.drag.session()?;
        let DragSubject::Character(id) = &session.subject else {
            return None;
        };
        let hovered_tier = match session.over.as_ref()? {
            CollisionTarget::Container(c) => c.tier_id().map(str::to_owned),
            CollisionTarget::TierHandle(t) => Some(t.clone()),
            CollisionTarget::Character(over) => self.store.locate(over).and_then(|c| c.tier_id().map(str::to_owned)),
        }?;
        if hovered_tier != tier_id || self.store.locate(id) == Some(ContainerId::tier(tier_id)) {
            return None;
        }
        self.character(id)
    }

    /// Overlay translation including scroll compensation.
    #[must_use]
    pub fn overlay_offset(&self) -> Point {
        self.drag.session().map(DragSession::overlay_offset).unwrap_or_default()
    }
}

fn ids_of(characters: &[Character]) -> Vec<CharacterId> {
    characters.iter().map(|c| c.id.clone()).collect()
}
