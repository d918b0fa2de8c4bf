//! Drag session controller: the gesture state machine and drop resolution.
//!
//! A gesture moves through [`DragState`]:
//!
//! - `Idle` → `Pending` on pointer-down over a draggable.
//! - `Pending` → `Dragging` once the pointer has travelled
//!   [`ACTIVATION_DISTANCE_PX`]; releasing earlier is a click.
//! - `Idle` → `Dragging` directly on a keyboard lift (Space/Enter).
//! - `Dragging` → `Dragging` on every move, recomputing the collision target.
//! - `Dragging` → `Idle` on release (with the final target) or cancel.
//!
//! The controller never touches the store. It reports a [`DragStep`] and the
//! caller turns a release into a [`DropOutcome`] via [`resolve_drop`], which
//! validates every id against the store before anything is mutated.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::character::CharacterId;
use crate::collision::{self, CollisionTarget, Droppable};
use crate::consts::ACTIVATION_DISTANCE_PX;
use crate::container::{ContainerId, TierId};
use crate::geometry::Point;
use crate::store::AssignmentStore;

/// The element being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    Character(CharacterId),
    /// A whole tier, grabbed by its handle.
    Tier(TierId),
}

impl DragSubject {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Character(id) | Self::Tier(id) => id,
        }
    }

    /// The collision target that represents the subject's own slot.
    #[must_use]
    pub fn home_target(&self) -> CollisionTarget {
        match self {
            Self::Character(id) => CollisionTarget::Character(id.clone()),
            Self::Tier(id) => CollisionTarget::TierHandle(id.clone()),
        }
    }
}

/// Which input device started the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Pointer,
    Keyboard,
}

/// Keyboard commands understood during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Space or Enter: lift when idle, drop when dragging.
    Toggle,
    Next,
    Previous,
    Cancel,
}

impl KeyCommand {
    /// Map a browser `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Spacebar" | "Enter" => Some(Self::Toggle),
            "ArrowDown" | "ArrowRight" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" => Some(Self::Previous),
            "Escape" | "Esc" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// An active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub subject: DragSubject,
    pub sensor: Sensor,
    /// Pointer position when the drag was armed.
    pub start: Point,
    /// Latest pointer position (keyboard drags track the hovered region's center).
    pub pointer: Point,
    /// Page scroll when the drag started.
    pub start_scroll: Point,
    /// Latest page scroll.
    pub scroll: Point,
    /// Current collision target.
    pub over: Option<CollisionTarget>,
}

impl DragSession {
    /// Page scroll since the drag started.
    #[must_use]
    pub fn scroll_offset(&self) -> Point {
        self.scroll.offset_from(self.start_scroll)
    }

    /// Translation for the overlay that follows the pointer: pointer travel
    /// plus the scroll offset, so the overlay stays under the pointer while
    /// the page scrolls.
    #[must_use]
    pub fn overlay_offset(&self) -> Point {
        let travel = self.pointer.offset_from(self.start);
        let scroll = self.scroll_offset();
        Point::new(travel.x + scroll.x, travel.y + scroll.y)
    }
}

/// Gesture state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down but has not travelled far enough to count as a drag.
    Pending { subject: DragSubject, start: Point, scroll: Point },
    Dragging(DragSession),
}

/// What a controller event did.
#[derive(Debug, Clone, PartialEq)]
pub enum DragStep {
    /// Nothing changed.
    Ignored,
    /// A press was registered; the drag has not started yet.
    Armed,
    /// The drag started.
    Lifted(DragSubject),
    /// The collision target changed.
    HoverChanged(Option<CollisionTarget>),
    /// The overlay moved but the target did not.
    Moved,
    /// The drag ended on `over` (possibly nothing).
    Released { subject: DragSubject, over: Option<CollisionTarget> },
    /// The drag ended without a drop.
    Cancelled(DragSubject),
    /// The press ended before activation.
    Clicked(DragSubject),
}

/// Drag state machine shared by the pointer and keyboard sensors.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The active drag, if one has started.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle | DragState::Pending { .. } => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    // --- Pointer sensor ---

    /// Arm a drag on `subject`. Ignored unless idle.
    pub fn pointer_down(&mut self, subject: DragSubject, pointer: Point, scroll: Point) -> DragStep {
        if !matches!(self.state, DragState::Idle) {
            return DragStep::Ignored;
        }
        self.state = DragState::Pending { subject, start: pointer, scroll };
        DragStep::Armed
    }

    /// Track pointer movement: activate a pending drag once it has travelled
    /// far enough, or update the collision target of an active one.
    pub fn pointer_move(&mut self, pointer: Point, droppables: &[Droppable]) -> DragStep {
        match &mut self.state {
            DragState::Idle => DragStep::Ignored,
            DragState::Pending { subject, start, scroll } => {
                if pointer.distance(*start) < ACTIVATION_DISTANCE_PX {
                    return DragStep::Ignored;
                }
                let (subject, start, scroll) = (subject.clone(), *start, *scroll);
                let over = collision::detect(&subject, pointer, droppables);
                self.state = DragState::Dragging(DragSession {
                    subject: subject.clone(),
                    sensor: Sensor::Pointer,
                    start,
                    pointer,
                    start_scroll: scroll,
                    scroll,
                    over,
                });
                DragStep::Lifted(subject)
            }
            DragState::Dragging(session) => {
                session.pointer = pointer;
                if session.sensor == Sensor::Keyboard {
                    return DragStep::Ignored;
                }
                let over = collision::detect(&session.subject, pointer, droppables);
                if over == session.over {
                    DragStep::Moved
                } else {
                    session.over.clone_from(&over);
                    DragStep::HoverChanged(over)
                }
            }
        }
    }

    /// Finish a pointer gesture. A pending press becomes a click; an active
    /// pointer drag is released on the target under `pointer`.
    pub fn pointer_up(&mut self, pointer: Point, droppables: &[Droppable]) -> DragStep {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragStep::Ignored,
            DragState::Pending { subject, .. } => DragStep::Clicked(subject),
            DragState::Dragging(session) if session.sensor == Sensor::Keyboard => {
                self.state = DragState::Dragging(session);
                DragStep::Ignored
            }
            DragState::Dragging(session) => {
                let over = collision::detect(&session.subject, pointer, droppables);
                DragStep::Released { subject: session.subject, over }
            }
        }
    }

    /// Page scroll changed.
    pub fn scroll(&mut self, scroll: Point) -> DragStep {
        match &mut self.state {
            DragState::Dragging(session) => {
                session.scroll = scroll;
                DragStep::Moved
            }
            DragState::Idle | DragState::Pending { .. } => DragStep::Ignored,
        }
    }

    /// Abort whatever is in progress.
    pub fn cancel(&mut self) -> DragStep {
        match std::mem::take(&mut self.state) {
            DragState::Idle | DragState::Pending { .. } => DragStep::Ignored,
            DragState::Dragging(session) => DragStep::Cancelled(session.subject),
        }
    }

    // --- Keyboard sensor ---

    /// Handle a key press. `focused` is the draggable holding keyboard focus.
    pub fn key_down(&mut self, command: KeyCommand, focused: Option<&DragSubject>, droppables: &[Droppable], scroll: Point) -> DragStep {
        match command {
            KeyCommand::Cancel => self.cancel(),
            KeyCommand::Toggle if self.is_dragging() => self.keyboard_drop(),
            KeyCommand::Toggle => match focused {
                Some(subject) if matches!(self.state, DragState::Idle) => {
                    self.keyboard_lift(subject.clone(), droppables, scroll)
                }
                _ => DragStep::Ignored,
            },
            KeyCommand::Next => self.keyboard_step(droppables, true),
            KeyCommand::Previous => self.keyboard_step(droppables, false),
        }
    }

    fn keyboard_lift(&mut self, subject: DragSubject, droppables: &[Droppable], scroll: Point) -> DragStep {
        let home = subject.home_target();
        let home_rect = collision::candidates(&subject, droppables)
            .into_iter()
            .find(|(target, _)| *target == home)
            .map(|(_, rect)| rect);
        let start = home_rect.map(|r| r.center()).unwrap_or_default();
        self.state = DragState::Dragging(DragSession {
            subject: subject.clone(),
            sensor: Sensor::Keyboard,
            start,
            pointer: start,
            start_scroll: scroll,
            scroll,
            over: home_rect.map(|_| home),
        });
        DragStep::Lifted(subject)
    }

    fn keyboard_drop(&mut self) -> DragStep {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => DragStep::Released { subject: session.subject, over: session.over },
            other => {
                self.state = other;
                DragStep::Ignored
            }
        }
    }

    fn keyboard_step(&mut self, droppables: &[Droppable], forward: bool) -> DragStep {
        let DragState::Dragging(session) = &mut self.state else {
            return DragStep::Ignored;
        };
        if session.sensor != Sensor::Keyboard {
            return DragStep::Ignored;
        }
        let candidates = collision::candidates(&session.subject, droppables);
        let targets = collision::candidate_targets(&session.subject, droppables);
        if targets.is_empty() {
            return DragStep::Ignored;
        }
        let current = session.over.as_ref().and_then(|over| targets.iter().position(|t| t == over));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => targets.len() - 1,
            (Some(i), true) => (i + 1) % targets.len(),
            (Some(i), false) => (i + targets.len() - 1) % targets.len(),
        };
        let target = targets[next].clone();
        if let Some((_, rect)) = candidates.iter().find(|(t, _)| *t == target) {
            session.pointer = rect.center();
        }
        session.over = Some(target.clone());
        DragStep::HoverChanged(Some(target))
    }
}

// =============================================================
// Drop resolution
// =============================================================

/// The store mutation a drop maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Move between containers; `index` of `None` appends.
    Moved { id: CharacterId, from: ContainerId, to: ContainerId, index: Option<usize> },
    /// Reorder inside one container.
    Reordered { container: ContainerId, from_index: usize, to_index: usize },
    /// Reorder the tier sequence.
    TiersReordered { from_index: usize, to_index: usize },
    /// Dropped back where it started.
    Unchanged,
    /// No valid target or a lookup failed.
    Cancelled,
}

impl DropOutcome {
    /// Apply to `store`. Returns whether anything changed.
    pub fn apply(&self, store: &mut AssignmentStore) -> bool {
        match self {
            Self::Moved { id, from, to, index } => store.move_item(id, from, to, *index),
            Self::Reordered { container, from_index, to_index } => {
                store.reorder_within_container(container, *from_index, *to_index)
            }
            Self::TiersReordered { from_index, to_index } => store.reorder_tiers(*from_index, *to_index),
            Self::Unchanged | Self::Cancelled => false,
        }
    }
}

/// Decide what dropping `subject` on `over` means for `store`.
#[must_use]
pub fn resolve_drop(store: &AssignmentStore, subject: &DragSubject, over: Option<&CollisionTarget>) -> DropOutcome {
    let Some(over) = over else {
        return DropOutcome::Cancelled;
    };
    match subject {
        DragSubject::Tier(tier_id) => resolve_tier_drop(store, tier_id, over),
        DragSubject::Character(id) => resolve_character_drop(store, id, over),
    }
}

fn resolve_tier_drop(store: &AssignmentStore, tier_id: &str, over: &CollisionTarget) -> DropOutcome {
    let CollisionTarget::TierHandle(over_id) = over else {
        return DropOutcome::Cancelled;
    };
    if over_id == tier_id {
        return DropOutcome::Unchanged;
    }
    match (store.tier_index(tier_id), store.tier_index(over_id)) {
        (Some(from_index), Some(to_index)) => DropOutcome::TiersReordered { from_index, to_index },
        _ => DropOutcome::Cancelled,
    }
}

fn resolve_character_drop(store: &AssignmentStore, id: &str, over: &CollisionTarget) -> DropOutcome {
    let Some((from, from_index)) = store.position(id) else {
        log::warn!("grid: dropped character {id:?} is not assigned");
        return DropOutcome::Cancelled;
    };
    match over {
        CollisionTarget::Container(to) => append_to(store, id, from, to.clone()),
        CollisionTarget::TierHandle(tier) => append_to(store, id, from, ContainerId::Tier(tier.clone())),
        CollisionTarget::Character(over_id) if over_id == id => DropOutcome::Unchanged,
        CollisionTarget::Character(over_id) => match store.position(over_id) {
            None => DropOutcome::Cancelled,
            Some((to, to_index)) if to == from => {
                DropOutcome::Reordered { container: from, from_index, to_index }
            }
            Some((to, to_index)) => DropOutcome::Moved { id: id.to_owned(), from, to, index: Some(to_index) },
        },
    }
}

fn append_to(store: &AssignmentStore, id: &str, from: ContainerId, to: ContainerId) -> DropOutcome {
    if !store.has_container(&to) {
        return DropOutcome::Cancelled;
    }
    if to == from {
        return DropOutcome::Unchanged;
    }
    DropOutcome::Moved { id: id.to_owned(), from, to, index: None }
}
