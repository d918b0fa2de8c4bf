//! Collision detection against droppable regions.
//!
//! The host measures every droppable element (tier bodies, the pool, the
//! unknown panel, each character card, each tier drag handle) in client
//! coordinates and hands the list in on every pointer event. Detection runs
//! in two phases:
//!
//! 1. **Pointer containment**: regions that contain the pointer, ranked by the
//!    average distance from the pointer to their corners. A card inside a tier
//!    therefore beats the tier itself.
//! 2. **Closest center**: when nothing contains the pointer, the region whose
//!    center is nearest wins.
//!
//! Only regions that make sense for the dragged subject take part: tier drags
//! see tier handles only, character drags see containers and cards (a tier
//! handle counts as its tier's container).

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::character::CharacterId;
use crate::container::{ContainerId, TierId};
use crate::drag::DragSubject;
use crate::geometry::{Point, Rect};

/// What a dragged element is hovering over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionTarget {
    /// The body of a container; dropping here appends.
    Container(ContainerId),
    /// A character card; dropping here inserts before it.
    Character(CharacterId),
    /// A tier's drag handle; used for tier reordering.
    TierHandle(TierId),
}

/// A measured drop region.
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    pub target: CollisionTarget,
    pub rect: Rect,
}

impl Droppable {
    #[must_use]
    pub fn new(target: CollisionTarget, rect: Rect) -> Self {
        Self { target, rect }
    }
}

/// Run both phases and return the winning target, if any region qualifies.
#[must_use]
pub fn detect(subject: &DragSubject, pointer: Point, droppables: &[Droppable]) -> Option<CollisionTarget> {
    let candidates = candidates(subject, droppables);
    pointer_within(pointer, &candidates).or_else(|| closest_center(pointer, &candidates))
}

/// Regions eligible for `subject`, with tier handles mapped to their
/// container for character drags.
#[must_use]
pub fn candidates(subject: &DragSubject, droppables: &[Droppable]) -> Vec<(CollisionTarget, Rect)> {
    droppables
        .iter()
        .filter_map(|d| {
            let target = match (subject, &d.target) {
                (DragSubject::Tier(_), CollisionTarget::TierHandle(_)) => d.target.clone(),
                (DragSubject::Tier(_), _) => return None,
                (DragSubject::Character(_), CollisionTarget::TierHandle(id)) => {
                    CollisionTarget::Container(ContainerId::Tier(id.clone()))
                }
                (DragSubject::Character(_), other) => other.clone(),
            };
            Some((target, d.rect))
        })
        .collect()
}

/// Distinct eligible targets in registration order; keyboard drags step through these.
#[must_use]
pub fn candidate_targets(subject: &DragSubject, droppables: &[Droppable]) -> Vec<CollisionTarget> {
    let mut out: Vec<CollisionTarget> = Vec::new();
    for (target, _) in candidates(subject, droppables) {
        if !out.contains(&target) {
            out.push(target);
        }
    }
    out
}

/// Phase one: the containing region whose corners are closest on average.
#[must_use]
pub fn pointer_within(pointer: Point, candidates: &[(CollisionTarget, Rect)]) -> Option<CollisionTarget> {
    candidates
        .iter()
        .filter(|(_, rect)| rect.contains(pointer))
        .map(|(target, rect)| (target, mean_corner_distance(pointer, rect)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| target.clone())
}

/// Phase two: the region whose center is nearest the pointer.
#[must_use]
pub fn closest_center(pointer: Point, candidates: &[(CollisionTarget, Rect)]) -> Option<CollisionTarget> {
    candidates
        .iter()
        .map(|(target, rect)| (target, rect.center().distance(pointer)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| target.clone())
}

fn mean_corner_distance(pointer: Point, rect: &Rect) -> f64 {
    rect.corners().iter().map(|c| c.distance(pointer)).sum::<f64>() / 4.0
}
