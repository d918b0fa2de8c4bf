//! Assignment store: which character sits in which container, in what order.
//!
//! The store owns two independent pieces of state:
//!
//! - the ordered tier metadata list (`id`, `label`, `color`), and
//! - the assignment map: container → ordered character ids.
//!
//! Every public mutation validates its inputs before touching anything, so a
//! caller can never observe a state where a character id is missing or sits
//! in two containers at once. Invalid requests (unknown ids, unknown
//! containers, out-of-range indices) are reported as `false` and leave the
//! store untouched.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId, UnknownPolicy};
use crate::container::{ContainerId, TierId, is_reserved_key};
use crate::tier::{TierMeta, normalize_hex_color, palette_color};

/// Container key → ordered character ids, as exported and shared.
pub type AssignmentMap = BTreeMap<String, Vec<CharacterId>>;

/// Immutable view of the store suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub tiers: Vec<TierMeta>,
    #[serde(rename = "characterMap")]
    pub character_map: AssignmentMap,
}

/// What a reconcile pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Stale ids purged from their containers.
    pub removed: usize,
    /// New ids appended to the pool.
    pub added_to_pool: usize,
    /// New ids appended to the unknown area.
    pub added_to_unknown: usize,
}

impl ReconcileReport {
    /// Whether the pass left the assignment map untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed == 0 && self.added_to_pool == 0 && self.added_to_unknown == 0
    }
}

/// Canonical tier-list state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    tiers: Vec<TierMeta>,
    pool: Vec<CharacterId>,
    unknown: Vec<CharacterId>,
    tier_items: HashMap<TierId, Vec<CharacterId>>,
}

impl AssignmentStore {
    /// Create an empty store with no tiers and no characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already initialized with `ids` in the pool and empty `tiers`.
    #[must_use]
    pub fn with_characters(ids: &[CharacterId], tiers: Vec<TierMeta>) -> Self {
        let mut store = Self::new();
        store.initialize(ids, tiers);
        store
    }

    // --- Initialization ---

    /// Reset to the default state: every id in the pool, each tier empty,
    /// `unknown` empty. Duplicate ids keep their first occurrence; tiers with
    /// a reserved or repeated id are skipped.
    pub fn initialize(&mut self, ids: &[CharacterId], tiers: Vec<TierMeta>) {
        self.set_tiers(tiers);
        self.pool.clear();
        self.unknown.clear();
        self.reconcile(ids);
    }

    /// Initialize from a previously exported map, then reconcile against `ids`.
    ///
    /// Containers keyed by something other than `pool`, `unknown`, or one of
    /// `tiers` are dropped; their characters land in the pool through the
    /// reconcile pass. An id listed twice keeps its first placement in key order.
    pub fn initialize_seeded(&mut self, ids: &[CharacterId], tiers: Vec<TierMeta>, map: &AssignmentMap) {
        self.set_tiers(tiers);
        self.pool.clear();
        self.unknown.clear();

        let mut seen: HashSet<CharacterId> = HashSet::new();
        for (key, seq) in map {
            let container = ContainerId::from_key(key);
            let Some(dst) = self.items_mut(&container) else {
                log::debug!("grid: dropping seeded container {key:?} with {} ids", seq.len());
                continue;
            };
            for id in seq {
                if seen.insert(id.clone()) {
                    dst.push(id.clone());
                }
            }
        }
        self.reconcile(ids);
    }

    fn set_tiers(&mut self, tiers: Vec<TierMeta>) {
        self.tiers.clear();
        self.tier_items.clear();
        for tier in tiers {
            if is_reserved_key(&tier.id) || self.tier_items.contains_key(&tier.id) {
                log::warn!("grid: skipping tier with unusable id {:?}", tier.id);
                continue;
            }
            self.tier_items.insert(tier.id.clone(), Vec::new());
            self.tiers.push(tier);
        }
    }

    // --- Reconcile ---

    /// Re-sync against a fresh character list: purge ids no longer present,
    /// append genuinely new ids to the pool in list order. Ids that remain
    /// valid keep their container and position.
    pub fn reconcile(&mut self, ids: &[CharacterId]) -> ReconcileReport {
        self.reconcile_entries(ids.iter().map(|id| (id.as_str(), false)))
    }

    /// Like [`Self::reconcile`], but new characters that `policy` flags are
    /// appended to the unknown area instead of the pool.
    pub fn reconcile_classified(&mut self, characters: &[Character], policy: &dyn UnknownPolicy) -> ReconcileReport {
        self.reconcile_entries(characters.iter().map(|c| (c.id.as_str(), policy.is_unknown(c))))
    }

    fn reconcile_entries<'a>(&mut self, entries: impl Iterator<Item = (&'a str, bool)> + Clone) -> ReconcileReport {
        let live: HashSet<&str> = entries.clone().map(|(id, _)| id).collect();
        let mut report = ReconcileReport::default();

        for seq in self.sequences_mut() {
            let before = seq.len();
            seq.retain(|id| live.contains(id.as_str()));
            report.removed += before - seq.len();
        }

        let mut assigned: HashSet<CharacterId> = self.assigned_ids().into_iter().collect();
        for (id, unknown) in entries {
            if !assigned.insert(id.to_owned()) {
                continue;
            }
            if unknown {
                self.unknown.push(id.to_owned());
                report.added_to_unknown += 1;
            } else {
                self.pool.push(id.to_owned());
                report.added_to_pool += 1;
            }
        }

        if !report.is_noop() {
            log::debug!(
                "grid: reconcile removed={} pool+={} unknown+={}",
                report.removed,
                report.added_to_pool,
                report.added_to_unknown
            );
        }
        report
    }

    // --- Moves ---

    /// Move `id` out of `from` and into `to` at `target_index` (appended when
    /// the index is absent or past the end).
    ///
    /// Returns `false` without mutating when `id` is not in `from`, `to` does
    /// not exist, or the move would not change anything.
    pub fn move_item(&mut self, id: &str, from: &ContainerId, to: &ContainerId, target_index: Option<usize>) -> bool {
        if from == to {
            let Some(seq) = self.items(from) else {
                return false;
            };
            let Some(from_index) = seq.iter().position(|x| x == id) else {
                return false;
            };
            let last = seq.len() - 1;
            let to_index = target_index.map_or(last, |i| i.min(last));
            return self.reorder_within_container(from, from_index, to_index);
        }

        if self.items(to).is_none() {
            return false;
        }
        let Some(src) = self.items_mut(from) else {
            return false;
        };
        let Some(index) = src.iter().position(|x| x == id) else {
            return false;
        };
        let moved = src.remove(index);
        match self.items_mut(to) {
            Some(dst) => {
                match target_index {
                    Some(i) if i <= dst.len() => dst.insert(i, moved),
                    _ => dst.push(moved),
                }
                true
            }
            None => {
                if let Some(src) = self.items_mut(from) {
                    src.insert(index, moved);
                }
                false
            }
        }
    }

    /// Move the element at `from_index` to `to_index` within one container.
    ///
    /// `to_index` is the element's position in the resulting sequence.
    /// Returns `false` for identical or out-of-range indices.
    pub fn reorder_within_container(&mut self, container: &ContainerId, from_index: usize, to_index: usize) -> bool {
        let Some(seq) = self.items_mut(container) else {
            return false;
        };
        if from_index == to_index || from_index >= seq.len() || to_index >= seq.len() {
            return false;
        }
        let item = seq.remove(from_index);
        seq.insert(to_index, item);
        true
    }

    // --- Tiers ---

    /// Append a tier with an empty container and return its id.
    ///
    /// A non-empty `label` that is free and not reserved doubles as the id;
    /// otherwise the id is `Tier N`. A missing colour comes from the palette.
    pub fn add_tier(&mut self, label: Option<&str>, color: Option<&str>) -> TierId {
        let label = label.map(str::trim).filter(|l| !l.is_empty());
        let id = match label {
            Some(l) if !is_reserved_key(l) && !self.tier_items.contains_key(l) => l.to_owned(),
            _ => self.next_generated_tier_id(),
        };
        let default_color = palette_color(self.tiers.len());
        let color = color.map_or_else(|| default_color.to_owned(), |c| normalize_hex_color(c, default_color));
        let label = label.map_or_else(|| id.clone(), str::to_owned);

        log::debug!("grid: add tier {id:?}");
        self.tier_items.insert(id.clone(), Vec::new());
        self.tiers.push(TierMeta { id: id.clone(), label, color });
        id
    }

    fn next_generated_tier_id(&self) -> TierId {
        let mut n = self.tiers.len() + 1;
        loop {
            let candidate = format!("Tier {n}");
            if !self.tier_items.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Delete a tier; its characters are appended to the pool in their prior order.
    pub fn remove_tier(&mut self, tier_id: &str) -> bool {
        let Some(index) = self.tier_index(tier_id) else {
            return false;
        };
        self.tiers.remove(index);
        let freed = self.tier_items.remove(tier_id).unwrap_or_default();
        log::debug!("grid: remove tier {tier_id:?}, {} back to pool", freed.len());
        self.pool.extend(freed);
        true
    }

    /// Change a tier's label and colour. Membership is untouched. An empty
    /// label or unparseable colour keeps the previous value.
    pub fn update_tier(&mut self, tier_id: &str, label: &str, color: &str) -> bool {
        let Some(tier) = self.tiers.iter_mut().find(|t| t.id == tier_id) else {
            return false;
        };
        let label = label.trim();
        if !label.is_empty() {
            tier.label = label.to_owned();
        }
        tier.color = normalize_hex_color(color, &tier.color);
        true
    }

    /// Move a tier within the visual sequence. Membership is untouched.
    pub fn reorder_tiers(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index == to_index || from_index >= self.tiers.len() || to_index >= self.tiers.len() {
            return false;
        }
        let tier = self.tiers.remove(from_index);
        self.tiers.insert(to_index, tier);
        true
    }

    // --- Queries ---

    /// Tier metadata in visual order.
    #[must_use]
    pub fn tiers(&self) -> &[TierMeta] {
        &self.tiers
    }

    #[must_use]
    pub fn tier(&self, tier_id: &str) -> Option<&TierMeta> {
        self.tiers.iter().find(|t| t.id == tier_id)
    }

    #[must_use]
    pub fn tier_index(&self, tier_id: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t.id == tier_id)
    }

    #[must_use]
    pub fn pool(&self) -> &[CharacterId] {
        &self.pool
    }

    #[must_use]
    pub fn unknown(&self) -> &[CharacterId] {
        &self.unknown
    }

    /// Ordered contents of a container, or `None` if it does not exist.
    #[must_use]
    pub fn items(&self, container: &ContainerId) -> Option<&[CharacterId]> {
        match container {
            ContainerId::Pool => Some(&self.pool),
            ContainerId::Unknown => Some(&self.unknown),
            ContainerId::Tier(id) => self.tier_items.get(id).map(Vec::as_slice),
        }
    }

    fn items_mut(&mut self, container: &ContainerId) -> Option<&mut Vec<CharacterId>> {
        match container {
            ContainerId::Pool => Some(&mut self.pool),
            ContainerId::Unknown => Some(&mut self.unknown),
            ContainerId::Tier(id) => self.tier_items.get_mut(id),
        }
    }

    fn sequences_mut(&mut self) -> impl Iterator<Item = &mut Vec<CharacterId>> {
        [&mut self.pool, &mut self.unknown]
            .into_iter()
            .chain(self.tier_items.values_mut())
    }

    #[must_use]
    pub fn has_container(&self, container: &ContainerId) -> bool {
        self.items(container).is_some()
    }

    /// Every container in on-screen order: tiers, then pool, then unknown.
    #[must_use]
    pub fn container_ids(&self) -> Vec<ContainerId> {
        self.tiers
            .iter()
            .map(|t| ContainerId::Tier(t.id.clone()))
            .chain([ContainerId::Pool, ContainerId::Unknown])
            .collect()
    }

    /// The container holding `id` and its index there.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<(ContainerId, usize)> {
        self.container_ids().into_iter().find_map(|c| {
            let index = self.items(&c)?.iter().position(|x| x == id)?;
            Some((c, index))
        })
    }

    /// The container holding `id`.
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<ContainerId> {
        self.position(id).map(|(c, _)| c)
    }

    /// All assigned ids in on-screen container order.
    #[must_use]
    pub fn assigned_ids(&self) -> Vec<CharacterId> {
        self.container_ids()
            .iter()
            .filter_map(|c| self.items(c))
            .flatten()
            .cloned()
            .collect()
    }

    /// Number of assigned characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len() + self.unknown.len() + self.tier_items.values().map(Vec::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every assigned id appears exactly once and every tier has a container.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let ids = self.assigned_ids();
        let unique: HashSet<&CharacterId> = ids.iter().collect();
        unique.len() == ids.len()
            && ids.len() == self.len()
            && self.tiers.len() == self.tier_items.len()
            && self.tiers.iter().all(|t| self.tier_items.contains_key(&t.id))
    }

    /// Whether the containers partition exactly `ids`.
    #[must_use]
    pub fn is_partition_of(&self, ids: &[CharacterId]) -> bool {
        let expected: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let assigned = self.assigned_ids();
        let actual: HashSet<&str> = assigned.iter().map(String::as_str).collect();
        self.is_well_formed() && expected == actual
    }

    // --- Snapshot ---

    /// `{tiers, characterMap}` for export, sharing, and re-seeding.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        let character_map = self
            .container_ids()
            .into_iter()
            .filter_map(|c| {
                let seq = self.items(&c)?.to_vec();
                Some((c.key().to_owned(), seq))
            })
            .collect();
        LayoutSnapshot { tiers: self.tiers.clone(), character_map }
    }
}
