use super::*;
use crate::character::{ForeignUniverse, NeverUnknown};

fn ids(names: &[&str]) -> Vec<CharacterId> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

fn tiers(names: &[&str]) -> Vec<TierMeta> {
    names.iter().map(|n| TierMeta::new(*n, *n, "#ffffff")).collect()
}

fn store_abc_with_s() -> AssignmentStore {
    AssignmentStore::with_characters(&ids(&["a", "b", "c"]), tiers(&["S"]))
}

fn tier(id: &str) -> ContainerId {
    ContainerId::tier(id)
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_puts_everything_in_pool() {
    let store = store_abc_with_s();
    assert_eq!(store.pool(), ids(&["a", "b", "c"]).as_slice());
    assert_eq!(store.items(&tier("S")), Some(&[][..]));
    assert!(store.unknown().is_empty());
    assert!(store.is_partition_of(&ids(&["a", "b", "c"])));
}

#[test]
fn initialize_drops_duplicate_ids() {
    let store = AssignmentStore::with_characters(&ids(&["a", "b", "a"]), tiers(&["S"]));
    assert_eq!(store.pool(), ids(&["a", "b"]).as_slice());
    assert!(store.is_well_formed());
}

#[test]
fn initialize_skips_reserved_and_repeated_tier_ids() {
    let store = AssignmentStore::with_characters(&ids(&["a"]), tiers(&["S", "pool", "S", "unknown", "A"]));
    let tier_ids: Vec<&str> = store.tiers().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(tier_ids, ["S", "A"]);
    assert!(store.is_well_formed());
}

#[test]
fn initialize_resets_prior_state() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    store.initialize(&ids(&["x"]), tiers(&["A"]));
    assert_eq!(store.pool(), ids(&["x"]).as_slice());
    assert!(store.tier("S").is_none());
    assert_eq!(store.items(&tier("A")), Some(&[][..]));
}

#[test]
fn initialize_seeded_restores_placements() {
    let mut map = AssignmentMap::new();
    map.insert("S".into(), ids(&["c"]));
    map.insert("pool".into(), ids(&["a"]));
    let mut store = AssignmentStore::new();
    store.initialize_seeded(&ids(&["a", "b", "c"]), tiers(&["S"]), &map);
    assert_eq!(store.items(&tier("S")), Some(ids(&["c"]).as_slice()));
    // b was never placed, so reconcile appends it after a.
    assert_eq!(store.pool(), ids(&["a", "b"]).as_slice());
    assert!(store.is_partition_of(&ids(&["a", "b", "c"])));
}

#[test]
fn initialize_seeded_drops_stale_ids_and_unknown_containers() {
    let mut map = AssignmentMap::new();
    map.insert("S".into(), ids(&["a", "gone"]));
    map.insert("Z".into(), ids(&["b"]));
    let mut store = AssignmentStore::new();
    store.initialize_seeded(&ids(&["a", "b"]), tiers(&["S"]), &map);
    assert_eq!(store.items(&tier("S")), Some(ids(&["a"]).as_slice()));
    assert_eq!(store.pool(), ids(&["b"]).as_slice());
    assert!(store.items(&tier("Z")).is_none());
}

#[test]
fn initialize_seeded_keeps_first_placement_of_duplicates() {
    let mut map = AssignmentMap::new();
    map.insert("A".into(), ids(&["a"]));
    map.insert("S".into(), ids(&["a"]));
    let mut store = AssignmentStore::new();
    store.initialize_seeded(&ids(&["a"]), tiers(&["S", "A"]), &map);
    assert_eq!(store.locate("a"), Some(tier("A")));
    assert!(store.is_partition_of(&ids(&["a"])));
}

// =============================================================
// Reconcile
// =============================================================

#[test]
fn reconcile_purges_stale_and_appends_new() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("b", &ContainerId::Pool, &tier("S"), None));
    let report = store.reconcile(&ids(&["a", "c", "d"]));
    assert_eq!(report, ReconcileReport { removed: 1, added_to_pool: 1, added_to_unknown: 0 });
    assert_eq!(store.pool(), ids(&["a", "c", "d"]).as_slice());
    assert_eq!(store.items(&tier("S")), Some(&[][..]));
}

#[test]
fn reconcile_keeps_existing_positions() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("c", &ContainerId::Pool, &tier("S"), None));
    store.reconcile(&ids(&["c", "b", "a", "d"]));
    assert_eq!(store.items(&tier("S")), Some(ids(&["c"]).as_slice()));
    assert_eq!(store.pool(), ids(&["a", "b", "d"]).as_slice());
}

#[test]
fn reconcile_is_idempotent() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    let list = ids(&["a", "b", "e", "f"]);
    store.reconcile(&list);
    let once = store.clone();
    let second = store.reconcile(&list);
    assert!(second.is_noop());
    assert_eq!(store, once);
}

#[test]
fn reconcile_with_empty_list_clears_containers_but_keeps_tiers() {
    let mut store = store_abc_with_s();
    store.reconcile(&[]);
    assert!(store.is_empty());
    assert_eq!(store.tiers().len(), 1);
}

#[test]
fn reconcile_classified_routes_foreign_characters_to_unknown() {
    let mut store = AssignmentStore::with_characters(&[], tiers(&["S"]));
    let characters = vec![
        Character::new("p1", "Bulbasaur", "img", "pokemon"),
        Character::new("n1", "Naruto", "img", "naruto"),
        Character::new("custom-1", "Mine", "img", "custom"),
    ];
    let report = store.reconcile_classified(&characters, &ForeignUniverse::new("pokemon"));
    assert_eq!(report.added_to_pool, 2);
    assert_eq!(report.added_to_unknown, 1);
    assert_eq!(store.pool(), ids(&["p1", "custom-1"]).as_slice());
    assert_eq!(store.unknown(), ids(&["n1"]).as_slice());
}

#[test]
fn reconcile_classified_never_reclassifies_placed_characters() {
    let mut store = AssignmentStore::with_characters(&ids(&["n1"]), tiers(&["S"]));
    let characters = vec![Character::new("n1", "Naruto", "img", "naruto")];
    let report = store.reconcile_classified(&characters, &ForeignUniverse::new("pokemon"));
    assert!(report.is_noop());
    assert_eq!(store.pool(), ids(&["n1"]).as_slice());
}

#[test]
fn reconcile_classified_with_never_unknown_matches_plain_reconcile() {
    let characters = vec![Character::new("x", "X", "img", "other")];
    let mut classified = AssignmentStore::new();
    classified.reconcile_classified(&characters, &NeverUnknown);
    let mut plain = AssignmentStore::new();
    plain.reconcile(&ids(&["x"]));
    assert_eq!(classified, plain);
}

// =============================================================
// move_item
// =============================================================

#[test]
fn move_appends_to_target_when_no_index() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    assert_eq!(store.pool(), ids(&["b", "c"]).as_slice());
    assert_eq!(store.items(&tier("S")), Some(ids(&["a"]).as_slice()));
}

#[test]
fn move_inserts_at_index() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    assert!(store.move_item("b", &ContainerId::Pool, &tier("S"), None));
    assert!(store.move_item("c", &ContainerId::Pool, &tier("S"), Some(0)));
    assert_eq!(store.items(&tier("S")), Some(ids(&["c", "a", "b"]).as_slice()));
}

#[test]
fn move_with_out_of_range_index_appends() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    assert!(store.move_item("b", &ContainerId::Pool, &tier("S"), Some(99)));
    assert_eq!(store.items(&tier("S")), Some(ids(&["a", "b"]).as_slice()));
}

#[test]
fn move_from_wrong_container_is_rejected() {
    let mut store = store_abc_with_s();
    let before = store.clone();
    assert!(!store.move_item("a", &tier("S"), &ContainerId::Pool, None));
    assert_eq!(store, before);
}

#[test]
fn move_to_missing_container_is_rejected() {
    let mut store = store_abc_with_s();
    let before = store.clone();
    assert!(!store.move_item("a", &ContainerId::Pool, &tier("nope"), None));
    assert_eq!(store, before);
}

#[test]
fn move_unknown_id_is_rejected() {
    let mut store = store_abc_with_s();
    assert!(!store.move_item("zzz", &ContainerId::Pool, &tier("S"), None));
    assert!(store.is_partition_of(&ids(&["a", "b", "c"])));
}

#[test]
fn move_within_same_container_reorders() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &ContainerId::Pool, Some(2)));
    assert_eq!(store.pool(), ids(&["b", "c", "a"]).as_slice());
    assert!(store.move_item("a", &ContainerId::Pool, &ContainerId::Pool, Some(0)));
    assert_eq!(store.pool(), ids(&["a", "b", "c"]).as_slice());
}

#[test]
fn move_and_reorder_agree_within_one_container() {
    for (from, to) in [(0, 2), (2, 0), (1, 2), (0, 1)] {
        let mut moved = store_abc_with_s();
        let mut reordered = store_abc_with_s();
        let id = moved.pool()[from].clone();
        assert!(moved.move_item(&id, &ContainerId::Pool, &ContainerId::Pool, Some(to)));
        assert!(reordered.reorder_within_container(&ContainerId::Pool, from, to));
        assert_eq!(moved.pool(), reordered.pool(), "{from} -> {to}");
    }
}

#[test]
fn move_within_same_container_to_own_slot_is_noop() {
    let mut store = store_abc_with_s();
    assert!(!store.move_item("c", &ContainerId::Pool, &ContainerId::Pool, None));
    assert_eq!(store.pool(), ids(&["a", "b", "c"]).as_slice());
}

#[test]
fn move_into_unknown_and_back() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("b", &ContainerId::Pool, &ContainerId::Unknown, None));
    assert_eq!(store.locate("b"), Some(ContainerId::Unknown));
    assert!(store.move_item("b", &ContainerId::Unknown, &ContainerId::Pool, Some(1)));
    assert_eq!(store.pool(), ids(&["a", "b", "c"]).as_slice());
}

// =============================================================
// reorder_within_container
// =============================================================

#[test]
fn reorder_moves_first_to_last() {
    let mut store = store_abc_with_s();
    assert!(store.reorder_within_container(&ContainerId::Pool, 0, 2));
    assert_eq!(store.pool(), ids(&["b", "c", "a"]).as_slice());
}

#[test]
fn reorder_moves_last_to_first() {
    let mut store = store_abc_with_s();
    assert!(store.reorder_within_container(&ContainerId::Pool, 2, 0));
    assert_eq!(store.pool(), ids(&["c", "a", "b"]).as_slice());
}

#[test]
fn reorder_rejects_same_or_out_of_range_indices() {
    let mut store = store_abc_with_s();
    assert!(!store.reorder_within_container(&ContainerId::Pool, 1, 1));
    assert!(!store.reorder_within_container(&ContainerId::Pool, 0, 3));
    assert!(!store.reorder_within_container(&ContainerId::Pool, 5, 0));
    assert!(!store.reorder_within_container(&tier("missing"), 0, 1));
    assert_eq!(store.pool(), ids(&["a", "b", "c"]).as_slice());
}

// =============================================================
// Tiers
// =============================================================

#[test]
fn add_tier_generates_sequential_ids() {
    let mut store = AssignmentStore::new();
    assert_eq!(store.add_tier(None, None), "Tier 1");
    assert_eq!(store.add_tier(None, None), "Tier 2");
    assert_eq!(store.tier("Tier 2").map(|t| t.label.as_str()), Some("Tier 2"));
    assert_eq!(store.items(&tier("Tier 2")), Some(&[][..]));
}

#[test]
fn add_tier_skips_taken_generated_ids() {
    let mut store = AssignmentStore::with_characters(&[], tiers(&["Tier 2"]));
    assert_eq!(store.add_tier(None, None), "Tier 3");
}

#[test]
fn add_tier_uses_free_label_as_id() {
    let mut store = AssignmentStore::new();
    let id = store.add_tier(Some(" S "), Some("#FF0000"));
    assert_eq!(id, "S");
    let meta = store.tier("S").cloned();
    assert_eq!(meta, Some(TierMeta::new("S", "S", "#ff0000")));
}

#[test]
fn add_tier_with_taken_or_reserved_label_generates_id() {
    let mut store = AssignmentStore::with_characters(&[], tiers(&["S"]));
    let dup = store.add_tier(Some("S"), None);
    assert_eq!(dup, "Tier 2");
    assert_eq!(store.tier(&dup).map(|t| t.label.as_str()), Some("S"));
    let reserved = store.add_tier(Some("pool"), None);
    assert_eq!(reserved, "Tier 3");
    assert!(store.is_well_formed());
}

#[test]
fn add_tier_with_bad_color_falls_back_to_palette() {
    let mut store = AssignmentStore::new();
    let id = store.add_tier(None, Some("not a colour"));
    assert_eq!(store.tier(&id).map(|t| t.color.as_str()), Some(palette_color(0)));
}

#[test]
fn remove_tier_returns_members_to_pool_in_order() {
    let mut store = AssignmentStore::with_characters(&ids(&["x", "y", "z"]), tiers(&["S"]));
    assert!(store.move_item("x", &ContainerId::Pool, &tier("S"), None));
    assert!(store.move_item("y", &ContainerId::Pool, &tier("S"), None));
    assert_eq!(store.items(&tier("S")), Some(ids(&["x", "y"]).as_slice()));
    assert!(store.remove_tier("S"));
    assert_eq!(store.pool(), ids(&["z", "x", "y"]).as_slice());
    assert!(store.tier("S").is_none());
    assert!(!store.has_container(&tier("S")));
}

#[test]
fn remove_missing_tier_is_rejected() {
    let mut store = store_abc_with_s();
    assert!(!store.remove_tier("nope"));
    assert_eq!(store.tiers().len(), 1);
}

#[test]
fn update_tier_changes_metadata_only() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    assert!(store.update_tier("S", "Super", "#00FF00"));
    let meta = store.tier("S").cloned();
    assert_eq!(meta, Some(TierMeta::new("S", "Super", "#00ff00")));
    assert_eq!(store.items(&tier("S")), Some(ids(&["a"]).as_slice()));
}

#[test]
fn update_tier_keeps_previous_values_for_blank_input() {
    let mut store = store_abc_with_s();
    assert!(store.update_tier("S", "   ", "garbage"));
    let meta = store.tier("S").cloned();
    assert_eq!(meta, Some(TierMeta::new("S", "S", "#ffffff")));
    assert!(!store.update_tier("missing", "X", "#000"));
}

#[test]
fn reorder_tiers_preserves_membership() {
    let mut store = AssignmentStore::with_characters(&ids(&["a"]), tiers(&["S", "A", "B"]));
    assert!(store.move_item("a", &ContainerId::Pool, &tier("S"), None));
    assert!(store.reorder_tiers(0, 2));
    let order: Vec<&str> = store.tiers().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, ["A", "B", "S"]);
    assert_eq!(store.items(&tier("S")), Some(ids(&["a"]).as_slice()));
    assert!(!store.reorder_tiers(1, 1));
    assert!(!store.reorder_tiers(0, 3));
}

// =============================================================
// Queries
// =============================================================

#[test]
fn container_ids_follow_screen_order() {
    let store = AssignmentStore::with_characters(&[], tiers(&["S", "A"]));
    assert_eq!(store.container_ids(), vec![tier("S"), tier("A"), ContainerId::Pool, ContainerId::Unknown]);
}

#[test]
fn position_reports_container_and_index() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("b", &ContainerId::Pool, &tier("S"), None));
    assert_eq!(store.position("b"), Some((tier("S"), 0)));
    assert_eq!(store.position("c"), Some((ContainerId::Pool, 1)));
    assert_eq!(store.position("zzz"), None);
}

#[test]
fn partition_holds_across_a_mixed_sequence() {
    let all = ids(&["a", "b", "c", "d", "e"]);
    let mut store = AssignmentStore::with_characters(&all, tiers(&["S", "A"]));
    store.move_item("a", &ContainerId::Pool, &tier("S"), None);
    store.move_item("b", &ContainerId::Pool, &tier("A"), Some(0));
    store.move_item("a", &tier("S"), &tier("A"), Some(0));
    store.reorder_within_container(&ContainerId::Pool, 0, 2);
    store.add_tier(None, None);
    store.move_item("c", &ContainerId::Pool, &tier("Tier 3"), None);
    store.reorder_tiers(0, 2);
    store.remove_tier("A");
    store.move_item("zzz", &ContainerId::Pool, &tier("S"), None);
    assert!(store.is_partition_of(&all));
    assert_eq!(store.len(), all.len());
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_lists_every_container() {
    let mut store = store_abc_with_s();
    assert!(store.move_item("c", &ContainerId::Pool, &tier("S"), None));
    let snap = store.snapshot();
    assert_eq!(snap.tiers, store.tiers());
    assert_eq!(snap.character_map.get("S"), Some(&ids(&["c"])));
    assert_eq!(snap.character_map.get("pool"), Some(&ids(&["a", "b"])));
    assert_eq!(snap.character_map.get("unknown"), Some(&Vec::new()));
}

#[test]
fn snapshot_reseeds_to_equal_store() {
    let mut store = AssignmentStore::with_characters(&ids(&["a", "b", "c", "d"]), tiers(&["S", "A"]));
    store.move_item("d", &ContainerId::Pool, &tier("A"), None);
    store.move_item("b", &ContainerId::Pool, &tier("S"), None);
    store.move_item("c", &ContainerId::Pool, &ContainerId::Unknown, None);
    let snap = store.snapshot();

    let mut restored = AssignmentStore::new();
    restored.initialize_seeded(&ids(&["a", "b", "c", "d"]), snap.tiers.clone(), &snap.character_map);
    assert_eq!(restored, store);
    assert_eq!(restored.snapshot(), snap);
}

#[test]
fn snapshot_serializes_character_map_key() {
    let store = store_abc_with_s();
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert!(json.get("characterMap").is_some());
    assert!(json.get("tiers").is_some());
    assert_eq!(json["characterMap"]["pool"], serde_json::json!(["a", "b", "c"]));
}
