use super::*;
use crate::container::ContainerId;
use crate::store::AssignmentStore;

fn sample_store() -> AssignmentStore {
    let ids: Vec<String> = vec!["p-1".into(), "p-2".into(), "p-3".into()];
    let mut store = AssignmentStore::with_characters(&ids, crate::tier::default_tiers());
    store.move_item("p-2", &ContainerId::Pool, &ContainerId::tier("S"), None);
    store
}

fn sample_layout() -> SharedLayout {
    let context = LayoutContext {
        universe: "pokemon".into(),
        filters: vec!["gen1".into()],
        language: "fr".into(),
        variant: "normal".into(),
    };
    let characters = vec![Character::new("p-1", "Bulbasaur", "https://img/1.png", "pokemon")];
    SharedLayout::capture(&context, &characters, sample_store().snapshot())
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn capture_copies_context_and_snapshot() {
    let layout = sample_layout();
    assert_eq!(layout.universe, "pokemon");
    assert_eq!(layout.language, "fr");
    assert_eq!(layout.tiers.as_ref().map(Vec::len), Some(6));
    let map = layout.character_map.unwrap();
    assert_eq!(map.get("S"), Some(&vec!["p-2".to_owned()]));
}

#[test]
fn json_uses_camel_case_character_map() {
    let json = sample_layout().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["characterMap"]["pool"], serde_json::json!(["p-1", "p-3"]));
    assert_eq!(value["filters"], serde_json::json!(["gen1"]));
    assert!(value["characters"][0].get("thumbnail").is_none());
}

#[test]
fn missing_fields_take_defaults() {
    let layout: SharedLayout = serde_json::from_str(r#"{"universe":"naruto"}"#).unwrap();
    assert_eq!(layout.language, "en");
    assert_eq!(layout.variant, "normal");
    assert!(layout.filters.is_empty());
    assert!(layout.tiers.is_none());
    assert!(layout.character_map.is_none());
}

#[test]
fn assignment_map_alias_is_accepted() {
    let raw = r##"{"tiers":[{"id":"S","label":"S","color":"#fff"}],"assignmentMap":{"S":["x"]}}"##;
    let layout: SharedLayout = serde_json::from_str(raw).unwrap();
    let seed = layout.seed().unwrap();
    assert_eq!(seed.character_map.get("S"), Some(&vec!["x".to_owned()]));
}

// =============================================================
// Share links
// =============================================================

#[test]
fn share_url_percent_encodes_layout() {
    let url = sample_layout().share_url("https://example.test/tier-list/pokemon").unwrap();
    assert!(url.starts_with("https://example.test/tier-list/pokemon?data=%7B"));
    assert!(!url.contains('{'));
    assert!(!url.contains('"'));
}

#[test]
fn share_url_appends_to_existing_query() {
    let url = sample_layout().share_url("https://example.test/x?lang=fr").unwrap();
    assert!(url.starts_with("https://example.test/x?lang=fr&data="));
}

#[test]
fn share_param_parses_encoded_and_decoded_forms() {
    let layout = sample_layout();
    let url = layout.share_url("https://example.test/").unwrap();
    let encoded = url.split("data=").nth(1).unwrap();
    assert_eq!(SharedLayout::parse_share_param(encoded).unwrap(), layout);

    let decoded = serde_json::to_string(&layout).unwrap();
    assert_eq!(SharedLayout::parse_share_param(&decoded).unwrap(), layout);
}

#[test]
fn share_param_rejects_garbage() {
    assert!(matches!(SharedLayout::parse_share_param("not json"), Err(LayoutError::Parse(_))));
    assert!(matches!(SharedLayout::parse_share_param("%FF%FE"), Err(LayoutError::Decode(_))));
}

#[test]
fn seed_requires_both_tiers_and_map() {
    let mut layout = sample_layout();
    layout.character_map = None;
    assert!(matches!(layout.seed(), Err(LayoutError::MissingLayout)));
}

#[test]
fn seed_reproduces_store() {
    let store = sample_store();
    let layout = sample_layout();
    let seed = seed_from_query(Some(&layout.share_url("/").unwrap()["/?data=".len()..])).unwrap();
    let mut restored = AssignmentStore::new();
    let ids: Vec<String> = vec!["p-1".into(), "p-2".into(), "p-3".into()];
    restored.initialize_seeded(&ids, seed.tiers, &seed.character_map);
    assert_eq!(restored, store);
}

#[test]
fn seed_from_query_tolerates_absent_or_bad_input() {
    assert!(seed_from_query(None).is_none());
    assert!(seed_from_query(Some("   ")).is_none());
    assert!(seed_from_query(Some("{broken")).is_none());
    assert!(seed_from_query(Some(r#"{"universe":"naruto"}"#)).is_none());
}

// =============================================================
// Page parameters
// =============================================================

#[test]
fn filter_list_drops_blanks() {
    assert_eq!(parse_filter_list(" gen1, ,gen3,,"), vec!["gen1".to_owned(), "gen3".to_owned()]);
    assert!(parse_filter_list("").is_empty());
}

#[test]
fn page_params_default_without_query() {
    let params = PageParams::resolve("naruto", None, None, None, None);
    assert_eq!(params.context.universe, "naruto");
    assert!(params.context.filters.is_empty());
    assert_eq!(params.context.language, "en");
    assert_eq!(params.context.variant, "normal");
    assert!(params.seed.is_none());
}

#[test]
fn page_params_fill_gaps_from_shared_layout() {
    let json = serde_json::to_string(&sample_layout()).unwrap();
    let params = PageParams::resolve("pokemon", None, None, Some("luma"), Some(&json));
    assert_eq!(params.context.filters, vec!["gen1".to_owned()]);
    assert_eq!(params.context.language, "fr");
    assert_eq!(params.context.variant, "luma");
    assert!(params.seed.is_some());
}

#[test]
fn explicit_filters_override_shared_layout() {
    let json = serde_json::to_string(&sample_layout()).unwrap();
    let params = PageParams::resolve("pokemon", Some("gen2,gen3"), Some("es"), None, Some(&json));
    assert_eq!(params.context.filters, vec!["gen2".to_owned(), "gen3".to_owned()]);
    assert_eq!(params.context.language, "es");
}
