use super::*;

// =============================================================
// Lookup
// =============================================================

#[test]
fn ids_round_trip_through_from_id() {
    for universe in Universe::ALL {
        assert_eq!(Universe::from_id(universe.id()), Some(universe));
    }
    assert_eq!(Universe::from_id("dragon-ball"), None);
}

#[test]
fn serde_uses_route_ids() {
    assert_eq!(serde_json::to_string(&Universe::DemonSlayer).unwrap(), "\"demon-slayer\"");
    assert_eq!(serde_json::to_string(&Universe::OnePiece).unwrap(), "\"onepiece\"");
    let back: Universe = serde_json::from_str("\"league-of-legends\"").unwrap();
    assert_eq!(back, Universe::LeagueOfLegends);
}

#[test]
fn filter_schemas_have_expected_sizes() {
    assert_eq!(Universe::Pokemon.filter_options().len(), 9);
    assert_eq!(Universe::Naruto.filter_options().len(), 3);
    assert_eq!(Universe::DemonSlayer.filter_options().len(), 4);
    assert_eq!(Universe::LeagueOfLegends.filter_options().len(), 6);
    assert!(Universe::OnePiece.filter_options().is_empty());
    assert_eq!(Universe::Temtem.filter_options().len(), 12);
    assert_eq!(Universe::Naruto.all_filter_ids(), vec!["original", "shippuden", "boruto"]);
}

#[test]
fn only_temtem_has_variants() {
    let with: Vec<Universe> = Universe::ALL.into_iter().filter(|u| u.has_variants()).collect();
    assert_eq!(with, vec![Universe::Temtem]);
}

#[test]
fn palettes_are_parseable_colours() {
    for universe in Universe::ALL {
        let p = universe.palette();
        for c in [p.primary, p.secondary, p.accent, p.background, p.text] {
            assert!(crate::tier::parse_hex_rgb(c).is_some(), "{universe:?} {c}");
        }
    }
}

// =============================================================
// Labels and names
// =============================================================

#[test]
fn pokemon_filter_labels_read_gen_n() {
    assert_eq!(Universe::Pokemon.filter_label("gen3"), "gen 3");
    assert_eq!(Universe::DemonSlayer.filter_label("season2"), "Season 2 (Entertainment District Arc)");
    assert_eq!(Universe::Naruto.filter_label("mystery"), "mystery");
}

#[test]
fn pokemon_names_are_title_cased() {
    assert_eq!(Universe::Pokemon.format_name("mr-mime"), "Mr Mime");
    assert_eq!(Universe::Pokemon.format_name("pikachu"), "Pikachu");
    assert_eq!(Universe::Pokemon.format_name("ho--oh"), "Ho Oh");
    assert_eq!(Universe::Naruto.format_name(" Gaara "), "Gaara");
}

// =============================================================
// Fallback data
// =============================================================

#[test]
fn fallback_ids_are_stable_and_prefixed() {
    for universe in Universe::ALL {
        let first = universe.fallback_characters(&[]);
        let second = universe.fallback_characters(&["anything".into()]);
        assert!(!first.is_empty());
        assert_eq!(first, second);
        let prefix = format!("{}-", universe.id());
        assert!(first.iter().all(|c| c.id.starts_with(&prefix) && c.universe == universe.id()));
    }
}

#[test]
fn fallback_ids_are_unique() {
    let chars = Universe::Naruto.fallback_characters(&[]);
    let mut ids: Vec<&str> = chars.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), chars.len());
    assert_eq!(chars[0].id, "naruto-1");
    assert_eq!(chars[0].name, "Naruto Uzumaki");
}

// =============================================================
// Pokémon helpers
// =============================================================

#[test]
fn generation_parsing() {
    assert_eq!(pokemon_generation("gen1"), Some(1));
    assert_eq!(pokemon_generation("gen9"), Some(9));
    assert_eq!(pokemon_generation("gen10"), None);
    assert_eq!(pokemon_generation("gen"), None);
    assert_eq!(pokemon_generation("season1"), None);
}

#[test]
fn dex_number_from_species_url() {
    assert_eq!(species_dex_number("https://pokeapi.co/api/v2/pokemon-species/25/"), Some(25));
    assert_eq!(species_dex_number("https://pokeapi.co/api/v2/pokemon-species/151"), Some(151));
    assert_eq!(species_dex_number("https://pokeapi.co/api/v2/pokemon-species/"), None);
}

#[test]
fn pokemon_character_uses_artwork_url() {
    let c = pokemon_character(6, "charizard");
    assert_eq!(c.id, "pokemon-6");
    assert_eq!(c.name, "Charizard");
    assert!(c.image.ends_with("/official-artwork/6.png"));
    assert_eq!(id_number(&c.id), Some(6));
}
