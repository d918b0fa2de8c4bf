//! Universe table: filter schemas, palettes, name formatting, fallback data.
//!
//! Every per-universe difference is a `match` on [`Universe`]; adding a
//! universe means adding a variant and filling in each arm.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// A content domain characters are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Universe {
    #[serde(rename = "pokemon")]
    Pokemon,
    #[serde(rename = "naruto")]
    Naruto,
    #[serde(rename = "demon-slayer")]
    DemonSlayer,
    #[serde(rename = "league-of-legends")]
    LeagueOfLegends,
    #[serde(rename = "onepiece")]
    OnePiece,
    #[serde(rename = "temtem")]
    Temtem,
}

/// One selectable filter (generation, arc, class, type...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub name: &'static str,
}

const fn opt(id: &'static str, name: &'static str) -> FilterOption {
    FilterOption { id, name }
}

/// Theme colours for a universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

const POKEMON_FILTERS: [FilterOption; 9] = [
    opt("gen1", "Generation 1"),
    opt("gen2", "Generation 2"),
    opt("gen3", "Generation 3"),
    opt("gen4", "Generation 4"),
    opt("gen5", "Generation 5"),
    opt("gen6", "Generation 6"),
    opt("gen7", "Generation 7"),
    opt("gen8", "Generation 8"),
    opt("gen9", "Generation 9"),
];

const NARUTO_FILTERS: [FilterOption; 3] =
    [opt("original", "Naruto"), opt("shippuden", "Shippuden"), opt("boruto", "Boruto")];

const DEMON_SLAYER_FILTERS: [FilterOption; 4] = [
    opt("season1", "Season 1"),
    opt("season2", "Season 2 (Entertainment District Arc)"),
    opt("season3", "Season 3 (Swordsmith Village Arc)"),
    opt("season4", "Season 4 (Hashira Training Arc)"),
];

const LEAGUE_FILTERS: [FilterOption; 6] = [
    opt("Assassin", "Assassin"),
    opt("Fighter", "Fighter"),
    opt("Mage", "Mage"),
    opt("Marksman", "Marksman"),
    opt("Support", "Support"),
    opt("Tank", "Tank"),
];

const TEMTEM_FILTERS: [FilterOption; 12] = [
    opt("Neutral", "Neutral"),
    opt("Wind", "Wind"),
    opt("Earth", "Earth"),
    opt("Water", "Water"),
    opt("Fire", "Fire"),
    opt("Nature", "Nature"),
    opt("Electric", "Electric"),
    opt("Digital", "Digital"),
    opt("Mental", "Mental"),
    opt("Melee", "Melee"),
    opt("Crystal", "Crystal"),
    opt("Toxic", "Toxic"),
];

const POKEMON_FALLBACK: [&str; 9] =
    ["Bulbasaur", "Ivysaur", "Venusaur", "Charmander", "Charmeleon", "Charizard", "Squirtle", "Wartortle", "Blastoise"];

const NARUTO_FALLBACK: [&str; 10] = [
    "Naruto Uzumaki",
    "Sasuke Uchiha",
    "Sakura Haruno",
    "Kakashi Hatake",
    "Itachi Uchiha",
    "Jiraiya",
    "Tsunade",
    "Orochimaru",
    "Rock Lee",
    "Gaara",
];

const DEMON_SLAYER_FALLBACK: [&str; 10] = [
    "Tanjiro Kamado",
    "Nezuko Kamado",
    "Zenitsu Agatsuma",
    "Inosuke Hashibira",
    "Giyu Tomioka",
    "Shinobu Kocho",
    "Kyojuro Rengoku",
    "Tengen Uzui",
    "Muzan Kibutsuji",
    "Akaza",
];

const LEAGUE_FALLBACK: [&str; 8] = ["Ahri", "Garen", "Jinx", "Lux", "Thresh", "Yasuo", "Zed", "Malphite"];

const ONE_PIECE_FALLBACK: [&str; 10] = [
    "Monkey D. Luffy",
    "Roronoa Zoro",
    "Nami",
    "Usopp",
    "Sanji",
    "Tony Tony Chopper",
    "Nico Robin",
    "Franky",
    "Brook",
    "Jinbe",
];

const TEMTEM_FALLBACK: [&str; 8] =
    ["Crystle", "Smazee", "Ganki", "Mimit", "Tateru", "Platypet", "Houchic", "Saipat"];

const POKEMON_ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Base URL of the PokeAPI generation endpoint.
pub const POKEAPI_GENERATION_URL: &str = "https://pokeapi.co/api/v2/generation";

impl Universe {
    /// Every universe, in home-page order.
    pub const ALL: [Self; 6] =
        [Self::Pokemon, Self::Naruto, Self::DemonSlayer, Self::LeagueOfLegends, Self::OnePiece, Self::Temtem];

    /// Route/serialization id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Naruto => "naruto",
            Self::DemonSlayer => "demon-slayer",
            Self::LeagueOfLegends => "league-of-legends",
            Self::OnePiece => "onepiece",
            Self::Temtem => "temtem",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.id() == id)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pokemon => "Pokémon",
            Self::Naruto => "Naruto",
            Self::DemonSlayer => "Demon Slayer",
            Self::LeagueOfLegends => "League of Legends",
            Self::OnePiece => "One Piece",
            Self::Temtem => "Temtem",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Pokemon => "Create tier lists of your favorite Pokémon by generation",
            Self::Naruto => "Rank ninjas from the Naruto universe by arc or series",
            Self::DemonSlayer => "Create tier lists of characters from each season of Demon Slayer",
            Self::LeagueOfLegends => "Rank your favorite champions by class",
            Self::OnePiece => "Create tier lists of characters from One Piece",
            Self::Temtem => "Rank Temtem creatures by type or check their Luma form",
        }
    }

    #[must_use]
    pub fn filter_options(self) -> &'static [FilterOption] {
        match self {
            Self::Pokemon => &POKEMON_FILTERS,
            Self::Naruto => &NARUTO_FILTERS,
            Self::DemonSlayer => &DEMON_SLAYER_FILTERS,
            Self::LeagueOfLegends => &LEAGUE_FILTERS,
            Self::OnePiece => &[],
            Self::Temtem => &TEMTEM_FILTERS,
        }
    }

    /// Every filter id, used when linking from the home page.
    #[must_use]
    pub fn all_filter_ids(self) -> Vec<String> {
        self.filter_options().iter().map(|f| f.id.to_owned()).collect()
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Pokemon => Palette {
                primary: "#3B4CCA",
                secondary: "#FFDE00",
                accent: "#FF0000",
                background: "#F5F5F5",
                text: "#1F2937",
            },
            Self::Naruto => Palette {
                primary: "#FF7800",
                secondary: "#00458B",
                accent: "#D0312D",
                background: "#F8F8F8",
                text: "#2B2B2B",
            },
            Self::DemonSlayer => Palette {
                primary: "#28593C",
                secondary: "#FFC4C0",
                accent: "#891731",
                background: "#F8F8F8",
                text: "#2B2B2B",
            },
            Self::LeagueOfLegends => Palette {
                primary: "#5383E8",
                secondary: "#F0E6D2",
                accent: "#C89B3C",
                background: "#000000",
                text: "#1F2937",
            },
            Self::OnePiece => Palette {
                primary: "#2E51A2",
                secondary: "#FFD700",
                accent: "#EB2727",
                background: "#F0F8FF",
                text: "#1F2937",
            },
            Self::Temtem => Palette {
                primary: "#ff6d00",
                secondary: "#ffd180",
                accent: "#00bfa5",
                background: "#fff3e0",
                text: "#1F2937",
            },
        }
    }

    /// Whether the universe offers a `luma` variant.
    #[must_use]
    pub fn has_variants(self) -> bool {
        matches!(self, Self::Temtem)
    }

    /// Display label for an active filter id. Pokémon generations read
    /// `gen N`; unknown ids are shown as-is.
    #[must_use]
    pub fn filter_label(self, filter: &str) -> String {
        let Some(option) = self.filter_options().iter().find(|o| o.id == filter) else {
            return filter.to_owned();
        };
        if self == Self::Pokemon
            && let Some(n) = pokemon_generation(option.id)
        {
            return format!("gen {n}");
        }
        option.name.to_owned()
    }

    /// Turn a source slug into a display name. Pokémon slugs are
    /// hyphen-separated lowercase words; other sources are already formatted.
    #[must_use]
    pub fn format_name(self, raw: &str) -> String {
        match self {
            Self::Pokemon => raw.split('-').filter(|p| !p.is_empty()).map(capitalize).collect::<Vec<_>>().join(" "),
            Self::Naruto | Self::DemonSlayer | Self::LeagueOfLegends | Self::OnePiece | Self::Temtem => {
                raw.trim().to_owned()
            }
        }
    }

    /// Offline dataset used when no remote source exists or the fetch fails.
    ///
    /// Ids are `<universe>-<n>` and never change, so reloading never looks
    /// like a new character to the store. Filters do not narrow the list.
    #[must_use]
    pub fn fallback_characters(self, _filters: &[String]) -> Vec<Character> {
        let names: &[&str] = match self {
            Self::Pokemon => &POKEMON_FALLBACK,
            Self::Naruto => &NARUTO_FALLBACK,
            Self::DemonSlayer => &DEMON_SLAYER_FALLBACK,
            Self::LeagueOfLegends => &LEAGUE_FALLBACK,
            Self::OnePiece => &ONE_PIECE_FALLBACK,
            Self::Temtem => &TEMTEM_FALLBACK,
        };
        names
            .iter()
            .zip(1u32..)
            .map(|(name, n)| match self {
                Self::Pokemon => pokemon_character(n, name),
                _ => Character::new(format!("{}-{n}", self.id()), *name, self.placeholder_image(), self.id()),
            })
            .collect()
    }

    fn placeholder_image(self) -> &'static str {
        match self {
            Self::Naruto => "https://images.pexels.com/photos/1310847/pexels-photo-1310847.jpeg?auto=compress&cs=tinysrgb&w=150",
            Self::DemonSlayer => "https://images.pexels.com/photos/6538889/pexels-photo-6538889.jpeg?auto=compress&cs=tinysrgb&w=150",
            Self::OnePiece => "https://images.pexels.com/photos/1998439/pexels-photo-1998439.jpeg?auto=compress&cs=tinysrgb&w=150",
            Self::Pokemon | Self::LeagueOfLegends | Self::Temtem => {
                "https://images.pexels.com/photos/1341279/pexels-photo-1341279.jpeg?auto=compress&cs=tinysrgb&w=150"
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generation number for a Pokémon filter id (`gen1` → 1).
#[must_use]
pub fn pokemon_generation(filter: &str) -> Option<u32> {
    let n = parse_number(filter.strip_prefix("gen")?)?;
    (1..=9).contains(&n).then_some(n)
}

/// National dex number from a PokeAPI species URL (`.../pokemon-species/25/`).
#[must_use]
pub fn species_dex_number(url: &str) -> Option<u32> {
    parse_number(url.split('/').rfind(|s| !s.is_empty())?)
}

/// Character record for a Pokémon by dex number and API slug.
#[must_use]
pub fn pokemon_character(dex: u32, slug: &str) -> Character {
    Character::new(
        format!("pokemon-{dex}"),
        Universe::Pokemon.format_name(slug),
        format!("{POKEMON_ARTWORK_BASE}/{dex}.png"),
        Universe::Pokemon.id(),
    )
}

/// Numeric suffix of a `<universe>-<n>` id, for sorting merged API results.
#[must_use]
pub fn id_number(id: &str) -> Option<u32> {
    parse_number(id.rsplit('-').next()?)
}

fn parse_number(raw: &str) -> Option<u32> {
    let Ok(n) = raw.parse() else {
        return None;
    };
    Some(n)
}
