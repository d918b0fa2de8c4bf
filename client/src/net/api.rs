//! Character source: PokeAPI for Pokémon, offline datasets for the rest.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, one request per
//! selected generation, issued concurrently.
//! Native builds: no network, so every fetch reports failure and callers
//! take the fallback path.
//!
//! ERROR HANDLING
//! ==============
//! A failed or empty fetch never reaches the page as an error. It is logged
//! and the universe's fallback dataset is returned instead, flagged so the
//! page can say so.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use grid::catalog::Universe;
use grid::character::Character;
#[cfg(any(test, feature = "csr"))]
use grid::catalog::{POKEAPI_GENERATION_URL, id_number, pokemon_character, pokemon_generation, species_dex_number};
#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

/// Characters for one page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterBatch {
    pub characters: Vec<Character>,
    /// `true` when the live source failed and the offline dataset was used.
    pub fallback: bool,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    pokemon_species: Vec<NamedResource>,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[cfg(any(test, feature = "csr"))]
fn generation_endpoint(generation: u32) -> String {
    format!("{POKEAPI_GENERATION_URL}/{generation}")
}

#[cfg(any(test, feature = "csr"))]
fn generation_failed_message(generation: u32, status: u16) -> String {
    format!("generation {generation} request failed: {status}")
}

/// Generation numbers named by `filters`, ascending and without repeats.
#[cfg(any(test, feature = "csr"))]
fn requested_generations(filters: &[String]) -> Vec<u32> {
    let mut generations: Vec<u32> = filters.iter().filter_map(|f| pokemon_generation(f)).collect();
    generations.sort_unstable();
    generations.dedup();
    generations
}

/// Characters listed in a generation response body. Species whose URL has
/// no dex number are skipped.
#[cfg(any(test, feature = "csr"))]
fn parse_generation(body: &str) -> Result<Vec<Character>, String> {
    let response: GenerationResponse = serde_json::from_str(body).map_err(|e| format!("bad generation body: {e}"))?;
    Ok(response
        .pokemon_species
        .iter()
        .filter_map(|species| Some(pokemon_character(species_dex_number(&species.url)?, &species.name)))
        .collect())
}

/// Concatenate per-generation results, ordered by dex number, first
/// occurrence wins.
#[cfg(any(test, feature = "csr"))]
fn merge_by_dex(batches: Vec<Vec<Character>>) -> Vec<Character> {
    let mut merged: Vec<Character> = batches.into_iter().flatten().collect();
    merged.sort_by_key(|c| id_number(&c.id).unwrap_or(u32::MAX));
    let mut seen = std::collections::HashSet::new();
    merged.retain(|c| seen.insert(c.id.clone()));
    merged
}

/// Fetch every selected generation from PokeAPI.
async fn fetch_pokemon(filters: &[String]) -> Result<Vec<Character>, String> {
    #[cfg(feature = "csr")]
    {
        let generations = requested_generations(filters);
        if generations.is_empty() {
            return Err("no generation selected".to_owned());
        }
        let requests = generations.iter().map(|&generation| async move {
            let resp = gloo_net::http::Request::get(&generation_endpoint(generation))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(generation_failed_message(generation, resp.status()));
            }
            let body = resp.text().await.map_err(|e| e.to_string())?;
            parse_generation(&body)
        });
        let batches = futures::future::join_all(requests)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, String>>()?;
        Ok(merge_by_dex(batches))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filters;
        Err("network unavailable".to_owned())
    }
}

/// Characters for `universe` under `filters`. Never fails: any problem with
/// the live source yields the fallback dataset.
pub async fn fetch_characters(universe: Universe, filters: &[String]) -> CharacterBatch {
    if universe != Universe::Pokemon {
        return CharacterBatch { characters: universe.fallback_characters(filters), fallback: false };
    }
    match fetch_pokemon(filters).await {
        Ok(characters) if !characters.is_empty() => CharacterBatch { characters, fallback: false },
        Ok(_) => {
            log::warn!("api: {} returned no characters, using fallback", universe.id());
            fallback(universe, filters)
        }
        Err(e) => {
            log::warn!("api: {} fetch failed ({e}), using fallback", universe.id());
            fallback(universe, filters)
        }
    }
}

fn fallback(universe: Universe, filters: &[String]) -> CharacterBatch {
    CharacterBatch { characters: universe.fallback_characters(filters), fallback: true }
}
