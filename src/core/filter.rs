//! # Search Filter
//!
//! Narrows the list grid down to what the search box asks for. A Pokémon
//! matches when its name contains the term (ignoring case) or its number
//! contains the term literally, so "char" finds Charmander and "00"
//! finds #001 through #009.

use crate::query::PokemonSummary;

/// Returns the Pokémon matching `term`, in their original order.
///
/// Only the empty term matches everything. Whitespace is matched literally.
pub fn filter_pokemons<'a>(pokemons: &'a [PokemonSummary], term: &str) -> Vec<&'a PokemonSummary> {
    if term.is_empty() {
        return pokemons.iter().collect();
    }
    let needle = term.to_lowercase();
    pokemons
        .iter()
        .filter(|p| matches(p, term, &needle))
        .collect()
}

fn matches(pokemon: &PokemonSummary, term: &str, lowered: &str) -> bool {
    pokemon.name.to_lowercase().contains(lowered) || pokemon.number.contains(term)
}
