//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::query::{
    PokemonDetail, PokemonDimension, PokemonSource, PokemonSummary, QueryError,
};

/// An in-memory source for tests that don't need real API calls.
#[derive(Default)]
pub struct StubSource {
    pub pokemons: Vec<PokemonSummary>,
    pub details: Vec<PokemonDetail>,
    /// When set, every call fails with this error.
    pub failure: Option<QueryError>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl StubSource {
    pub fn with_details(details: Vec<PokemonDetail>) -> Self {
        Self {
            pokemons: details.iter().map(PokemonDetail::summary).collect(),
            details,
            ..Default::default()
        }
    }

    pub fn failing(error: QueryError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_pokemons(&self) -> Result<Vec<PokemonSummary>, QueryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.pokemons.clone()),
        }
    }

    async fn get_pokemon(&self, name: &str) -> Result<Option<PokemonDetail>, QueryError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.details.iter().find(|d| d.name == name).cloned()),
        }
    }
}

pub fn summary(number: &str, name: &str, types: &[&str]) -> PokemonSummary {
    PokemonSummary {
        id: format!("id-{number}"),
        number: number.to_string(),
        name: name.to_string(),
        image: format!("https://img.example/{}.jpg", name.to_lowercase()),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn detail(number: &str, name: &str) -> PokemonDetail {
    PokemonDetail {
        id: format!("id-{number}"),
        number: number.to_string(),
        name: name.to_string(),
        image: format!("https://img.example/{}.jpg", name.to_lowercase()),
        types: vec!["Normal".to_string()],
        classification: format!("{name} Pokémon"),
        height: PokemonDimension {
            minimum: "0.35m".to_string(),
            maximum: "0.45m".to_string(),
        },
        weight: PokemonDimension {
            minimum: "5.25kg".to_string(),
            maximum: "6.75kg".to_string(),
        },
        max_cp: 938,
        max_hp: 1002,
        flee_rate: 0.1,
        weaknesses: vec!["Fighting".to_string()],
        resistant: vec!["Ghost".to_string()],
    }
}

/// Creates a test App backed by an empty StubSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubSource::default()))
}
