//! # Query State
//!
//! The list and detail providers. Each holds the latest result of one
//! query plus the id of the newest request it issued. Fetching itself
//! happens elsewhere (a spawned task); results come back through
//! `resolve`, which drops anything that isn't the newest request.
//!
//! ```text
//! set_name("Pikachu")   → ticket #1   (loading)
//! set_name("Bulbasaur") → ticket #2   (loading, #1 is now stale)
//! resolve(#2, Bulbasaur)              → applied
//! resolve(#1, Pikachu)                → ignored
//! ```

use crate::query::{PokemonDetail, PokemonSummary, QueryError};

pub type RequestId = u64;

/// A detail fetch the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub request_id: RequestId,
    pub name: String,
}

// ============================================================================
// List Provider
// ============================================================================

/// Snapshot handed to the list view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListResult<'a> {
    pub pokemons: &'a [PokemonSummary],
    pub loading: bool,
    pub error: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct ListQuery {
    latest: RequestId,
    pokemons: Vec<PokemonSummary>,
    loading: bool,
    error: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a fetch of the full collection and returns its request id.
    pub fn start(&mut self) -> RequestId {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.latest
    }

    /// Applies a fetch result. Returns false if the result was stale.
    pub fn resolve(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<PokemonSummary>, QueryError>,
    ) -> bool {
        if request_id != self.latest || !self.loading {
            return false;
        }
        self.loading = false;
        match result {
            Ok(pokemons) => {
                self.pokemons = pokemons;
                self.error = None;
            }
            Err(e) => {
                self.pokemons.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn result(&self) -> ListResult<'_> {
        ListResult {
            pokemons: &self.pokemons,
            loading: self.loading,
            error: self.error.as_deref(),
        }
    }
}

// ============================================================================
// Detail Provider
// ============================================================================

/// Snapshot handed to the detail view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailResult<'a> {
    pub pokemon: Option<&'a PokemonDetail>,
    pub loading: bool,
    pub error: bool,
}

/// What the detail dialog should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    /// No name requested: the dialog is closed.
    Hidden,
    Loading,
    Error(&'a str),
    NotFound,
    Loaded(&'a PokemonDetail),
}

#[derive(Debug, Default)]
pub struct DetailQuery {
    latest: RequestId,
    name: Option<String>,
    pokemon: Option<PokemonDetail>,
    loading: bool,
    error: Option<String>,
}

impl DetailQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the provider at a Pokémon (or at nothing).
    ///
    /// Returns a ticket when a fetch must be issued. `None` or an empty
    /// name skips the fetch and resets the result; the same name as the
    /// current one changes nothing.
    pub fn set_name(&mut self, name: Option<&str>) -> Option<FetchTicket> {
        match name.filter(|n| !n.is_empty()) {
            None => {
                // Invalidate whatever is in flight
                self.latest += 1;
                self.name = None;
                self.pokemon = None;
                self.loading = false;
                self.error = None;
                None
            }
            Some(n) if self.name.as_deref() == Some(n) => None,
            Some(n) => {
                self.name = Some(n.to_string());
                Some(self.issue(n.to_string()))
            }
        }
    }

    /// Re-issues the fetch for the current name, if there is one.
    pub fn refetch(&mut self) -> Option<FetchTicket> {
        let name = self.name.clone()?;
        Some(self.issue(name))
    }

    fn issue(&mut self, name: String) -> FetchTicket {
        self.latest += 1;
        self.pokemon = None;
        self.loading = true;
        self.error = None;
        FetchTicket {
            request_id: self.latest,
            name,
        }
    }

    /// Applies a fetch result. Returns false if the result was stale.
    pub fn resolve(
        &mut self,
        request_id: RequestId,
        result: Result<Option<PokemonDetail>, QueryError>,
    ) -> bool {
        if request_id != self.latest || !self.loading {
            return false;
        }
        self.loading = false;
        match result {
            Ok(pokemon) => self.pokemon = pokemon,
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn result(&self) -> DetailResult<'_> {
        DetailResult {
            pokemon: self.pokemon.as_ref(),
            loading: self.loading,
            error: self.error.is_some(),
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        if self.name.is_none() {
            return DetailView::Hidden;
        }
        if self.loading {
            return DetailView::Loading;
        }
        if let Some(msg) = &self.error {
            return DetailView::Error(msg);
        }
        match &self.pokemon {
            Some(p) => DetailView::Loaded(p),
            None => DetailView::NotFound,
        }
    }
}
