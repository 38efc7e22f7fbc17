//! # Application State
//!
//! Core business state for the Pokédex. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PokemonSource>  // backend the fetches go to
//! ├── route: Route                    // current path (/pokemon, /pokemon/<name>)
//! ├── list: ListQuery                 // full collection provider
//! ├── detail: DetailQuery             // single Pokémon provider
//! ├── search: String                  // search box contents
//! └── status_message: String          // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::filter::filter_pokemons;
use crate::core::query_state::{DetailQuery, ListQuery};
use crate::core::route::Route;
use crate::query::{PokemonSource, PokemonSummary};

pub struct App {
    pub source: Arc<dyn PokemonSource>,
    pub route: Route,
    pub list: ListQuery,
    pub detail: DetailQuery,
    pub search: String,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn PokemonSource>) -> Self {
        Self {
            source,
            route: Route::List,
            list: ListQuery::new(),
            detail: DetailQuery::new(),
            search: String::new(),
            status_message: String::from("Welcome to the Pokédex!"),
        }
    }

    /// The grid contents after applying the search box.
    pub fn visible_pokemons(&self) -> Vec<&PokemonSummary> {
        filter_pokemons(self.list.result().pokemons, &self.search)
    }

    pub fn detail_open(&self) -> bool {
        self.route.detail_name().is_some()
    }
}
