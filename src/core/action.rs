//! # Actions
//!
//! Everything that can happen in the Pokédex becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged(text)`.
//! Backend responds? That's `Action::DetailLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::query_state::{FetchTicket, RequestId};
use crate::core::route::Route;
use crate::core::state::App;
use crate::query::{PokemonDetail, PokemonSummary, QueryError};

#[derive(Debug)]
pub enum Action {
    /// The list view was mounted; fetch the collection.
    MountList,
    /// User asked for a fresh copy of the list.
    ReloadList,
    ListLoaded {
        request_id: RequestId,
        result: Result<Vec<PokemonSummary>, QueryError>,
    },
    SearchChanged(String),
    Navigate(Route),
    OpenDetail(String),
    CloseDetail,
    /// User asked to fetch the open Pokémon again (e.g. after an error).
    RefetchDetail,
    DetailLoaded {
        request_id: RequestId,
        result: Result<Option<PokemonDetail>, QueryError>,
    },
    Quit,
}

/// I/O the caller must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchList(RequestId),
    FetchDetail(FetchTicket),
    /// The detail view closed; any running detail fetch is moot.
    CancelDetail,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::MountList | Action::ReloadList => {
            let request_id = app.list.start();
            app.status_message = String::from("Loading Pokémon...");
            Effect::FetchList(request_id)
        }
        Action::ListLoaded { request_id, result } => {
            let failed = result.is_err();
            if !app.list.resolve(request_id, result) {
                debug!("Dropping stale list response #{}", request_id);
                return Effect::None;
            }
            app.status_message = if failed {
                String::from("Failed to load Pokémon (Ctrl+R to reload)")
            } else {
                format!("{} Pokémon", app.list.result().pokemons.len())
            };
            Effect::None
        }
        Action::SearchChanged(text) => {
            app.search = text;
            Effect::None
        }
        Action::Navigate(route) => navigate(app, route),
        Action::OpenDetail(name) => navigate(app, Route::Detail(name)),
        Action::CloseDetail => navigate(app, Route::List),
        Action::RefetchDetail => match app.detail.refetch() {
            Some(ticket) => Effect::FetchDetail(ticket),
            None => Effect::None,
        },
        Action::DetailLoaded { request_id, result } => {
            if !app.detail.resolve(request_id, result) {
                debug!("Dropping stale detail response #{}", request_id);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, route: Route) -> Effect {
    info!("Navigating to {}", route.to_path());
    let ticket = app.detail.set_name(route.detail_name());
    let closed = route.detail_name().is_none() && app.route.detail_name().is_some();
    app.route = route;
    match ticket {
        Some(ticket) => Effect::FetchDetail(ticket),
        None if closed => Effect::CancelDetail,
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query_state::DetailView;
    use crate::test_support::{detail, summary, test_app};

    #[test]
    fn test_mount_requests_list_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::MountList);
        assert_eq!(effect, Effect::FetchList(1));
        assert!(app.list.result().loading);
    }

    #[test]
    fn test_list_loaded_updates_status() {
        let mut app = test_app();
        update(&mut app, Action::MountList);
        update(
            &mut app,
            Action::ListLoaded {
                request_id: 1,
                result: Ok(vec![summary("001", "Bulbasaur", &["Grass"])]),
            },
        );
        assert_eq!(app.status_message, "1 Pokémon");
        assert_eq!(app.list.result().pokemons.len(), 1);
    }

    #[test]
    fn test_list_failure_is_reported() {
        let mut app = test_app();
        update(&mut app, Action::MountList);
        update(
            &mut app,
            Action::ListLoaded {
                request_id: 1,
                result: Err(QueryError::Network("timeout".to_string())),
            },
        );
        assert!(app.list.result().error.is_some());
        assert_eq!(app.status_message, "Failed to load Pokémon (Ctrl+R to reload)");
    }

    #[test]
    fn test_stale_list_response_leaves_status_alone() {
        let mut app = test_app();
        update(&mut app, Action::MountList);
        update(&mut app, Action::ReloadList);
        let effect = update(
            &mut app,
            Action::ListLoaded {
                request_id: 1,
                result: Ok(vec![]),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "Loading Pokémon...");
        assert!(app.list.result().loading);
    }

    #[test]
    fn test_open_detail_navigates_and_fetches() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenDetail("Pikachu".to_string()));
        match effect {
            Effect::FetchDetail(ticket) => assert_eq!(ticket.name, "Pikachu"),
            other => panic!("expected FetchDetail, got {other:?}"),
        }
        assert_eq!(app.route.to_path(), "/pokemon/Pikachu");
        assert!(app.detail_open());
    }

    #[test]
    fn test_close_detail_returns_to_list_path() {
        let mut app = test_app();
        update(&mut app, Action::OpenDetail("Pikachu".to_string()));
        let effect = update(&mut app, Action::CloseDetail);
        assert_eq!(effect, Effect::CancelDetail);
        assert_eq!(app.route, Route::List);
        assert_eq!(app.detail.view(), DetailView::Hidden);
    }

    #[test]
    fn test_navigate_to_list_when_already_there_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Navigate(Route::List)), Effect::None);
    }

    #[test]
    fn test_late_detail_after_switch_is_dropped() {
        let mut app = test_app();
        let Effect::FetchDetail(pikachu) =
            update(&mut app, Action::OpenDetail("Pikachu".to_string()))
        else {
            panic!("expected fetch");
        };
        let Effect::FetchDetail(bulbasaur) =
            update(&mut app, Action::OpenDetail("Bulbasaur".to_string()))
        else {
            panic!("expected fetch");
        };

        update(
            &mut app,
            Action::DetailLoaded {
                request_id: bulbasaur.request_id,
                result: Ok(Some(detail("001", "Bulbasaur"))),
            },
        );
        update(
            &mut app,
            Action::DetailLoaded {
                request_id: pikachu.request_id,
                result: Ok(Some(detail("025", "Pikachu"))),
            },
        );

        assert!(matches!(app.detail.view(), DetailView::Loaded(p) if p.name == "Bulbasaur"));
    }

    #[test]
    fn test_refetch_detail_only_when_open() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RefetchDetail), Effect::None);
        update(&mut app, Action::OpenDetail("Mew".to_string()));
        assert!(matches!(
            update(&mut app, Action::RefetchDetail),
            Effect::FetchDetail(_)
        ));
    }

    #[test]
    fn test_search_changed_and_quit() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::SearchChanged("pika".to_string())),
            Effect::None
        );
        assert_eq!(app.search, "pika");
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
