//! # Routes
//!
//! Client-side navigation. The detail dialog is visible exactly when the
//! current path names a Pokémon:
//!
//! ```text
//! /              → List
//! /pokemon       → List
//! /pokemon/Mew   → Detail("Mew")
//! ```

use std::fmt;

pub const LIST_PATH: &str = "/pokemon";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownPath(path) => write!(f, "unknown path: {path}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    /// Parses a path such as `/pokemon/Pikachu`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() || trimmed == LIST_PATH {
            return Ok(Route::List);
        }
        match trimmed.strip_prefix(LIST_PATH).and_then(|rest| rest.strip_prefix('/')) {
            Some(name) if name.contains('/') => Err(RouteError::UnknownPath(path.to_string())),
            Some(name) if name.trim().is_empty() => Ok(Route::List),
            Some(name) => Ok(Route::Detail(name.to_string())),
            None => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Detail(name) => format!("{LIST_PATH}/{name}"),
        }
    }

    /// The Pokémon the detail dialog should show, if any.
    pub fn detail_name(&self) -> Option<&str> {
        match self {
            Route::List => None,
            Route::Detail(name) => Some(name),
        }
    }
}
