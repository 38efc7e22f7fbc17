//! # Core Application Logic
//!
//! This module contains the Pokédex business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Query providers      │
//!                    │  • Filter, Routes       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Query    │
//!            │  Adapter   │            │  (GraphQL) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`query_state`]: List and detail providers with the stale-response guard
//! - [`filter`]: Search box filtering
//! - [`route`]: `/pokemon` and `/pokemon/<name>` paths
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod filter;
pub mod query_state;
pub mod route;
pub mod state;
