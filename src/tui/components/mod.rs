//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing backend, path and status
//! - `DetailDialog`: Overlay for one Pokémon in whatever state its query is in
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: Single-line search field
//! - `PokemonGrid`: Selectable list of Pokémon cards
//!
//! Components receive external data as "props" (struct fields or
//! constructor arguments), never by reaching into `App` themselves.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_box.rs     (Search field)
//! ├── pokemon_grid.rs   (List view)
//! └── detail_dialog.rs  (Detail overlay)
//! ```

pub mod detail_dialog;
pub mod pokemon_grid;
pub mod search_box;
mod title_bar;

pub use detail_dialog::DetailDialog;
pub use pokemon_grid::{GridEvent, PokemonGrid, PokemonGridState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
