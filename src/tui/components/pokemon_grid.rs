//! # Pokémon Grid Component
//!
//! The list view: every Pokémon that survives the search filter, one card
//! per row. Shows a spinner while the list loads and an error panel when
//! the fetch failed (never a silently empty grid).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PokemonGridState` lives in `TuiState`
//! - `PokemonGrid` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::query_state::ListResult;
use crate::query::PokemonSummary;
use crate::tui::event::TuiEvent;
use crate::tui::ui::spinner;

const NAME_COLUMN_WIDTH: usize = 14;

/// Persistent state for the grid.
pub struct PokemonGridState {
    pub selected: usize,
    pub list_state: ListState,
    /// Rows visible in the last render, used for paging.
    page_size: usize,
}

/// Events emitted by the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Open the detail dialog for this Pokémon.
    Open(String),
}

impl PokemonGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
            page_size: 10,
        }
    }

    /// Jumps back to the top, e.g. after the search term changed.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
        *self.list_state.offset_mut() = 0;
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(self.selected));
    }

    /// The Pokémon under the cursor, if the list isn't empty.
    pub fn selected_in<'a>(&self, visible: &[&'a PokemonSummary]) -> Option<&'a PokemonSummary> {
        visible
            .get(self.selected.min(visible.len().saturating_sub(1)))
            .copied()
    }

    /// Handle a key event against the currently visible Pokémon.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        visible: &[&PokemonSummary],
    ) -> Option<GridEvent> {
        let len = visible.len();
        match event {
            TuiEvent::CursorUp => self.move_by(-1, len),
            TuiEvent::CursorDown => self.move_by(1, len),
            TuiEvent::PageUp => self.move_by(-(self.page_size as isize), len),
            TuiEvent::PageDown => self.move_by(self.page_size as isize, len),
            TuiEvent::Home => self.move_by(-(len as isize), len),
            TuiEvent::End => self.move_by(len as isize, len),
            TuiEvent::Submit => {
                return self
                    .selected_in(visible)
                    .map(|p| GridEvent::Open(p.name.clone()));
            }
            _ => {}
        }
        None
    }
}

impl Default for PokemonGridState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the grid.
pub struct PokemonGrid<'a> {
    state: &'a mut PokemonGridState,
    list: ListResult<'a>,
    visible: &'a [&'a PokemonSummary],
    search: &'a str,
    spinner_frame: usize,
}

impl<'a> PokemonGrid<'a> {
    pub fn new(
        state: &'a mut PokemonGridState,
        list: ListResult<'a>,
        visible: &'a [&'a PokemonSummary],
        search: &'a str,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            list,
            visible,
            search,
            spinner_frame,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Pokémon ")
            .title_bottom(
                Line::from(" ↑↓ Select  Enter Details  Ctrl+R Reload  Esc Clear/Quit ").centered(),
            )
            .padding(Padding::horizontal(1));

        if self.list.loading && self.list.pokemons.is_empty() {
            let loading = Paragraph::new(format!(
                "{} Loading Pokémon...",
                spinner(self.spinner_frame)
            ))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if let Some(error) = self.list.error {
            let lines = vec![
                Line::styled(
                    "Error loading Pokémon",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Line::styled(error.to_string(), Style::default().fg(Color::Red)),
                Line::raw(""),
                Line::styled("Press Ctrl+R to try again", Style::default().fg(Color::DarkGray)),
            ];
            let panel = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(panel, area);
            return;
        }

        if self.visible.is_empty() {
            let message = if self.list.pokemons.is_empty() {
                "No Pokémon.".to_string()
            } else {
                format!("No Pokémon match \"{}\".", self.search)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.page_size = area.height.saturating_sub(2).max(1) as usize;
        self.state.selected = self.state.selected.min(self.visible.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .enumerate()
            .map(|(i, pokemon)| card_line(pokemon, i == self.state.selected))
            .map(ListItem::new)
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// One row: `#001  Bulbasaur      Grass Poison`
fn card_line(pokemon: &PokemonSummary, selected: bool) -> Line<'static> {
    let base = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };

    let name_width = pokemon.name.width();
    let padding = " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_width) + 1);

    let mut spans = vec![
        Span::styled(format!("#{:<4} ", pokemon.number), base.add_modifier(Modifier::DIM)),
        Span::styled(pokemon.name.clone(), base),
        Span::styled(padding, base),
    ];
    for ty in &pokemon.types {
        spans.push(Span::styled(format!(" {ty} "), type_style(ty)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Badge colour for a Pokémon type.
pub fn type_style(type_name: &str) -> Style {
    let bg = match type_name.to_ascii_lowercase().as_str() {
        "fire" => Color::Red,
        "water" => Color::Blue,
        "grass" | "bug" => Color::Green,
        "electric" => Color::Yellow,
        "psychic" | "fairy" => Color::Magenta,
        "ice" | "flying" => Color::Cyan,
        "poison" | "ghost" | "dragon" => Color::LightMagenta,
        "ground" | "rock" | "fighting" => Color::LightRed,
        "steel" | "dark" => Color::DarkGray,
        _ => Color::Gray,
    };
    Style::default().fg(Color::Black).bg(bg)
}
