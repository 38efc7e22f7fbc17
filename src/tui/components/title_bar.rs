//! # TitleBar Component
//!
//! Top status bar: which backend we talk to, the current path, and the
//! latest status message.
//!
//! Stateless: every field is a prop copied from `App` before rendering.
//!
//! ```text
//! Pokédex [GraphQL] /pokemon/Pikachu | 151 Pokémon
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Name of the backend (e.g., "GraphQL")
    pub source_name: String,
    /// Current route path (e.g., "/pokemon")
    pub path: String,
    /// Status message (e.g., "Loading Pokémon...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source_name: String, path: String, status_message: String) -> Self {
        Self {
            source_name,
            path,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Pokédex",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" [{}] ", self.source_name)),
            Span::styled(self.path.clone(), Style::default().fg(Color::DarkGray)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
