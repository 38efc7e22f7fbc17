//! # SearchBox Component
//!
//! Single-line text field above the grid. Every edit is reported so the
//! grid can re-filter as the user types.
//!
//! The buffer is internal state; the match count shown in the title is a
//! prop set by the parent before each render.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The search term changed; carries the new term.
    Changed(String),
    /// Only the cursor moved.
    CursorMoved,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer
    pos: usize,
    /// Number of Pokémon currently matching (Prop)
    pub match_count: Option<usize>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
            match_count: None,
        }
    }

    /// Empties the field. Returns the event to report, if anything changed.
    pub fn clear(&mut self) -> Option<SearchEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        self.buffer.clear();
        self.pos = 0;
        Some(SearchEvent::Changed(String::new()))
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.match_count {
            Some(count) => format!("Search ({count} shown)"),
            None => "Search".to_string(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        let (text, style) = if self.buffer.is_empty() {
            (
                "Type a name or number...".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.buffer.clone(), Style::default().fg(Color::Green))
        };

        frame.render_widget(Paragraph::new(text).block(block).style(style), area);

        let offset = u16::try_from(self.buffer[..self.pos].width()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.pos, &line);
                self.pos += line.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft if self.pos > 0 => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                Some(SearchEvent::CursorMoved)
            }
            TuiEvent::CursorRight if self.pos < self.buffer.len() => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                Some(SearchEvent::CursorMoved)
            }
            _ => None,
        }
    }
}
