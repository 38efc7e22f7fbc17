//! # Detail Dialog Component
//!
//! Overlay showing one Pokémon. Opened with Enter on the grid (or a
//! `/pokemon/<name>` start path), dismissed with Esc.
//!
//! Stateless: renders whatever `DetailView` the detail provider reports.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::query_state::DetailView;
use crate::query::{PokemonDetail, PokemonDimension};
use crate::tui::components::pokemon_grid::type_style;
use crate::tui::ui::spinner;

pub struct DetailDialog<'a> {
    view: DetailView<'a>,
    /// Name from the route, shown while nothing else is known.
    requested: &'a str,
    spinner_frame: usize,
}

impl<'a> DetailDialog<'a> {
    pub fn new(view: DetailView<'a>, requested: &'a str, spinner_frame: usize) -> Self {
        Self {
            view,
            requested,
            spinner_frame,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match self.view {
            DetailView::Hidden => return,
            DetailView::Loading => " Loading... ".to_string(),
            DetailView::Loaded(p) => format!(" {} #{} ", p.name, p.number),
            DetailView::Error(_) | DetailView::NotFound => format!(" {} ", self.requested),
        };

        let overlay = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
            .title_bottom(Line::from(" ←→ Prev/Next  Ctrl+R Reload  Esc Close ").centered())
            .padding(Padding::new(2, 2, 1, 0));

        let body = match self.view {
            DetailView::Hidden => return,
            DetailView::Loading => Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    format!("{} Loading Pokémon data...", spinner(self.spinner_frame)),
                    Style::default().fg(Color::Gray),
                ),
            ])
            .alignment(Alignment::Center),
            DetailView::Error(message) => Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    " ! ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(
                    "Error loading Pokémon details",
                    Style::default().fg(Color::Red),
                ),
                Line::styled(message.to_string(), Style::default().fg(Color::DarkGray)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            DetailView::NotFound => Paragraph::new(vec![
                Line::raw(""),
                Line::styled("No Pokémon found", Style::default().fg(Color::Gray)),
            ])
            .alignment(Alignment::Center),
            DetailView::Loaded(pokemon) => {
                Paragraph::new(detail_lines(pokemon)).wrap(Wrap { trim: false })
            }
        };

        frame.render_widget(body.block(block), overlay);
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
}

fn badges(names: &[String], style: impl Fn(&str) -> Style) -> Line<'static> {
    if names.is_empty() {
        return Line::styled("None", Style::default().fg(Color::DarkGray));
    }
    let mut spans = Vec::with_capacity(names.len() * 2);
    for name in names {
        spans.push(Span::styled(format!(" {name} "), style(name)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn range_line(label: &str, dimension: &PokemonDimension) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled(format!("{label:<8}"), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Min: ", dim),
        Span::raw(format!("{:<10}", dimension.minimum)),
        Span::styled("Max: ", dim),
        Span::raw(dimension.maximum.clone()),
    ])
}

fn stat(label: &str, value: String) -> [Span<'static>; 2] {
    [
        Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{value:<8}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn detail_lines(pokemon: &PokemonDetail) -> Vec<Line<'static>> {
    let mut battle = Vec::new();
    battle.extend(stat("Max CP", pokemon.max_cp.to_string()));
    battle.extend(stat("Max HP", pokemon.max_hp.to_string()));
    battle.extend(stat("Flee Rate", pokemon.flee_rate.to_string()));

    vec![
        badges(&pokemon.types, type_style),
        Line::raw(""),
        heading("Classification"),
        Line::raw(pokemon.classification.clone()),
        Line::raw(""),
        range_line("Height", &pokemon.height),
        range_line("Weight", &pokemon.weight),
        Line::raw(""),
        heading("Battle Stats"),
        Line::from(battle),
        Line::raw(""),
        heading("Weaknesses"),
        badges(&pokemon.weaknesses, |_| {
            Style::default().fg(Color::Black).bg(Color::LightRed)
        }),
        Line::raw(""),
        heading("Resistances"),
        badges(&pokemon.resistant, |_| {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        }),
        Line::raw(""),
        Line::styled(pokemon.image.clone(), Style::default().fg(Color::DarkGray)),
    ]
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::detail;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(view: DetailView<'_>) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DetailDialog::new(view, "Pikachu", 0).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_hidden_renders_nothing() {
        assert!(render_text(DetailView::Hidden).trim().is_empty());
    }

    #[test]
    fn test_each_state_has_its_own_message() {
        assert!(render_text(DetailView::Loading).contains("Loading Pokémon data..."));
        assert!(render_text(DetailView::NotFound).contains("No Pokémon found"));
        let error = render_text(DetailView::Error("network error: timeout"));
        assert!(error.contains("Error loading Pokémon details"));
        assert!(error.contains("network error: timeout"));
    }

    #[test]
    fn test_loaded_shows_every_section() {
        let pikachu = detail("025", "Pikachu");
        let text = render_text(DetailView::Loaded(&pikachu));
        for expected in [
            "Pikachu #025",
            "Classification",
            "Pikachu Pokémon",
            "Height",
            "0.35m",
            "6.75kg",
            "Max CP",
            "938",
            "1002",
            "Flee Rate",
            "0.1",
            "Weaknesses",
            "Fighting",
            "Resistances",
            "Ghost",
        ] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }
}
