use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailDialog, PokemonGrid, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner glyph for the given animation frame.
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [title_area, search_area, grid_area] = layout.areas(frame.area());

    TitleBar::new(
        app.source.name().to_string(),
        app.route.to_path(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let visible = app.visible_pokemons();
    let list = app.list.result();

    tui.search_box.match_count = (!list.loading && list.error.is_none()).then_some(visible.len());
    tui.search_box.render(frame, search_area);

    PokemonGrid::new(&mut tui.grid, list, &visible, &app.search, spinner_frame)
        .render(frame, grid_area);

    if let Some(name) = app.route.detail_name() {
        let area = frame.area();
        DetailDialog::new(app.detail.view(), name, spinner_frame).render(frame, area);
    }
}
