//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and runs the
//! fetches that `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetches
//!
//! Each `Effect::FetchList` / `Effect::FetchDetail` spawns a tokio task that
//! calls the `PokemonSource` and sends the result back as an `Action` over
//! an mpsc channel, drained once per frame. Results carry their request
//! id so late answers are dropped by the providers. A superseded detail
//! task is also aborted, which only saves work.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::query_state::{FetchTicket, RequestId};
use crate::core::route::Route;
use crate::core::state::App;
use crate::query::{GraphQlSource, PokemonSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{GridEvent, PokemonGridState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub grid: PokemonGridState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            grid: PokemonGridState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Running fetch tasks, so superseded ones can be aborted.
#[derive(Default)]
struct Tasks {
    list: Option<AbortHandle>,
    detail: Option<AbortHandle>,
}

impl Tasks {
    fn replace_list(&mut self, handle: AbortHandle) {
        if let Some(old) = self.list.replace(handle) {
            old.abort();
        }
    }

    fn replace_detail(&mut self, handle: AbortHandle) {
        if let Some(old) = self.detail.replace(handle) {
            old.abort();
        }
    }

    fn cancel_detail(&mut self) {
        if let Some(old) = self.detail.take() {
            old.abort();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Build the GraphQL source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> std::io::Result<Arc<dyn PokemonSource>> {
    let source = GraphQlSource::new(config.endpoint.clone(), config.list_size, config.timeout)
        .map_err(std::io::Error::other)?;
    info!("Using GraphQL endpoint {}", source.endpoint());
    Ok(Arc::new(source))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config)?;
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let start_route = Route::parse(&config.start_path).unwrap_or_else(|e| {
        warn!("Ignoring start path: {}", e);
        Route::List
    });

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tasks = Tasks::default();

    // Mount the list view, then honour a deep link
    for action in [Action::MountList, Action::Navigate(start_route)] {
        let effect = update(&mut app, action);
        apply_effect(effect, &app, &mut tasks, &tx);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.list.result().loading || app.detail.result().loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = translate_event(&event, &app, &mut tui) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &app, &mut tasks, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(effect, &app, &mut tasks, &tx);
        }
    }

    tasks.cancel_detail();
    ratatui::restore();
    Ok(())
}

/// Maps a terminal event to a core action, updating TUI-local state on the way.
fn translate_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        _ if app.detail_open() => match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(Action::CloseDetail),
            TuiEvent::Reload => Some(Action::RefetchDetail),
            TuiEvent::CursorLeft | TuiEvent::CursorUp => step_detail(app, tui, -1),
            TuiEvent::CursorRight | TuiEvent::CursorDown => step_detail(app, tui, 1),
            _ => None,
        },
        TuiEvent::Reload => Some(Action::ReloadList),
        TuiEvent::Escape => match tui.search_box.clear() {
            Some(SearchEvent::Changed(term)) => {
                tui.grid.select_first();
                Some(Action::SearchChanged(term))
            }
            _ => Some(Action::Quit),
        },
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Home
        | TuiEvent::End
        | TuiEvent::Submit => {
            let visible = app.visible_pokemons();
            match tui.grid.handle_event(event, &visible) {
                Some(GridEvent::Open(name)) => Some(Action::OpenDetail(name)),
                None => None,
            }
        }
        _ => match tui.search_box.handle_event(event) {
            Some(SearchEvent::Changed(term)) => {
                tui.grid.select_first();
                Some(Action::SearchChanged(term))
            }
            _ => None,
        },
    }
}

/// Moves the open dialog to the previous/next Pokémon in the grid.
fn step_detail(app: &App, tui: &mut TuiState, delta: isize) -> Option<Action> {
    let visible = app.visible_pokemons();
    let current = app.route.detail_name()?;
    let index = visible.iter().position(|p| p.name == current)?;
    let target = index.checked_add_signed(delta)?;
    let next = visible.get(target)?;
    tui.grid.selected = target;
    tui.grid.list_state.select(Some(target));
    Some(Action::Navigate(Route::Detail(next.name.clone())))
}

/// Performs the I/O an update asked for. Returns true when the app should quit.
fn apply_effect(effect: Effect, app: &App, tasks: &mut Tasks, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::FetchList(request_id) => {
            tasks.replace_list(spawn_list_fetch(app.source.clone(), request_id, tx.clone()));
        }
        Effect::FetchDetail(ticket) => {
            tasks.replace_detail(spawn_detail_fetch(app.source.clone(), ticket, tx.clone()));
        }
        Effect::CancelDetail => tasks.cancel_detail(),
    }
    false
}

fn spawn_list_fetch(
    source: Arc<dyn PokemonSource>,
    request_id: RequestId,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning list fetch #{} from {}", request_id, source.name());
    let handle = tokio::spawn(async move {
        let started = Instant::now();
        let result = source.list_pokemons().await;
        match &result {
            Ok(list) => debug!(
                "List fetch #{} returned {} Pokémon in {}ms",
                request_id,
                list.len(),
                started.elapsed().as_millis()
            ),
            Err(e) => warn!("List fetch #{} failed: {}", request_id, e),
        }
        if tx.send(Action::ListLoaded { request_id, result }).is_err() {
            warn!("Failed to send list result #{}: receiver dropped", request_id);
        }
    });
    handle.abort_handle()
}

fn spawn_detail_fetch(
    source: Arc<dyn PokemonSource>,
    ticket: FetchTicket,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning detail fetch #{} for {:?}", ticket.request_id, ticket.name);
    let handle = tokio::spawn(async move {
        let FetchTicket { request_id, name } = ticket;
        let result = source.get_pokemon(&name).await;
        if let Err(e) = &result {
            warn!("Detail fetch #{} for {:?} failed: {}", request_id, name, e);
        }
        if tx.send(Action::DetailLoaded { request_id, result }).is_err() {
            warn!("Failed to send detail result #{}: receiver dropped", request_id);
        }
    });
    handle.abort_handle()
}
