//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: terminal setup, the main loop, guaranteed teardown
//! - `run_loop`: draw → poll → update, until the state says quit
//! - `perform_action`: side effects requested by the update function

use folio_app::{update, AppState, ConfigThemeStore, Message, UpdateAction};
use folio_core::prelude::*;
use folio_core::{Portfolio, ThemeStore};

use crate::{event, render, terminal};

/// Run the TUI application until the user quits.
pub fn run(portfolio: Portfolio, mut store: ConfigThemeStore) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let settings = store.settings().clone();
    let mut term = ratatui::init();
    enable_mouse_capture();

    let mut state = AppState::new(portfolio, settings);
    let result = run_loop(&mut term, &mut state, &mut store);

    disable_mouse_capture();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    store: &mut ConfigThemeStore,
) -> Result<()> {
    let tick_ms = state.settings.ui.tick_ms;
    let scroll_lines = state.settings.behavior.mouse_scroll_lines;

    while !state.should_quit() {
        // Render (also re-measures the document layout)
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events; timeouts become animation ticks
        if let Some(message) = event::poll(tick_ms, scroll_lines)? {
            process_message(state, store, message);
        }
    }

    Ok(())
}

/// Run a message and any follow-up messages it produces, performing
/// requested side effects along the way.
fn process_message(state: &mut AppState, store: &mut ConfigThemeStore, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        next = result.message;
        if let Some(action) = result.action {
            perform_action(store, action);
        }
    }
}

/// Perform a side effect requested by the update function.
fn perform_action(store: &mut ConfigThemeStore, action: UpdateAction) {
    match action {
        UpdateAction::OpenUrl(url) => {
            info!("Opening {url}");
            if let Err(e) = open::that_detached(&url) {
                warn!("Failed to open {url}: {e}");
            }
        }
        UpdateAction::PersistTheme(theme) => {
            store.set_theme(theme);
        }
    }
}

fn enable_mouse_capture() {
    use crossterm::event::EnableMouseCapture;
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableMouseCapture) {
        warn!("Failed to enable mouse capture: {e}");
    }
}

fn disable_mouse_capture() {
    use crossterm::event::DisableMouseCapture;
    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {e}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
