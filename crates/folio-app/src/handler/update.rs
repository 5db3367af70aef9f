//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Phase};

use super::{keys::handle_key, nav, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = Phase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            // Advance an in-flight animated jump; the tracker follows
            // the moving offset so the highlight updates mid-flight.
            if state.viewport.tick() {
                state.sync_active_section();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp(n) => scroll::handle_scroll_up(state, n),
        Message::ScrollDown(n) => scroll::handle_scroll_down(state, n),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(id) => nav::handle_select_section(state, id),
        Message::NextSection => nav::handle_next_section(state),
        Message::PrevSection => nav::handle_prev_section(state),
        Message::ToggleMenu => nav::handle_toggle_menu(state),
        Message::CloseMenu => nav::handle_close_menu(state),
        Message::MenuUp => nav::handle_menu_up(state),
        Message::MenuDown => nav::handle_menu_down(state),
        Message::MenuSelect => {
            UpdateResult::message(Message::SelectSection(state.menu_selection()))
        }

        // ─────────────────────────────────────────────────────────
        // Theme & Links
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggle();
            UpdateResult::action(UpdateAction::PersistTheme(state.theme))
        }

        Message::OpenLink(kind) => match kind.url(&state.portfolio.links) {
            Some(url) => UpdateResult::action(UpdateAction::OpenUrl(url)),
            // Absent target: silently do nothing
            None => UpdateResult::none(),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
