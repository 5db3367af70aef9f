//! Section jump and menu handlers

use folio_core::SectionId;

use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Handle a navigation selection.
///
/// Closes the menu (always) and starts the animated jump to the
/// section's top minus the nav clearance. A section absent from the
/// measured layout silently does nothing.
pub fn handle_select_section(state: &mut AppState, id: SectionId) -> UpdateResult {
    state.select_section(id);
    UpdateResult::none()
}

/// Jump to the section after the active one, wrapping at the end.
pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    UpdateResult::message(Message::SelectSection(state.active_section.next()))
}

/// Jump to the section before the active one, wrapping at the start.
pub fn handle_prev_section(state: &mut AppState) -> UpdateResult {
    UpdateResult::message(Message::SelectSection(state.active_section.prev()))
}

/// Handle menu open/close toggle
pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    state.toggle_menu();
    UpdateResult::none()
}

/// Handle menu close
pub fn handle_close_menu(state: &mut AppState) -> UpdateResult {
    state.close_menu();
    UpdateResult::none()
}

/// Move the menu cursor up
pub fn handle_menu_up(state: &mut AppState) -> UpdateResult {
    state.menu_cursor_up();
    UpdateResult::none()
}

/// Move the menu cursor down
pub fn handle_menu_down(state: &mut AppState) -> UpdateResult {
    state.menu_cursor_down();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use folio_core::{Portfolio, SectionSpan};

    fn measured_state() -> AppState {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        let spans = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| SectionSpan::new(*id, i * 30, 30))
            .collect();
        state.viewport.update_layout(150, 20, spans);
        state
    }

    #[test]
    fn test_select_closes_menu_and_animates() {
        let mut state = measured_state();
        state.open_menu();

        handle_select_section(&mut state, SectionId::Projects);
        assert!(!state.menu_open);
        assert!(state.viewport.is_animating());

        while state.viewport.tick() {}
        // Projects top 60, clearance 1
        assert_eq!(state.viewport.offset, 59);
    }

    #[test]
    fn test_next_section_emits_follow_up_selection() {
        let mut state = measured_state();
        let result = handle_next_section(&mut state);
        assert_eq!(
            result.message,
            Some(Message::SelectSection(SectionId::Publications))
        );
    }

    #[test]
    fn test_prev_section_wraps_to_last() {
        let mut state = measured_state();
        let result = handle_prev_section(&mut state);
        assert_eq!(
            result.message,
            Some(Message::SelectSection(SectionId::Achievements))
        );
    }

    #[test]
    fn test_menu_cursor_moves() {
        let mut state = measured_state();
        state.open_menu();
        handle_menu_down(&mut state);
        assert_eq!(state.menu_selection(), SectionId::Publications);
        handle_menu_up(&mut state);
        handle_menu_up(&mut state);
        assert_eq!(state.menu_selection(), SectionId::Achievements);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut state = measured_state();
        handle_close_menu(&mut state);
        handle_close_menu(&mut state);
        assert!(!state.menu_open);
    }
}
