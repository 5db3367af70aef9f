//! Scroll message handlers
//!
//! Every scroll movement re-runs the active-section computation -- the
//! tracker fires on each scroll event with no debouncing, which is fine
//! because the scan is O(number of sections) and there are five.

use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState, n: usize) -> UpdateResult {
    state.viewport.scroll_up(n);
    state.sync_active_section();
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState, n: usize) -> UpdateResult {
    state.viewport.scroll_down(n);
    state.sync_active_section();
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_top();
    state.sync_active_section();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_bottom();
    state.sync_active_section();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewport.page_up();
    state.sync_active_section();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewport.page_down();
    state.sync_active_section();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
