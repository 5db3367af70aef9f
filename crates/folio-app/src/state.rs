//! Application state (Model in TEA pattern)

use folio_core::{active_section, Portfolio, SectionId, Theme};

use crate::config::Settings;
use crate::viewport::ViewportState;

/// Rows of probe lookahead below the scroll offset when deciding which
/// section is in view. Compensates for the pinned navigation header so
/// a section becomes active slightly before its heading reaches the
/// body top.
pub const HEADER_PROBE_ROWS: usize = 2;

/// Rows of clearance left above a section heading when jumping to it
/// from the navigation. Deliberately smaller than [`HEADER_PROBE_ROWS`]
/// so a just-selected section is always the active one.
pub const NAV_CLEARANCE_ROWS: usize = 1;

/// Current application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The hand-authored page content
    pub portfolio: Portfolio,

    /// Application settings from config file
    pub settings: Settings,

    /// Display theme. A mirror of the theme store's value; flips are
    /// persisted by the event loop via `UpdateAction::PersistTheme`.
    pub theme: Theme,

    /// The section currently in view, reflected in the nav highlight.
    ///
    /// Always one of [`SectionId::ALL`]. Only written by
    /// [`AppState::sync_active_section`], which keeps the previous
    /// value whenever the scroll position matches no section.
    pub active_section: SectionId,

    /// Whether the navigation menu overlay is open
    pub menu_open: bool,

    /// Highlighted entry in the navigation menu (document-order index)
    pub menu_cursor: usize,

    /// Document scroll state
    pub viewport: ViewportState,

    /// Current application phase
    pub phase: Phase,
}

impl AppState {
    pub fn new(portfolio: Portfolio, settings: Settings) -> Self {
        let theme = settings.theme.mode;
        Self {
            portfolio,
            settings,
            theme,
            active_section: SectionId::About,
            menu_open: false,
            menu_cursor: 0,
            viewport: ViewportState::new(),
            phase: Phase::Running,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Section Tracking
    // ─────────────────────────────────────────────────────────

    /// Recompute the active section from the current scroll offset.
    ///
    /// Called after every scroll movement. When the probe falls in a
    /// gap (above the first section, or before layout has been
    /// measured) the previous value is retained -- there is no "no
    /// section" state.
    pub fn sync_active_section(&mut self) {
        if let Some(id) = active_section(
            self.viewport.offset,
            HEADER_PROBE_ROWS,
            &self.viewport.spans,
        ) {
            self.active_section = id;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Jump to a section from the navigation.
    ///
    /// Closes the menu first, unconditionally. If the section has no
    /// measured span in the document the jump silently does nothing.
    pub fn select_section(&mut self, id: SectionId) {
        self.close_menu();

        let Some(span) = self.viewport.spans.iter().find(|s| s.id == id).copied() else {
            return;
        };
        self.viewport
            .animate_to(span.top.saturating_sub(NAV_CLEARANCE_ROWS));
        self.sync_active_section();
    }

    // ─────────────────────────────────────────────────────────
    // Menu Helpers
    // ─────────────────────────────────────────────────────────

    /// Open the navigation menu with the cursor on the active section.
    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.menu_cursor = self.active_section.index();
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Move the menu cursor up, wrapping at the top.
    pub fn menu_cursor_up(&mut self) {
        let len = SectionId::ALL.len();
        self.menu_cursor = (self.menu_cursor + len - 1) % len;
    }

    /// Move the menu cursor down, wrapping at the bottom.
    pub fn menu_cursor_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % SectionId::ALL.len();
    }

    /// Section under the menu cursor.
    pub fn menu_selection(&self) -> SectionId {
        SectionId::from_index(self.menu_cursor).unwrap_or(SectionId::About)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = Phase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Quitting
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionSpan;

    fn test_state() -> AppState {
        AppState::new(Portfolio::sample(), Settings::default())
    }

    /// Layout with every section measured, tall enough to scroll.
    fn measured_state() -> AppState {
        let mut state = test_state();
        let spans = vec![
            SectionSpan::new(SectionId::About, 10, 30),
            SectionSpan::new(SectionId::Publications, 40, 25),
            SectionSpan::new(SectionId::Projects, 65, 40),
            SectionSpan::new(SectionId::Competitive, 105, 20),
            SectionSpan::new(SectionId::Achievements, 125, 25),
        ];
        state.viewport.update_layout(165, 30, spans);
        state
    }

    #[test]
    fn test_initial_active_section_is_about() {
        let state = test_state();
        assert_eq!(state.active_section, SectionId::About);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_sync_updates_active_section() {
        let mut state = measured_state();
        state.viewport.scroll_down(40);
        state.sync_active_section();
        // offset 40 + probe 2 = 42 → Publications [40,65)
        assert_eq!(state.active_section, SectionId::Publications);
    }

    #[test]
    fn test_sync_retains_value_above_first_section() {
        let mut state = measured_state();
        state.viewport.scroll_down(70);
        state.sync_active_section();
        assert_eq!(state.active_section, SectionId::Projects);

        // Back to offset 0: probe 2 is above the first span (top 10).
        state.viewport.scroll_to_top();
        state.sync_active_section();
        assert_eq!(
            state.active_section,
            SectionId::Projects,
            "gaps retain the previous value"
        );
    }

    #[test]
    fn test_sync_before_measurement_keeps_default() {
        let mut state = test_state();
        state.sync_active_section();
        assert_eq!(state.active_section, SectionId::About);
    }

    #[test]
    fn test_select_section_targets_top_minus_clearance() {
        let mut state = measured_state();
        state.select_section(SectionId::Projects);
        while state.viewport.tick() {}
        assert_eq!(state.viewport.offset, 65 - NAV_CLEARANCE_ROWS);
    }

    #[test]
    fn test_select_section_closes_open_menu() {
        let mut state = measured_state();
        state.open_menu();
        state.select_section(SectionId::Publications);
        assert!(!state.menu_open, "selection always closes the menu");
    }

    #[test]
    fn test_select_unmeasured_section_is_silent_noop() {
        let mut state = test_state();
        state.open_menu();
        state.select_section(SectionId::Competitive);
        assert!(!state.menu_open, "menu closes even when the jump is a no-op");
        assert_eq!(state.viewport.offset, 0);
        assert!(!state.viewport.is_animating());
    }

    #[test]
    fn test_probe_exceeds_clearance() {
        // A just-selected section must probe as active: its top sits at
        // offset + clearance, and the probe reaches offset + probe rows.
        assert!(HEADER_PROBE_ROWS > NAV_CLEARANCE_ROWS);
    }

    #[test]
    fn test_selected_section_becomes_active_after_jump() {
        let mut state = measured_state();
        state.select_section(SectionId::Achievements);
        while state.viewport.tick() {}
        state.sync_active_section();
        assert_eq!(state.active_section, SectionId::Achievements);
    }

    #[test]
    fn test_menu_open_positions_cursor_on_active() {
        let mut state = measured_state();
        state.viewport.scroll_down(70);
        state.sync_active_section();
        state.open_menu();
        assert_eq!(state.menu_cursor, SectionId::Projects.index());
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut state = test_state();
        state.open_menu();
        state.menu_cursor_up();
        assert_eq!(state.menu_selection(), SectionId::Achievements);
        state.menu_cursor_down();
        assert_eq!(state.menu_selection(), SectionId::About);
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = test_state();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_quit_lifecycle() {
        let mut state = test_state();
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_theme_mirrors_settings() {
        let mut settings = Settings::default();
        settings.theme.mode = Theme::Dark;
        let state = AppState::new(Portfolio::sample(), settings);
        assert_eq!(state.theme, Theme::Dark);
    }
}
