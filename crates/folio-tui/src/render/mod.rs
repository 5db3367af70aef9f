//! Top-level view function.
//!
//! Rendering also performs the frame's layout measurement: the document
//! is rebuilt at the current width, the fresh section spans are written
//! into the viewport, and the active section is re-derived before the
//! widgets draw from it.

use ratatui::{
    text::Text,
    widgets::{Paragraph, Widget},
    Frame,
};

use folio_app::AppState;

use crate::document;
use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets::{Footer, NavBar, NavMenu};

/// Render one frame.
pub fn view(frame: &mut Frame<'_>, state: &mut AppState) {
    let palette = Palette::for_theme(state.theme);
    let regions = layout::compute(frame.area());

    // Measure this frame's layout and feed it to the tracker
    let doc = document::build(&state.portfolio, &palette, regions.body.width);
    state.viewport.update_layout(
        doc.total_lines(),
        regions.body.height as usize,
        doc.spans.clone(),
    );
    state.sync_active_section();

    let body = Paragraph::new(Text::from(doc.lines))
        .style(styles::body(&palette))
        .scroll((state.viewport.offset as u16, 0));
    frame.render_widget(body, regions.body);

    frame.render_widget(NavBar::new(state, &palette), regions.header);
    frame.render_widget(Footer::new(state, &palette), regions.footer);

    if state.menu_open {
        NavMenu::new(state, &palette).render(regions.body, frame.buffer_mut());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::{update, Message, Settings};
    use folio_core::{Portfolio, SectionId};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_first_frame_measures_layout() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        assert!(state.viewport.spans.is_empty());

        draw(&mut state, 90, 30);

        assert_eq!(state.viewport.spans.len(), 5);
        assert!(state.viewport.total_lines > 30);
        assert_eq!(state.viewport.visible_lines, 27);
        assert_eq!(state.active_section, SectionId::About);
    }

    #[test]
    fn test_frame_shows_header_content_and_footer() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        let content = draw(&mut state, 90, 30);

        assert!(content.contains("John Doe"));
        assert!(content.contains("About Me"));
        assert!(content.contains("q quit"));
    }

    #[test]
    fn test_scrolled_frame_updates_nav_highlight() {
        // Short viewport, so the bottom of the document probes inside
        // the last section rather than the one before it.
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        draw(&mut state, 90, 20);

        // Jump straight to the bottom and re-render
        update(&mut state, Message::ScrollToBottom);
        let content = draw(&mut state, 90, 20);

        assert_eq!(state.active_section, SectionId::Achievements);
        assert!(content.contains("▸ Achievements"));
    }

    #[test]
    fn test_menu_overlay_rendered_when_open() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        draw(&mut state, 90, 30);

        update(&mut state, Message::ToggleMenu);
        let content = draw(&mut state, 90, 30);
        assert!(content.contains("Sections"));

        update(&mut state, Message::CloseMenu);
        let content = draw(&mut state, 90, 30);
        assert!(!content.contains("Sections"));
    }

    #[test]
    fn test_resize_remeasures_spans() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        draw(&mut state, 120, 30);
        let wide_total = state.viewport.total_lines;

        draw(&mut state, 44, 30);
        assert!(state.viewport.total_lines > wide_total);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        draw(&mut state, 12, 4);
    }
}
