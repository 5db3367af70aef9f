//! Sticky navigation header.
//!
//! Two rows, persistently visible above the document: the identity row
//! (name on the left, theme indicator on the right) and the section
//! tabs with the active section highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use folio_app::AppState;
use folio_core::SectionId;

use crate::theme::{styles, Palette};

pub struct NavBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> NavBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn render_identity_row(&self, area: Rect, buf: &mut Buffer) {
        let name = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                self.state.portfolio.profile.name.clone(),
                styles::identity(self.palette),
            ),
        ]);
        Paragraph::new(name).render(area, buf);

        // Theme indicator, right aligned: current theme glyph + key hint
        let indicator = Line::from(vec![
            Span::styled(
                Palette::theme_glyph(self.state.theme),
                styles::key_hint(self.palette),
            ),
            Span::styled(" t ", styles::nav_inactive(self.palette)),
        ]);
        Paragraph::new(indicator).right_aligned().render(area, buf);
    }

    fn render_tabs_row(&self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line<'static>> = SectionId::ALL
            .iter()
            .map(|id| Line::from(format!(" {} ", id.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.state.active_section.index())
            .style(styles::nav_inactive(self.palette))
            .highlight_style(styles::nav_active(self.palette))
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded_area, buf);
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, styles::bar(self.palette));

        let identity = Rect { height: 1, ..area };
        self.render_identity_row(identity, buf);

        if area.height > 1 {
            let tabs = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            self.render_tabs_row(tabs, buf);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::Settings;
    use folio_core::{Portfolio, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_content(state: &AppState) -> String {
        let palette = Palette::for_theme(state.theme);
        let backend = TestBackend::new(100, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(NavBar::new(state, &palette), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn state() -> AppState {
        AppState::new(Portfolio::sample(), Settings::default())
    }

    #[test]
    fn test_nav_bar_shows_name_and_all_labels() {
        let content = render_to_content(&state());
        assert!(content.contains("John Doe"));
        for id in SectionId::ALL {
            assert!(content.contains(id.label()), "missing label {}", id.label());
        }
    }

    #[test]
    fn test_nav_bar_shows_theme_glyph() {
        let mut s = state();
        assert!(render_to_content(&s).contains('☀'));
        s.theme = Theme::Dark;
        assert!(render_to_content(&s).contains('☾'));
    }

    #[test]
    fn test_active_section_changes_highlight() {
        let palette = Palette::light();
        let mut s = state();

        let render = |st: &AppState| {
            let backend = TestBackend::new(100, 2);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|f| f.render_widget(NavBar::new(st, &palette), f.area()))
                .unwrap();
            terminal.backend().buffer().clone()
        };

        let about_active = render(&s);
        s.active_section = SectionId::Projects;
        let projects_active = render(&s);

        // Same text, different styling on the highlighted label
        assert_ne!(about_active, projects_active);
    }

    #[test]
    fn test_zero_height_area_is_ignored() {
        let s = state();
        let palette = Palette::dark();
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        // Height 1: identity row only, tabs skipped without panicking
        terminal
            .draw(|f| f.render_widget(NavBar::new(&s, &palette), f.area()))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("John Doe"));
    }
}
