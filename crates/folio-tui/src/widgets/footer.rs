//! Footer hint bar: key bindings and outbound link shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::AppState;

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.menu_open {
            vec![
                ("j/k", "move"),
                ("enter", "go"),
                ("esc", "close"),
                ("t", "theme"),
                ("q", "quit"),
            ]
        } else {
            vec![
                ("j/k", "scroll"),
                ("1-5", "jump"),
                ("m", "menu"),
                ("t", "theme"),
                ("e/h/l/s/c", "links"),
                ("q", "quit"),
            ]
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, styles::bar(self.palette));

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(key, styles::key_hint(self.palette)));
            spans.push(Span::styled(
                format!(" {label}  "),
                styles::nav_inactive(self.palette),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        // Active section marker on the right
        let marker = Line::from(vec![
            Span::styled("▸ ", styles::key_hint(self.palette)),
            Span::styled(
                format!("{} ", self.state.active_section.label()),
                styles::nav_inactive(self.palette),
            ),
        ]);
        Paragraph::new(marker).right_aligned().render(area, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::Settings;
    use folio_core::{Portfolio, SectionId};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_content(state: &AppState) -> String {
        let palette = Palette::dark();
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(Footer::new(state, &palette), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_footer_shows_hints_and_active_section() {
        let state = AppState::new(Portfolio::sample(), Settings::default());
        let content = render_to_content(&state);
        assert!(content.contains("scroll"));
        assert!(content.contains("menu"));
        assert!(content.contains("links"));
        assert!(content.contains("▸ About"));
    }

    #[test]
    fn test_footer_switches_hints_when_menu_open() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        state.open_menu();
        let content = render_to_content(&state);
        assert!(content.contains("close"));
        assert!(!content.contains("links"));
    }

    #[test]
    fn test_footer_tracks_active_section() {
        let mut state = AppState::new(Portfolio::sample(), Settings::default());
        state.active_section = SectionId::Competitive;
        let content = render_to_content(&state);
        assert!(content.contains("▸ Competitive"));
    }
}
