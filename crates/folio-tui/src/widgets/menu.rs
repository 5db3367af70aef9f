//! Navigation menu overlay.
//!
//! The compact-layout counterpart of the nav tabs: a small panel listing
//! all sections vertically. Opened and closed by explicit key presses;
//! any selection closes it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use folio_app::AppState;
use folio_core::SectionId;

use crate::theme::{styles, Palette};

const MENU_WIDTH: u16 = 22;

pub struct NavMenu<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> NavMenu<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// Panel rect anchored to the top-right of the body area.
    fn panel_rect(&self, body: Rect) -> Rect {
        let height = (SectionId::ALL.len() as u16 + 2).min(body.height);
        let width = MENU_WIDTH.min(body.width);
        Rect {
            x: body.right().saturating_sub(width + 1).max(body.x),
            y: body.y,
            width,
            height,
        }
    }
}

impl Widget for NavMenu<'_> {
    fn render(self, body: Rect, buf: &mut Buffer) {
        if body.height == 0 || body.width == 0 {
            return;
        }
        let panel = self.panel_rect(body);

        Clear.render(panel, buf);
        let block = Block::bordered()
            .title(" Sections ")
            .border_style(styles::menu_border(self.palette))
            .style(styles::bar(self.palette));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let rows: Vec<Line<'static>> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let marker = if *id == self.state.active_section {
                    "● "
                } else {
                    "  "
                };
                let row = format!("{marker}{} {}", i + 1, id.label());
                let style = if i == self.state.menu_cursor {
                    styles::menu_selected(self.palette)
                } else {
                    styles::nav_inactive(self.palette)
                };
                Line::from(Span::styled(row, style))
            })
            .collect();

        Paragraph::new(rows).render(inner, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
