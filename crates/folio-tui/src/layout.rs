//! Screen layout: pinned header, scrolling body, footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the persistently visible navigation header.
pub const HEADER_ROWS: u16 = 2;

/// Height of the footer hint bar.
pub const FOOTER_ROWS: u16 = 1;

/// The three fixed screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the terminal area into header, body, and footer.
pub fn compute(area: Rect) -> AppLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(FOOTER_ROWS),
    ])
    .areas(area);

    AppLayout {
        header,
        body,
        footer,
    }
}
