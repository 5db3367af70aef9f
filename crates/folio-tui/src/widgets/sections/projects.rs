//! Projects section.

use ratatui::text::{Line, Span};

use folio_core::Project;

use super::{badge_rows, heading, wrapped};
use crate::theme::{styles, Palette};

pub fn lines(projects: &[Project], palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Projects", palette);

    for (i, project) in projects.iter().enumerate() {
        out.push(Line::from(Span::styled(
            project.title.clone(),
            styles::entry_title(palette),
        )));
        if !project.summary.is_empty() {
            out.extend(wrapped(&project.summary, width, styles::body(palette)));
        }
        out.extend(badge_rows(&project.tags, palette, width));
        if !project.repo.is_empty() {
            out.push(Line::from(Span::styled(
                format!("↗ {}", project.repo),
                styles::muted(palette),
            )));
        }

        if i + 1 < projects.len() {
            out.push(Line::default());
        }
    }

    out
}
