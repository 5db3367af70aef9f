//! Publications section.

use ratatui::text::{Line, Span};

use folio_core::Publication;

use super::{badge_rows, heading, wrapped};
use crate::theme::{styles, Palette};

pub fn lines(publications: &[Publication], palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Publications", palette);

    for (i, publication) in publications.iter().enumerate() {
        out.push(Line::from(Span::styled(
            publication.title.clone(),
            styles::entry_title(palette),
        )));
        if !publication.authors.is_empty() {
            out.push(Line::from(vec![
                Span::styled("Authors: ".to_string(), styles::secondary(palette)),
                Span::styled(publication.authors.clone(), styles::secondary(palette)),
            ]));
        }
        if !publication.venue.is_empty() {
            out.push(Line::from(Span::styled(
                format!("Published in {}", publication.venue),
                styles::muted(palette),
            )));
        }
        if !publication.summary.is_empty() {
            out.extend(wrapped(&publication.summary, width, styles::body(palette)));
        }
        out.extend(badge_rows(&publication.tags, palette, width));

        if i + 1 < publications.len() {
            out.push(Line::default());
        }
    }

    out
}
