//! Competitive programming section: contest results and judge profiles.

use ratatui::text::{Line, Span};

use folio_core::Competitive;

use super::{heading, subheading};
use crate::theme::{styles, Palette};

pub fn lines(competitive: &Competitive, palette: &Palette, _width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Competitive Programming", palette);

    if !competitive.results.is_empty() {
        out.push(subheading("Contest Achievements", palette));
        for result in &competitive.results {
            out.push(Line::from(Span::styled(
                result.contest.clone(),
                styles::entry_title(palette),
            )));
            if !result.placement.is_empty() {
                out.push(Line::from(Span::styled(
                    result.placement.clone(),
                    styles::secondary(palette),
                )));
            }
        }
        out.push(Line::default());
    }

    if !competitive.profiles.is_empty() {
        out.push(subheading("Profiles & Rankings", palette));
        for profile in &competitive.profiles {
            let mut spans = vec![Span::styled(
                profile.site.clone(),
                styles::entry_title(palette),
            )];
            if !profile.handle.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("@{}", profile.handle),
                    styles::secondary(palette),
                ));
            }
            if !profile.badge.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!(" {} ", profile.badge),
                    styles::badge(palette),
                ));
            }
            out.push(Line::from(spans));
        }
    }

    out
}
