//! Document assembly and layout measurement.
//!
//! Flattens the masthead and the five sections into one list of styled
//! lines, measuring each section's extent along the way. The document
//! is rebuilt from scratch on every frame so the measured spans always
//! reflect the current width and content; nothing is cached.

use ratatui::text::{Line, Span};

use folio_core::{Portfolio, SectionId, SectionSpan};

use crate::theme::{styles, Palette};
use crate::widgets::sections;

/// The fully laid-out page: lines to render plus measured section spans.
#[derive(Debug)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub spans: Vec<SectionSpan>,
}

impl Document {
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}

/// Build the document at the given body width.
pub fn build(portfolio: &Portfolio, palette: &Palette, width: u16) -> Document {
    let mut lines = masthead(portfolio, palette);
    let mut spans = Vec::with_capacity(SectionId::ALL.len());

    for id in SectionId::ALL {
        let top = lines.len();
        lines.extend(section_lines(id, portfolio, palette, width));
        let height = lines.len() - top;
        spans.push(SectionSpan::new(id, top, height));

        // Section margin: one blank line, deliberately outside the span
        lines.push(Line::default());
    }

    Document { lines, spans }
}

fn section_lines(
    id: SectionId,
    portfolio: &Portfolio,
    palette: &Palette,
    width: u16,
) -> Vec<Line<'static>> {
    match id {
        SectionId::About => sections::about::lines(&portfolio.about, palette, width),
        SectionId::Publications => {
            sections::publications::lines(&portfolio.publications, palette, width)
        }
        SectionId::Projects => sections::projects::lines(&portfolio.projects, palette, width),
        SectionId::Competitive => {
            sections::competitive::lines(&portfolio.competitive, palette, width)
        }
        SectionId::Achievements => {
            sections::achievements::lines(&portfolio.achievements, palette, width)
        }
    }
}

/// Profile block above the first section. Not a navigable section, so
/// the first span starts below it.
fn masthead(portfolio: &Portfolio, palette: &Palette) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut out = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", profile.initials()),
            styles::badge(palette),
        ),
        Span::raw(" "),
        Span::styled(profile.name.clone(), styles::entry_title(palette)),
    ])];

    if !profile.tagline.is_empty() {
        out.push(Line::from(Span::styled(
            profile.tagline.clone(),
            styles::secondary(palette),
        )));
    }
    if !portfolio.links.email.is_empty() {
        out.push(Line::from(Span::styled(
            format!("✉ {}", portfolio.links.email),
            styles::muted(palette),
        )));
    }
    out.push(Line::default());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Document {
        build(&Portfolio::sample(), &Palette::dark(), 80)
    }

    #[test]
    fn test_spans_cover_all_sections_in_order() {
        let doc = sample_doc();
        let ids: Vec<SectionId> = doc.spans.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_sections_are_separated_by_one_line_gaps() {
        let doc = sample_doc();
        for pair in doc.spans.windows(2) {
            assert_eq!(
                pair[1].top,
                pair[0].top + pair[0].height + 1,
                "{} should start one gap line after {}",
                pair[1].id,
                pair[0].id
            );
        }
    }

    #[test]
    fn test_first_section_starts_below_masthead() {
        let doc = sample_doc();
        let first = &doc.spans[0];
        assert_eq!(first.id, SectionId::About);
        assert!(first.top >= 3, "masthead occupies the top of the document");
    }

    #[test]
    fn test_every_section_has_content() {
        let doc = sample_doc();
        for span in &doc.spans {
            assert!(span.height > 2, "{} should render content", span.id);
        }
    }

    #[test]
    fn test_document_ends_after_last_span() {
        let doc = sample_doc();
        let last = doc.spans.last().unwrap();
        assert_eq!(doc.total_lines(), last.top + last.height + 1);
    }

    #[test]
    fn test_narrow_width_grows_wrapped_sections() {
        let wide = build(&Portfolio::sample(), &Palette::dark(), 120);
        let narrow = build(&Portfolio::sample(), &Palette::dark(), 40);
        assert!(
            narrow.total_lines() > wide.total_lines(),
            "re-wrapping at a narrower width must produce more lines"
        );
    }

    #[test]
    fn test_masthead_shows_identity() {
        let doc = sample_doc();
        let top: String = doc.lines[..4].iter().map(|l| format!("{l}\n")).collect();
        assert!(top.contains("JD"));
        assert!(top.contains("John Doe"));
        assert!(top.contains("Research Scientist & Competitive Programmer"));
        assert!(top.contains("john.doe@example.com"));
    }
}
