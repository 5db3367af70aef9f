//! Achievements section: awards and other notable highlights.

use ratatui::text::{Line, Span};

use folio_core::Achievements;

use super::{heading, subheading, wrapped};
use crate::theme::{styles, Palette};

pub fn lines(achievements: &Achievements, palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("Achievements", palette);

    if !achievements.awards.is_empty() {
        out.push(subheading("Awards & Recognitions", palette));
        for award in &achievements.awards {
            let mut spans = vec![
                Span::styled("● ".to_string(), styles::secondary(palette)),
                Span::styled(award.title.clone(), styles::entry_title(palette)),
            ];
            if !award.venue.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", award.venue),
                    styles::muted(palette),
                ));
            }
            out.push(Line::from(spans));
        }
        out.push(Line::default());
    }

    if !achievements.highlights.is_empty() {
        out.push(subheading("Other Notable Achievements", palette));
        for highlight in &achievements.highlights {
            out.push(Line::from(vec![
                Span::styled("• ".to_string(), styles::secondary(palette)),
                Span::styled(highlight.title.clone(), styles::entry_title(palette)),
            ]));
            if !highlight.detail.is_empty() {
                out.extend(wrapped(&highlight.detail, width, styles::secondary(palette)));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Portfolio;

    #[test]
    fn test_achievements_render_awards_and_highlights() {
        let p = Palette::dark();
        let achievements = Portfolio::sample().achievements;
        let text: String = lines(&achievements, &p, 100)
            .iter()
            .map(|l| format!("{l}\n"))
            .collect();

        assert!(text.contains("Achievements"));
        assert!(text.contains("Best Paper Award"));
        assert!(text.contains("CVPR 2022"));
        assert!(text.contains("Other Notable Achievements"));
        assert!(text.contains("Google Research Grant"));
        assert!(text.contains("US Patent #12345678"));
    }
}
