//! About section: biography, education, skills.

use ratatui::text::{Line, Span};

use folio_core::About;

use super::{badge_rows, heading, subheading, wrapped};
use crate::theme::{styles, Palette};

pub fn lines(about: &About, palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let mut out = heading("About Me", palette);

    for paragraph in &about.paragraphs {
        out.extend(wrapped(paragraph, width, styles::body(palette)));
        out.push(Line::default());
    }

    if !about.education.is_empty() {
        out.push(subheading("Education", palette));
        for entry in &about.education {
            out.push(Line::from(Span::styled(
                entry.degree.clone(),
                styles::entry_title(palette),
            )));
            let place = if entry.years.is_empty() {
                entry.institution.clone()
            } else {
                format!("{}, {}", entry.institution, entry.years)
            };
            out.push(Line::from(Span::styled(place, styles::muted(palette))));
        }
        out.push(Line::default());
    }

    if !about.skills.is_empty() {
        out.push(subheading("Skills", palette));
        out.extend(badge_rows(&about.skills, palette, width));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Portfolio;

    #[test]
    fn test_about_renders_all_blocks() {
        let p = Palette::dark();
        let about = Portfolio::sample().about;
        let text: String = lines(&about, &p, 80)
            .iter()
            .map(|l| format!("{l}\n"))
            .collect();

        assert!(text.contains("About Me"));
        assert!(text.contains("research scientist"));
        assert!(text.contains("Education"));
        assert!(text.contains("Stanford University, 2018-2022"));
        assert!(text.contains("Skills"));
        assert!(text.contains("PyTorch"));
    }

    #[test]
    fn test_empty_about_is_just_heading() {
        let p = Palette::light();
        let out = lines(&About::default(), &p, 80);
        assert_eq!(out.len(), 2);
    }
}
