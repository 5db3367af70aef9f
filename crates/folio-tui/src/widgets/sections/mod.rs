//! Section renderers for the scrolling document.
//!
//! Each submodule turns one section's content into styled lines. The
//! document builder measures their extents while concatenating them, so
//! renderers only produce lines and never deal in offsets.

pub mod about;
pub mod achievements;
pub mod competitive;
pub mod projects;
pub mod publications;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::{styles, Palette};

/// Minimum useful wrap width; narrower terminals still get output.
const MIN_WRAP: usize = 20;

/// Wrap body text to the given width, one styled line per wrapped row.
pub(crate) fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let wrap_width = usize::from(width).max(MIN_WRAP);
    textwrap::wrap(text, wrap_width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// Section heading followed by a blank line.
pub(crate) fn heading(title: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(title.to_string(), styles::heading(palette))),
        Line::default(),
    ]
}

/// Sub-heading inside a section.
pub(crate) fn subheading(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), styles::subheading(palette)))
}

/// Lay out tag/skill chips, wrapping onto new rows as width runs out.
pub(crate) fn badge_rows(items: &[String], palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let max = usize::from(width).max(MIN_WRAP);
    let mut rows: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for item in items {
        let chip = format!(" {item} ");
        let cost = chip.chars().count() + 1;
        if used + cost > max && !spans.is_empty() {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(chip, styles::badge(palette)));
        spans.push(Span::raw(" "));
        used += cost;
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrapped_honors_width() {
        let lines = wrapped(
            "one two three four five six seven eight nine ten",
            24,
            Style::default(),
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 24);
        }
    }

    #[test]
    fn test_wrapped_narrow_terminal_uses_floor() {
        let lines = wrapped("word another word", 3, Style::default());
        for line in &lines {
            assert!(line.width() <= MIN_WRAP);
        }
    }

    #[test]
    fn test_heading_has_trailing_blank() {
        let p = Palette::dark();
        let lines = heading("About Me", &p);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "About Me");
        assert_eq!(lines[1].to_string(), "");
    }

    #[test]
    fn test_badge_rows_wrap() {
        let p = Palette::light();
        let items = to_strings(&["Machine Learning", "Deep Learning", "Python", "C++"]);
        let rows = badge_rows(&items, &p, 24);
        assert!(rows.len() >= 2, "chips should wrap on a narrow width");

        let all: String = rows.iter().map(|l| l.to_string()).collect();
        for item in &items {
            assert!(all.contains(item.as_str()));
        }
    }

    #[test]
    fn test_badge_rows_empty() {
        let p = Palette::light();
        assert!(badge_rows(&[], &p, 80).is_empty());
    }
}
