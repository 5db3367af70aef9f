//! Semantic style builder functions.
//!
//! Widgets never pick colors directly; they ask for a role and get a
//! `Style` for the current palette.

use ratatui::style::{Modifier, Style};

use super::Palette;

/// Base style for the scrolling document body.
pub fn body(p: &Palette) -> Style {
    Style::default().fg(p.text_primary).bg(p.bg)
}

/// Header and footer bar background.
pub fn bar(p: &Palette) -> Style {
    Style::default().fg(p.text_primary).bg(p.surface)
}

/// The person's name in the masthead and nav bar.
pub fn identity(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .bg(p.surface)
        .add_modifier(Modifier::BOLD)
}

/// Section heading inside the document.
pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Sub-heading inside a section (e.g. "Education", "Skills").
pub fn subheading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

/// Entry title (publication, project, contest).
pub fn entry_title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

/// Secondary text (authors, institutions, placements).
pub fn secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

/// Muted text (venues, years, hints).
pub fn muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

/// Skill/tag chip.
pub fn badge(p: &Palette) -> Style {
    Style::default().fg(p.badge_fg).bg(p.badge_bg)
}

/// Active navigation label.
pub fn nav_active(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .bg(p.surface)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Inactive navigation label.
pub fn nav_inactive(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary).bg(p.surface)
}

/// Key hint in the footer (the key itself).
pub fn key_hint(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .bg(p.surface)
        .add_modifier(Modifier::BOLD)
}

/// Menu overlay border.
pub fn menu_border(p: &Palette) -> Style {
    Style::default().fg(p.border_active).bg(p.surface)
}

/// Highlighted menu row.
pub fn menu_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.bg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_styles_are_distinct() {
        let p = Palette::dark();
        assert_ne!(nav_active(&p), nav_inactive(&p));
    }

    #[test]
    fn test_active_label_is_emphasized() {
        let p = Palette::light();
        let style = nav_active(&p);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
