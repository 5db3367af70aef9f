//! Color palettes for the light and dark themes.

use ratatui::style::Color;

use folio_core::Theme;

/// Semantic colors for one display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    /// Page background
    pub bg: Color,
    /// Header/footer and overlay backgrounds
    pub surface: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Badges (skill/tag chips) ---
    pub badge_fg: Color,
    pub badge_bg: Color,
}

impl Palette {
    /// Dark palette.
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(10, 12, 16),
            surface: Color::Rgb(18, 21, 28),
            border: Color::Rgb(45, 51, 59),
            border_active: Color::Rgb(88, 166, 255),
            accent: Color::Rgb(88, 166, 255),
            text_primary: Color::Rgb(201, 209, 217),
            text_secondary: Color::Rgb(125, 133, 144),
            text_muted: Color::Rgb(88, 96, 105),
            badge_fg: Color::Rgb(165, 202, 255),
            badge_bg: Color::Rgb(33, 44, 62),
        }
    }

    /// Light palette.
    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 249),
            surface: Color::Rgb(240, 240, 237),
            border: Color::Rgb(204, 206, 210),
            border_active: Color::Rgb(9, 105, 218),
            accent: Color::Rgb(9, 105, 218),
            text_primary: Color::Rgb(31, 35, 40),
            text_secondary: Color::Rgb(89, 99, 110),
            text_muted: Color::Rgb(140, 149, 159),
            badge_fg: Color::Rgb(9, 105, 218),
            badge_bg: Color::Rgb(221, 232, 248),
        }
    }

    /// Palette for a theme value.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Glyph shown in the nav bar for the CURRENT theme.
    pub fn theme_glyph(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::light(), Palette::dark());
    }

    #[test]
    fn test_for_theme_selects_matching_palette() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
    }

    #[test]
    fn test_theme_glyphs() {
        assert_eq!(Palette::theme_glyph(Theme::Light), "☀");
        assert_eq!(Palette::theme_glyph(Theme::Dark), "☾");
    }
}
