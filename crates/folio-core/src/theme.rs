//! Display theme and its persistence seam.
//!
//! The page itself holds no theme state beyond a display mirror: the
//! current value lives in a [`ThemeStore`] collaborator which is also
//! responsible for persisting the choice across runs. Keeping the store
//! behind a trait makes the toggle testable without touching disk.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Two-valued display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Two toggles return the original value.
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::config(format!("unknown theme: {other:?}"))),
        }
    }
}

/// Theme collaborator: owns the current value and its persistence.
pub trait ThemeStore {
    /// Current theme.
    fn theme(&self) -> Theme;

    /// Replace the current theme and persist it.
    fn set_theme(&mut self, theme: Theme);
}

/// Flip the stored theme and return the new value.
pub fn toggle_theme(store: &mut dyn ThemeStore) -> Theme {
    let next = store.theme().toggle();
    store.set_theme(next);
    next
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory store, enough to exercise the toggle contract.
    #[derive(Default)]
    struct MemoryStore {
        current: Theme,
        writes: usize,
    }

    impl ThemeStore for MemoryStore {
        fn theme(&self) -> Theme {
            self.current
        }

        fn set_theme(&mut self, theme: Theme) {
            self.current = theme;
            self.writes += 1;
        }
    }

    #[test]
    fn test_toggle_flips_value() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_toggle_through_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.theme(), Theme::Light);

        assert_eq!(toggle_theme(&mut store), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);

        assert_eq!(toggle_theme(&mut store), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.writes, 2, "every toggle persists");
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
