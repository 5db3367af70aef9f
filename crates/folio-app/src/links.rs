//! Outbound link targets.
//!
//! The page carries a fixed set of outbound links (contact, profiles,
//! CV). They are inert data; opening one is a side effect performed by
//! the event loop. A link whose target is absent resolves to `None` and
//! its shortcut silently does nothing.

use folio_core::Links;

/// The fixed outbound link slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    GitHub,
    LinkedIn,
    Scholar,
    /// The CV document, opened in the system viewer.
    Cv,
}

impl LinkKind {
    /// Short label for the footer hint line.
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Email => "email",
            LinkKind::GitHub => "github",
            LinkKind::LinkedIn => "linkedin",
            LinkKind::Scholar => "scholar",
            LinkKind::Cv => "cv",
        }
    }

    /// Resolve this slot against the page's link targets.
    pub fn url(&self, links: &Links) -> Option<String> {
        let raw = match self {
            LinkKind::Email => {
                if links.email.is_empty() {
                    return None;
                }
                return Some(format!("mailto:{}", links.email));
            }
            LinkKind::GitHub => &links.github,
            LinkKind::LinkedIn => &links.linkedin,
            LinkKind::Scholar => &links.scholar,
            LinkKind::Cv => &links.cv,
        };
        if raw.is_empty() {
            None
        } else {
            Some(raw.clone())
        }
    }
}
