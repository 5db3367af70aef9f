//! Section identity and scroll-position tracking.
//!
//! The navigation surface is a fixed, ordered list of five sections.
//! Which one is "active" is derived from the viewport scroll offset by
//! [`active_section`], a pure function over measured [`SectionSpan`]s so
//! it can be unit tested without any terminal runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of one navigable content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Publications,
    Projects,
    Competitive,
    Achievements,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Publications,
        SectionId::Projects,
        SectionId::Competitive,
        SectionId::Achievements,
    ];

    /// Stable identifier used in content files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Publications => "publications",
            SectionId::Projects => "projects",
            SectionId::Competitive => "competitive",
            SectionId::Achievements => "achievements",
        }
    }

    /// Display label for the navigation bar (identifier capitalized).
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Publications => "Publications",
            SectionId::Projects => "Projects",
            SectionId::Competitive => "Competitive",
            SectionId::Achievements => "Achievements",
        }
    }

    /// Position of this section in document order (0-based).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section at a document-order position, if in range.
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Next section in document order, wrapping at the end.
    pub fn next(&self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in document order, wrapping at the start.
    pub fn prev(&self) -> SectionId {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| Error::content_invalid(format!("unknown section id: {s:?}")))
    }
}

/// A section's measured vertical extent in the rendered document.
///
/// `top` and `height` come from the layout at render time (never
/// pre-declared); spans are re-measured on every frame so resizes and
/// re-wraps are reflected immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    /// First document line of the section (0-based).
    pub top: usize,
    /// Number of document lines the section occupies.
    pub height: usize,
}

impl SectionSpan {
    pub fn new(id: SectionId, top: usize, height: usize) -> Self {
        Self { id, top, height }
    }

    /// Whether `line` falls within `[top, top + height)`.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.top && line < self.top + self.height
    }
}

/// Determine which section is in view at a given scroll offset.
///
/// The probe line is `offset + header_offset`: the first content line
/// not obscured by the pinned navigation header, plus a margin so a
/// section becomes active slightly before its heading reaches the top.
/// Spans are scanned in slice (document) order and the first containing
/// span wins, so overlaps resolve deterministically.
///
/// Returns `None` when the probe matches no span: above the first
/// section, inside a gap, or before any layout has been measured.
/// Callers are expected to keep their previous value in that case
/// rather than resetting to some "no section" state.
pub fn active_section(
    offset: usize,
    header_offset: usize,
    spans: &[SectionSpan],
) -> Option<SectionId> {
    let probe = offset + header_offset;
    spans.iter().find(|span| span.contains(probe)).map(|s| s.id)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
