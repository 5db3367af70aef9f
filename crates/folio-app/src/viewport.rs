//! Viewport state - scroll position, measured layout, and animated jumps.
//!
//! This module defines the scroll bookkeeping used by both the handler
//! layer (for scroll commands) and the TUI layer (for rendering). Layout
//! figures (`total_lines`, `visible_lines`, section spans) are written
//! during render from fresh measurements; nothing is cached across
//! frames.

use folio_core::SectionSpan;

/// State for document scrolling, including the animated scroll used by
/// navigation selection.
#[derive(Debug, Default)]
pub struct ViewportState {
    /// Current vertical scroll offset from the top of the document
    pub offset: usize,
    /// Total number of document lines (set during render)
    pub total_lines: usize,
    /// Lines visible in the body area (set during render)
    pub visible_lines: usize,
    /// Measured section extents, in document order (set during render)
    pub spans: Vec<SectionSpan>,
    /// Target offset of an in-flight animated jump
    anim_target: Option<usize>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Range of document lines currently on screen (end exclusive).
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_lines).min(self.total_lines);
        (self.offset, end)
    }

    /// Scroll up by n lines. Cancels any in-flight animation.
    pub fn scroll_up(&mut self, n: usize) {
        self.anim_target = None;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines. Cancels any in-flight animation.
    pub fn scroll_down(&mut self, n: usize) {
        self.anim_target = None;
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.anim_target = None;
        self.offset = 0;
    }

    /// Scroll to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.anim_target = None;
        self.offset = self.max_offset();
    }

    /// Page up (viewport height minus two lines of overlap)
    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_up(page.max(1));
    }

    /// Page down (viewport height minus two lines of overlap)
    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_down(page.max(1));
    }

    /// Record fresh layout measurements taken during render.
    ///
    /// Clamps the offset (and any animation target) when the document
    /// shrank, e.g. after a terminal resize re-wrapped the content.
    pub fn update_layout(&mut self, total: usize, visible: usize, spans: Vec<SectionSpan>) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.spans = spans;

        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
        }
        if let Some(target) = self.anim_target {
            if target > max {
                self.anim_target = Some(max);
            }
        }
    }

    /// Begin an animated jump toward `target`.
    pub fn animate_to(&mut self, target: usize) {
        let target = target.min(self.max_offset());
        if target == self.offset {
            self.anim_target = None;
        } else {
            self.anim_target = Some(target);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.anim_target.is_some()
    }

    /// Advance an in-flight animation by one tick.
    ///
    /// Each step covers a third of the remaining distance (at least one
    /// line), so the jump eases out and always terminates. Returns true
    /// when the offset changed.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.anim_target else {
            return false;
        };

        let remaining = target.abs_diff(self.offset);
        let step = (remaining / 3).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.anim_target = None;
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
