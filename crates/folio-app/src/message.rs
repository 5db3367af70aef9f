//! Message types for the application (TEA pattern)

use folio_core::SectionId;

use crate::input_key::InputKey;
use crate::links::LinkKind;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (scroll animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the document up n lines
    ScrollUp(usize),
    /// Scroll the document down n lines
    ScrollDown(usize),
    /// Scroll to the top of the document
    ScrollToTop,
    /// Scroll to the bottom of the document
    ScrollToBottom,
    /// Page up
    PageUp,
    /// Page down
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Jump to a section (animated scroll; closes the menu)
    SelectSection(SectionId),
    /// Jump to the next section in document order
    NextSection,
    /// Jump to the previous section in document order
    PrevSection,
    /// Open/close the navigation menu
    ToggleMenu,
    /// Close the navigation menu (no-op when closed)
    CloseMenu,
    /// Move the menu cursor up
    MenuUp,
    /// Move the menu cursor down
    MenuDown,
    /// Select the entry under the menu cursor
    MenuSelect,

    // ─────────────────────────────────────────────────────────
    // Theme & Links
    // ─────────────────────────────────────────────────────────
    /// Flip the display theme
    ToggleTheme,
    /// Open an outbound link in the system handler
    OpenLink(LinkKind),
}
