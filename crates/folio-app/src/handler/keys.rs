//! Key event handlers, routed by menu state

use crate::input_key::InputKey;
use crate::links::LinkKind;
use crate::message::Message;
use crate::state::AppState;
use folio_core::SectionId;

/// Convert key events to messages based on whether the menu is open
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.menu_open {
        handle_key_menu(key)
    } else {
        handle_key_normal(key)
    }
}

/// Number row 1-5 maps to sections in document order, in both modes.
fn section_for_digit(c: char) -> Option<Message> {
    let index = c.to_digit(10)? as usize;
    let id = SectionId::from_index(index.checked_sub(1)?)?;
    Some(Message::SelectSection(id))
}

/// Keys while the navigation menu overlay is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('m') => Some(Message::CloseMenu),
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Tab => Some(Message::MenuDown),
        InputKey::BackTab => Some(Message::MenuUp),
        // Selection is resolved against the cursor by the update fn
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Char(c @ '1'..='5') => section_for_digit(c),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys in normal (document) mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp(1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown(1)),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char(c @ '1'..='5') => section_for_digit(c),
        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PrevSection),
        InputKey::Char('m') => Some(Message::ToggleMenu),

        // ─────────────────────────────────────────────────────────
        // Theme & Links
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('e') => Some(Message::OpenLink(LinkKind::Email)),
        InputKey::Char('h') => Some(Message::OpenLink(LinkKind::GitHub)),
        InputKey::Char('l') => Some(Message::OpenLink(LinkKind::LinkedIn)),
        InputKey::Char('s') => Some(Message::OpenLink(LinkKind::Scholar)),
        InputKey::Char('c') => Some(Message::OpenLink(LinkKind::Cv)),

        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
