//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, routed by menu state
//! - `scroll`: Scroll handlers (every one re-syncs the active section)
//! - `nav`: Section jumps and menu handling

pub(crate) mod keys;
pub(crate) mod nav;
pub(crate) mod scroll;
pub(crate) mod update;

use folio_core::Theme;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open a URL (or mailto: target) in the system handler
    OpenUrl(String),

    /// Persist the flipped theme via the theme store
    PersistTheme(Theme),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
