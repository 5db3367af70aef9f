//! folio-app - Application state and update loop
//!
//! The Model and update function (TEA pattern) for folio, independent of
//! any terminal library. The TUI crate feeds [`message::Message`]s in and
//! performs the [`handler::UpdateAction`]s that come back out.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod links;
pub mod message;
pub mod state;
pub mod viewport;

pub use config::{ConfigThemeStore, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use links::LinkKind;
pub use message::Message;
pub use state::{AppState, Phase, HEADER_PROBE_ROWS, NAV_CLEARANCE_ROWS};
pub use viewport::ViewportState;
