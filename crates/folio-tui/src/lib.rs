//! folio-tui - Terminal UI for folio
//!
//! This crate provides the ratatui-based terminal interface: theme
//! palettes, the document builder with layout measurement, the nav bar
//! and menu widgets, event polling, and the main run loop driving the
//! update function from folio-app.

pub mod document;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
