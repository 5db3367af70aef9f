//! Centralized theme system for the two display modes.
//!
//! This module provides:
//! - `palette` - Light and dark color palettes
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
