//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides the section model, the pure
//! active-section computation, the theme type and its persistence seam,
//! the hand-authored content model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`SectionId`] - The fixed, ordered navigation surface
//! - [`SectionSpan`] - A section's measured extent in the rendered document
//! - [`active_section()`] - Pure scroll-offset → section computation
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Two-valued display theme (light/dark)
//! - [`ThemeStore`] - Collaborator owning the value and its persistence
//! - [`toggle_theme()`] - Flip through a store
//!
//! ### Content (`content`)
//! - [`Portfolio`] - The complete hand-authored page, with a built-in
//!   sample and TOML loading
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod section;
pub mod theme;

// Re-export commonly used types at crate root for convenience
pub use content::{
    About, Achievements, Award, Competitive, ContestResult, Education, Highlight, JudgeProfile,
    Links, Portfolio, Profile, Project, Publication,
};
pub use error::{Error, Result, ResultExt};
pub use section::{active_section, SectionId, SectionSpan};
pub use theme::{toggle_theme, Theme, ThemeStore};
