//! Core types for Ghostwriter Nexus: catalogs, game state, and reactions.
//!
//! This crate defines the data model the game engine runs on. It is
//! independent of any frontend or oracle backend — you can construct the
//! catalogs programmatically or use the built-in content.

/// Brief (level) definitions and the clients that commission them.
pub mod brief;
/// Static content catalogs: levels, fragments, themes.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Message fragments and the three reply slots they fill.
pub mod fragment;
/// Reaction results returned by the oracle and their outcome categories.
pub mod reaction;
/// The mutable game state aggregate and its economy rules.
pub mod state;
/// Cosmetic phone themes and their palettes.
pub mod theme;
/// Tone classification for message fragments.
pub mod tone;

/// Re-export brief types.
pub use brief::{Brief, Client};
/// Re-export catalog types.
pub use catalog::{FragmentCatalog, LevelCatalog, ThemeCatalog};
/// Re-export error types.
pub use error::{GnError, GnResult};
/// Re-export fragment types.
pub use fragment::{Fragment, FragmentSet, Slot};
/// Re-export reaction types.
pub use reaction::{OutcomeCategory, ReactionResult, ReplyMode};
/// Re-export the game state aggregate and theme activation outcome.
pub use state::{GameState, ThemeActivation};
/// Re-export theme types.
pub use theme::{Palette, Theme, ThemeId};
/// Re-export the tone enum.
pub use tone::Tone;
