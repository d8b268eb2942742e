//! Core types for Tale: story state, flags, location identifiers, and saves.
//!
//! This crate holds the data a playthrough accumulates and knows how to
//! persist it. It has no notion of terminals or turn loops; those live in
//! `tale-engine`.

/// Error types used throughout the crate.
pub mod error;
/// Dynamically typed story flag values.
pub mod flag;
/// Location identifiers.
pub mod location;
/// Save records and their JSON file format.
pub mod save;
/// Player inventory, story flags, and position.
pub mod state;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export flag values.
pub use flag::FlagValue;
/// Re-export location identifiers.
pub use location::LocationId;
/// Re-export save records.
pub use save::{DEFAULT_SAVE_PATH, SaveData};
/// Re-export story state.
pub use state::{StoryState, relationship_key};
