//! Interactive fiction engine for Tale.
//!
//! A story registers locations in a [`WorldGraph`], each with exits and
//! named actions. The [`Game`] reads one line per turn and resolves it
//! against the current location: exits first, then actions, then the
//! `inventory` and `help` panels. `quit`, `save` and `load` are handled by
//! the turn loop itself. Puzzles and easter eggs are small reusable scene
//! building blocks.
//!
//! Text goes through a [`DisplaySurface`] and input comes from a
//! [`LineSource`], so the same story runs on a terminal ([`Console`],
//! [`StdinSource`]) or under test ([`Transcript`], [`ScriptedInput`]).

/// Location-scoped action handlers.
pub mod action;
/// Session configuration.
pub mod config;
/// Hidden trigger phrases.
pub mod easter_egg;
/// Error types for the fiction engine.
pub mod error;
/// The running game and its turn loop.
pub mod game;
/// Display surfaces and input sources.
pub mod io;
/// Bounded-attempt puzzles.
pub mod puzzle;
/// Command resolution.
pub mod resolver;
/// Story hooks.
pub mod story;
/// Locations and the graph that connects them.
pub mod world;

pub use action::Action;
pub use config::EngineConfig;
pub use easter_egg::EasterEgg;
pub use error::{EngineError, EngineResult};
pub use game::Game;
pub use io::{Console, DisplaySurface, LineSource, ScriptedInput, StdinSource, Transcript};
pub use puzzle::Puzzle;
pub use resolver::Outcome;
pub use story::Story;
pub use world::{Location, WorldGraph};
