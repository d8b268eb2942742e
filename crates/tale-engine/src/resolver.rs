//! Command resolution against the current location.
//!
//! Resolution order, first match wins:
//!
//! 1. an exit of the current location (movement),
//! 2. an action bound at the current location,
//! 3. `inventory`,
//! 4. `help`,
//! 5. anything else is not understood.
//!
//! Movement beats actions when a location uses the same word for both.

use std::fmt;
use std::rc::Rc;

use tale_core::LocationId;

use crate::action::Action;
use crate::world::Location;

/// Shows the inventory panel.
pub const INVENTORY_COMMAND: &str = "inventory";
/// Shows the help panel.
pub const HELP_COMMAND: &str = "help";
/// Asks to end the game.
pub const QUIT_COMMAND: &str = "quit";
/// Writes the save file.
pub const SAVE_COMMAND: &str = "save";
/// Reads the save file.
pub const LOAD_COMMAND: &str = "load";

/// What a command token refers to at a given location.
#[derive(Clone)]
pub enum Resolution {
    /// Follow the exit to this location.
    Move(LocationId),
    /// Run this action handler.
    Action(Rc<dyn Action>),
    /// Show the inventory.
    Inventory,
    /// Show the help text.
    Help,
    /// Nothing matched.
    Unknown,
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(id) => f.debug_tuple("Move").field(id).finish(),
            Self::Action(_) => f.write_str("Action(..)"),
            Self::Inventory => f.write_str("Inventory"),
            Self::Help => f.write_str("Help"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// What processing a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player moved here.
    Moved(LocationId),
    /// An action ran and reported this result.
    Acted(bool),
    /// The inventory was shown.
    Inventory,
    /// The help text was shown.
    Help,
    /// The command was not recognised.
    NotUnderstood,
}

impl Outcome {
    /// The command's success indicator.
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Moved(_) | Self::Inventory | Self::Help => true,
            Self::Acted(result) => *result,
            Self::NotUnderstood => false,
        }
    }
}

/// Trim and case-fold raw player input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Decide what `token` means at `location`. `token` should be normalized.
pub fn classify(location: &Location, token: &str) -> Resolution {
    if let Some(destination) = location.destination(token) {
        return Resolution::Move(destination.clone());
    }
    if let Some(handler) = location.handler(token) {
        return Resolution::Action(handler);
    }
    match token {
        INVENTORY_COMMAND => Resolution::Inventory,
        HELP_COMMAND => Resolution::Help,
        _ => Resolution::Unknown,
    }
}
