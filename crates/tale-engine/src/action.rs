//! Location-scoped actions.

use crate::error::EngineResult;
use crate::game::Game;

/// Something the player can do at a location ("use terminal").
///
/// Handlers get full access to the game: they may print, prompt, change
/// flags and inventory, or move the player. The returned boolean is the
/// command's success indicator.
///
/// Any `Fn(&mut Game) -> EngineResult<bool>` is an action, so scenes can be
/// written as plain functions.
pub trait Action {
    /// Run the action.
    fn run(&self, game: &mut Game) -> EngineResult<bool>;
}

impl<F> Action for F
where
    F: Fn(&mut Game) -> EngineResult<bool>,
{
    fn run(&self, game: &mut Game) -> EngineResult<bool> {
        self(game)
    }
}
