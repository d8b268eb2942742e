//! Hooks a narrative provides to the engine.

use tale_core::LocationId;

use crate::easter_egg::EasterEgg;
use crate::error::EngineResult;
use crate::game::Game;
use crate::world::WorldGraph;

/// A narrative: its locations plus the words around them.
///
/// [`Game::play`] drives the hooks in order: title banner, [`intro`],
/// name prompt, [`build_world`], [`easter_eggs`], placement at
/// [`start_location`], the turn loop, and finally [`outro`].
///
/// [`intro`]: Story::intro
/// [`build_world`]: Story::build_world
/// [`easter_eggs`]: Story::easter_eggs
/// [`start_location`]: Story::start_location
/// [`outro`]: Story::outro
pub trait Story {
    /// Title shown on the opening banner.
    fn title(&self) -> &str;

    /// Register the story's locations.
    fn build_world(&self, world: &mut WorldGraph);

    /// Where the player starts.
    fn start_location(&self) -> LocationId;

    /// Opening narration, before the player is asked for their name.
    fn intro(&self, _game: &mut Game) -> EngineResult<()> {
        Ok(())
    }

    /// Secret phrases checked on every turn.
    fn easter_eggs(&self) -> Vec<EasterEgg> {
        Vec::new()
    }

    /// Closing words after the game ends.
    fn outro(&self, game: &mut Game) -> EngineResult<()> {
        game.say(&format!("Thank you for playing {}!", self.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::error::EngineError;
    use crate::io::{ScriptedInput, Transcript};
    use crate::world::Location;

    struct TwoRooms;

    impl Story for TwoRooms {
        fn title(&self) -> &str {
            "Two Rooms"
        }

        fn build_world(&self, world: &mut WorldGraph) {
            world.register(Location::new("office", "Your Office", "Quiet.").connect("north", "hallway"));
            world.register(Location::new("hallway", "Hallway", "Bright.").connect("south", "office"));
        }

        fn start_location(&self) -> LocationId {
            LocationId::from("office")
        }

        fn easter_eggs(&self) -> Vec<EasterEgg> {
            vec![EasterEgg::new("xyzzy", "Nothing happens. Or does it?")]
        }
    }

    #[test]
    fn play_from_title_to_outro() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new(["  Ada  ", "north", "xyzzy", "", "quit", "1"]),
        );

        game.play(&TwoRooms).unwrap();

        assert_eq!(game.state().player_name, "Ada");
        assert_eq!(game.state().easter_eggs_found, 1);
        assert_eq!(
            game.state().current_location,
            Some(LocationId::from("hallway"))
        );
        assert!(transcript.contains("Two Rooms"));
        assert!(transcript.contains("GAME OVER"));
        assert!(transcript.contains("Thank you for playing Two Rooms!"));
    }

    #[test]
    fn play_fails_on_unknown_start() {
        struct Lost;
        impl Story for Lost {
            fn title(&self) -> &str {
                "Lost"
            }
            fn build_world(&self, _world: &mut WorldGraph) {}
            fn start_location(&self) -> LocationId {
                LocationId::from("nowhere")
            }
        }

        let mut game = Game::new(
            EngineConfig::default(),
            Transcript::new(),
            ScriptedInput::new(["Ada"]),
        );
        let err = game.play(&Lost).unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }
}
