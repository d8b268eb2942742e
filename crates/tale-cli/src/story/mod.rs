//! Moral Protocol: a short story about a Nexus Corp employee who finds out
//! what the company's "humanitarian AI" is really for.

mod scenes;

use tale_core::LocationId;
use tale_engine::{EasterEgg, EngineResult, Game, Story, WorldGraph};

/// Number of easter eggs hidden in the story.
const EASTER_EGG_COUNT: usize = 2;

/// The Moral Protocol story.
pub struct MoralProtocol;

impl Story for MoralProtocol {
    fn title(&self) -> &str {
        "Moral Protocol"
    }

    fn build_world(&self, world: &mut WorldGraph) {
        scenes::setup_locations(world);
    }

    fn start_location(&self) -> LocationId {
        LocationId::from(scenes::START)
    }

    fn intro(&self, game: &mut Game) -> EngineResult<()> {
        game.say("The year is 2052. Megacorporations control most aspects of daily life.")?;
        game.say(
            "You work for Nexus Corp, a leading technology company developing \
             'humanitarian AI systems'...",
        )?;
        game.say("At least that's what you've been told.")
    }

    fn easter_eggs(&self) -> Vec<EasterEgg> {
        vec![
            EasterEgg::new(
                "xyzzy",
                "A hollow voice says: \"Nexus Corp does not recognise that command.\"",
            )
            .with_flag("found_xyzzy"),
            EasterEgg::new(
                "open the pod bay doors",
                "The ceiling speaker crackles: \"I'm sorry. I'm afraid I can't do that.\"",
            )
            .with_flag("found_pod_bay"),
        ]
    }

    fn outro(&self, game: &mut Game) -> EngineResult<()> {
        let name = game.state().player_name.clone();
        if name.is_empty() {
            game.say("Thank you for playing Moral Protocol!")?;
        } else {
            game.say(&format!("Thank you for playing Moral Protocol, {name}!"))?;
        }
        let found = game.state().easter_eggs_found;
        game.say(&format!("Easter eggs found: {found}/{EASTER_EGG_COUNT}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tale_engine::{EngineConfig, ScriptedInput, Transcript};

    #[test]
    fn world_has_no_broken_links() {
        let mut world = WorldGraph::new();
        MoralProtocol.build_world(&mut world);
        assert!(world.contains(&MoralProtocol.start_location()));
        assert!(world.dangling_connections().is_empty());
        assert_eq!(world.len(), 4);
    }

    #[test]
    fn egg_count_matches_outro() {
        assert_eq!(MoralProtocol.easter_eggs().len(), EASTER_EGG_COUNT);
    }

    #[test]
    fn short_playthrough() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new(["Ada", "north", "xyzzy", "", "quit", "1"]),
        );
        game.play(&MoralProtocol).unwrap();

        assert!(transcript.contains("The year is 2052."));
        assert!(transcript.contains("Hallway"));
        assert!(transcript.contains("Nexus Corp does not recognise that command."));
        assert!(transcript.contains("Thank you for playing Moral Protocol, Ada!"));
        assert!(transcript.contains("Easter eggs found: 1/2"));
        assert!(game.state().check_flag("found_xyzzy"));
    }

    #[test]
    fn repeated_easter_egg_is_counted_once() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new(["Ada", "xyzzy", "", "xyzzy", "xyzzy", "quit", "1"]),
        );
        game.play(&MoralProtocol).unwrap();

        assert_eq!(game.state().easter_eggs_found, 1);
        assert_eq!(transcript.count("=== EASTER EGG FOUND ==="), 1);
        assert!(transcript.contains("Easter eggs found: 1/2"));
    }
}
