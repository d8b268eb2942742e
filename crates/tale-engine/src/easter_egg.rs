//! Hidden phrases that reward curious players.

use tale_core::StoryState;

use crate::error::EngineResult;
use crate::game::Game;
use crate::resolver::normalize;

/// A secret phrase and what it reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEgg {
    /// The phrase the player has to type, compared case-insensitively.
    pub phrase: String,
    /// Shown when the egg is found.
    pub message: String,
    /// Story flag set when the egg is found.
    pub flag: Option<String>,
}

impl EasterEgg {
    /// Create an egg that sets no flag.
    pub fn new(phrase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            message: message.into(),
            flag: None,
        }
    }

    /// Set a flag when the egg is found.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Whether `input` is the secret phrase.
    pub fn matches(&self, input: &str) -> bool {
        normalize(input) == normalize(&self.phrase)
    }

    /// Whether the egg's flag is already set. Eggs without a flag are never
    /// considered found and can be revealed again.
    pub fn is_found(&self, state: &StoryState) -> bool {
        self.flag.as_deref().is_some_and(|flag| state.check_flag(flag))
    }

    /// Reveal the egg if `input` is the secret phrase and it was not found
    /// before. Returns whether it was revealed.
    pub fn check(&self, game: &mut Game, input: &str) -> EngineResult<bool> {
        if !self.matches(input) || self.is_found(game.state()) {
            return Ok(false);
        }
        self.reveal(game)?;
        Ok(true)
    }

    /// Count the find, show the message, set the flag, and wait for the
    /// player to acknowledge.
    pub fn reveal(&self, game: &mut Game) -> EngineResult<()> {
        game.state_mut().easter_eggs_found += 1;
        tracing::info!(phrase = %self.phrase, "easter egg found");

        game.say("")?;
        game.say("=== EASTER EGG FOUND ===")?;
        game.say(&self.message)?;
        if let Some(flag) = &self.flag {
            game.state_mut().set(flag.clone());
        }
        game.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::io::{ScriptedInput, Transcript};

    fn egg() -> EasterEgg {
        EasterEgg::new("xyzzy", "A hollow voice says: \"Fool.\"").with_flag("said_xyzzy")
    }

    #[test]
    fn matches_secret_phrase_only() {
        let egg = egg();
        assert!(egg.matches("xyzzy"));
        assert!(egg.matches("  XYZZY "));
        assert!(!egg.matches("plugh"));
        assert!(!egg.matches(""));
    }

    #[test]
    fn check_reveals_and_counts() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new([""]),
        );

        assert!(egg().check(&mut game, "XYZZY").unwrap());
        assert_eq!(game.state().easter_eggs_found, 1);
        assert!(game.state().check_flag("said_xyzzy"));
        assert!(transcript.contains("=== EASTER EGG FOUND ==="));
        assert!(transcript.contains("Fool."));
        assert!(transcript.contains("Press Enter to continue..."));
    }

    #[test]
    fn check_reveals_flagged_egg_once() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new([""]),
        );

        assert!(egg().check(&mut game, "xyzzy").unwrap());
        assert!(!egg().check(&mut game, "xyzzy").unwrap());
        assert_eq!(game.state().easter_eggs_found, 1);
        assert_eq!(transcript.count("=== EASTER EGG FOUND ==="), 1);
    }

    #[test]
    fn unflagged_egg_repeats() {
        let mut game = Game::new(
            EngineConfig::default(),
            Transcript::new(),
            ScriptedInput::new(["", ""]),
        );
        let egg = EasterEgg::new("plugh", "A hollow voice.");

        assert!(egg.check(&mut game, "plugh").unwrap());
        assert!(egg.check(&mut game, "plugh").unwrap());
        assert_eq!(game.state().easter_eggs_found, 2);
    }

    #[test]
    fn check_ignores_other_input() {
        let transcript = Transcript::new();
        let mut game = Game::new(
            EngineConfig::default(),
            transcript.clone(),
            ScriptedInput::new(Vec::<String>::new()),
        );

        assert!(!egg().check(&mut game, "north").unwrap());
        assert_eq!(game.state().easter_eggs_found, 0);
        assert!(transcript.lines().is_empty());
    }
}
