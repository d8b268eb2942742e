//! Bounded-attempt question and answer challenges.

use crate::error::EngineResult;
use crate::game::Game;
use crate::resolver::normalize;

/// Attempts a player gets before a puzzle counts as failed.
pub const MAX_ATTEMPTS: u32 = 3;

/// A question with a single correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The question shown to the player.
    pub question: String,
    /// The accepted answer, compared case-insensitively.
    pub answer: String,
    /// Shown once, before the first attempt.
    pub hint: Option<String>,
    /// Shown after each wrong answer that still leaves attempts.
    pub incorrect_message: String,
}

impl Puzzle {
    /// Create a puzzle without a hint.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            hint: None,
            incorrect_message: "That's not correct.".to_string(),
        }
    }

    /// Set the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the message shown after a wrong answer.
    pub fn with_incorrect_message(mut self, message: impl Into<String>) -> Self {
        self.incorrect_message = message.into();
        self
    }

    /// Whether `attempt` is the answer, ignoring case and surrounding space.
    pub fn is_correct(&self, attempt: &str) -> bool {
        normalize(attempt) == normalize(&self.answer)
    }

    /// Ask the question until it is answered or the attempts run out.
    pub fn run(&self, game: &mut Game) -> EngineResult<bool> {
        game.say(&self.question)?;
        if let Some(hint) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            game.say(&format!("Hint: {hint}"))?;
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let reply = game.read_line("> ")?;
            if self.is_correct(&reply) {
                game.say("Correct!")?;
                return Ok(true);
            }

            let remaining = MAX_ATTEMPTS - attempt;
            if remaining > 0 {
                game.say(&self.incorrect_message)?;
                let noun = if remaining == 1 { "attempt" } else { "attempts" };
                game.say(&format!("You have {remaining} {noun} remaining."))?;
            } else {
                game.say("You've run out of attempts.")?;
            }
        }
        Ok(false)
    }
}
