//! Configuration for a game session.

use std::path::PathBuf;

use tale_core::DEFAULT_SAVE_PATH;

/// Configuration for a [`Game`](crate::Game).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// File used by the `save` and `load` commands.
    pub save_path: PathBuf,
    /// Prompt shown before each command.
    pub command_prompt: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            command_prompt: "What would you like to do? > ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the save file.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the command prompt.
    pub fn with_command_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.command_prompt = prompt.into();
        self
    }
}
