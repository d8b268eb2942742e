//! A running game: world, story state, and the turn loop.

use std::path::Path;

use tale_core::{FlagValue, LocationId, SaveData, StoryState, relationship_key};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::easter_egg::EasterEgg;
use crate::error::{EngineError, EngineResult};
use crate::io::{DisplaySurface, LineSource};
use crate::resolver::{
    HELP_COMMAND, INVENTORY_COMMAND, LOAD_COMMAND, Outcome, QUIT_COMMAND, Resolution,
    SAVE_COMMAND, classify, normalize,
};
use crate::story::Story;
use crate::world::{Location, WorldGraph};

const ENTER_PROMPT: &str = "Press Enter to continue...";
const NOT_A_NUMBER: &str = "Please enter a number or a valid command.";
const OUT_OF_RANGE: &str = "Invalid option. Please try again.";

/// One playthrough of a story.
///
/// Owns the world graph, the story state, and the display and input the
/// player talks through. Content code (action handlers, story hooks) gets a
/// `&mut Game` and uses its methods to print, prompt, and change state.
pub struct Game {
    config: EngineConfig,
    world: WorldGraph,
    state: StoryState,
    easter_eggs: Vec<EasterEgg>,
    display: Box<dyn DisplaySurface>,
    input: Box<dyn LineSource>,
    /// Set when the current location was drawn during this turn.
    location_shown: bool,
}

impl Game {
    /// Create a game with an empty world and state.
    pub fn new(
        config: EngineConfig,
        display: impl DisplaySurface + 'static,
        input: impl LineSource + 'static,
    ) -> Self {
        Self {
            config,
            world: WorldGraph::new(),
            state: StoryState::new(),
            easter_eggs: Vec::new(),
            display: Box::new(display),
            input: Box::new(input),
            location_shown: false,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The world graph.
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// Mutable access to the world graph, for setup.
    pub fn world_mut(&mut self) -> &mut WorldGraph {
        &mut self.world
    }

    /// The story state.
    pub fn state(&self) -> &StoryState {
        &self.state
    }

    /// Mutable access to the story state.
    pub fn state_mut(&mut self) -> &mut StoryState {
        &mut self.state
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// End the game after the current turn.
    pub fn end(&mut self) {
        self.state.game_over = true;
    }

    /// Register a secret phrase checked on every turn.
    pub fn add_easter_egg(&mut self, egg: EasterEgg) {
        self.easter_eggs.push(egg);
    }

    /// Registered easter eggs.
    pub fn easter_eggs(&self) -> &[EasterEgg] {
        &self.easter_eggs
    }

    // -----------------------------------------------------------------------
    // Display and input
    // -----------------------------------------------------------------------

    /// Narrate a line of text.
    pub fn say(&mut self, text: &str) -> EngineResult<()> {
        Ok(self.display.narrate(text)?)
    }

    /// Print a line of text without pacing.
    pub fn print(&mut self, text: &str) -> EngineResult<()> {
        Ok(self.display.line(text)?)
    }

    /// Clear the screen and draw a title banner.
    pub fn header(&mut self, title: &str) -> EngineResult<()> {
        Ok(self.display.header(title)?)
    }

    /// Show `prompt` and read the player's next line as typed.
    pub fn read_line(&mut self, prompt: &str) -> EngineResult<String> {
        self.display.prompt(prompt)?;
        self.input.read_line()?.ok_or(EngineError::InputClosed)
    }

    /// Show `prompt` and read a trimmed line of free text.
    pub fn ask(&mut self, prompt: &str) -> EngineResult<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Wait until the player presses Enter.
    pub fn pause(&mut self) -> EngineResult<()> {
        self.say("")?;
        self.say(ENTER_PROMPT)?;
        self.read_line("")?;
        Ok(())
    }

    /// Ask the player to pick one of `options` by number. Returns the
    /// 1-based index of the chosen option.
    ///
    /// Invalid answers are reported and the question is asked again. The
    /// `inventory` and `help` panels stay available while choosing.
    pub fn choose(&mut self, prompt: &str, options: &[&str]) -> EngineResult<usize> {
        loop {
            self.say(prompt)?;
            for (i, option) in options.iter().enumerate() {
                self.print(&format!("{}. {option}", i + 1))?;
            }

            let reply = self.read_line("> ")?;
            match parse_choice(&reply, options.len()) {
                Ok(choice) => return Ok(choice),
                Err(err) => match normalize(&reply).as_str() {
                    INVENTORY_COMMAND => self.show_inventory()?,
                    HELP_COMMAND => self.show_help()?,
                    _ => self.print(&err.to_string())?,
                },
            }
        }
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Give the player an item.
    pub fn add_to_inventory(&mut self, item: &str) -> EngineResult<()> {
        self.state.add_item(item);
        self.say(&format!("Added to inventory: {item}"))
    }

    /// Take an item from the player. Returns whether they had it.
    pub fn remove_from_inventory(&mut self, item: &str) -> EngineResult<bool> {
        if !self.state.remove_item(item) {
            return Ok(false);
        }
        self.say(&format!("Removed from inventory: {item}"))?;
        Ok(true)
    }

    /// Show the inventory panel.
    pub fn show_inventory(&mut self) -> EngineResult<()> {
        self.header("INVENTORY")?;
        if self.state.inventory().is_empty() {
            self.say("Your inventory is empty.")?;
        } else {
            self.say("Inventory:")?;
            let lines: Vec<String> = self
                .state
                .inventory()
                .iter()
                .map(|item| format!("- {item}"))
                .collect();
            for line in &lines {
                self.print(line)?;
            }
        }
        self.pause()
    }

    /// Show the help panel.
    pub fn show_help(&mut self) -> EngineResult<()> {
        self.header("HELP")?;
        self.say("Available commands:")?;
        for line in [
            "- Type a direction or an action listed for your location",
            "- Enter the number of your chosen option when asked",
            "- Type 'inventory' to check your items",
            "- Type 'help' to see this information",
            "- Type 'save' or 'load' to keep or restore your progress",
            "- Type 'quit' to leave the game",
            "- Some puzzles may have special commands - experiment!",
        ] {
            self.print(line)?;
        }
        self.pause()
    }

    // -----------------------------------------------------------------------
    // Flags
    // -----------------------------------------------------------------------

    /// Overwrite a story flag.
    pub fn set_flag(&mut self, key: &str, value: impl Into<FlagValue>) {
        self.state.set_flag(key, value);
    }

    /// Whether a story flag is present and truthy.
    pub fn check_flag(&self, key: &str) -> bool {
        self.state.check_flag(key)
    }

    /// Add `amount` to a counter flag (starting at 0). Returns the new value.
    pub fn increment_flag(&mut self, key: &str, amount: i64) -> EngineResult<i64> {
        Ok(self.state.increment_flag(key, amount, 0)?)
    }

    /// Adjust the relationship score with `character` and tell the player
    /// which way it went. Returns the new score.
    pub fn relationship_change(&mut self, character: &str, amount: i64) -> EngineResult<i64> {
        let score = self
            .state
            .increment_flag(&relationship_key(character), amount, 0)?;
        if amount > 0 {
            self.say(&format!("Your relationship with {character} has improved."))?;
        } else if amount < 0 {
            self.say(&format!("Your relationship with {character} has worsened."))?;
        }
        Ok(score)
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// The location the player is at.
    pub fn current_location(&self) -> EngineResult<&Location> {
        let id = self
            .state
            .current_location
            .as_ref()
            .ok_or(EngineError::NoCurrentLocation)?;
        self.world.resolve(id)
    }

    /// Move the player to `id` and show it.
    pub fn go_to(&mut self, id: impl Into<LocationId>) -> EngineResult<()> {
        let id = id.into();
        self.world.resolve(&id)?;
        debug!(to = %id, "moving player");
        self.state.current_location = Some(id);
        self.describe_location()
    }

    /// Show the current location: title, description, exits, and actions.
    /// Does nothing before the player has been placed.
    pub fn describe_location(&mut self) -> EngineResult<()> {
        if self.state.current_location.is_none() {
            return Ok(());
        }
        let location = self.current_location()?;
        let name = location.name.clone();
        let description = location.description.clone();
        let exits: Vec<String> = location
            .connections()
            .iter()
            .map(|c| format!("- {}", c.direction))
            .collect();
        let actions: Vec<String> = location
            .action_names()
            .map(|name| format!("- {name}"))
            .collect();

        self.header(&name)?;
        self.say(&description)?;
        if !exits.is_empty() {
            self.print("")?;
            self.print("You can go:")?;
            for exit in &exits {
                self.print(exit)?;
            }
        }
        if !actions.is_empty() {
            self.print("")?;
            self.print("Available actions:")?;
            for action in &actions {
                self.print(action)?;
            }
        }
        self.location_shown = true;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Resolve a command against the current location and carry it out.
    pub fn process_command(&mut self, input: &str) -> EngineResult<Outcome> {
        let token = normalize(input);
        let resolution = classify(self.current_location()?, &token);
        debug!(command = %token, ?resolution, "resolved command");

        match resolution {
            Resolution::Move(destination) => {
                self.go_to(destination.clone())?;
                Ok(Outcome::Moved(destination))
            }
            Resolution::Action(handler) => Ok(Outcome::Acted(handler.run(self)?)),
            Resolution::Inventory => {
                self.show_inventory()?;
                Ok(Outcome::Inventory)
            }
            Resolution::Help => {
                self.show_help()?;
                Ok(Outcome::Help)
            }
            Resolution::Unknown => {
                self.print("I don't understand that command.")?;
                Ok(Outcome::NotUnderstood)
            }
        }
    }

    /// Handle one line typed at the command prompt: the `quit`, `save` and
    /// `load` built-ins first, then the resolver. Easter eggs only answer
    /// words the resolver has no use for.
    pub fn handle_turn(&mut self, input: &str) -> EngineResult<()> {
        let token = normalize(input);
        match token.as_str() {
            QUIT_COMMAND => {
                self.confirm_quit()?;
            }
            SAVE_COMMAND => {
                let path = self.config.save_path.clone();
                self.save_game(&path)?;
            }
            LOAD_COMMAND => {
                let path = self.config.save_path.clone();
                self.load_game(&path)?;
            }
            _ => match self.hidden_egg(&token) {
                Some(egg) => egg.reveal(self)?,
                None => {
                    self.process_command(&token)?;
                }
            },
        }
        Ok(())
    }

    /// An unfound easter egg for `token`, unless the current location
    /// already gives the word a meaning.
    fn hidden_egg(&self, token: &str) -> Option<EasterEgg> {
        let resolved = self
            .current_location()
            .is_ok_and(|location| !matches!(classify(location, token), Resolution::Unknown));
        if resolved {
            return None;
        }
        self.easter_eggs
            .iter()
            .find(|egg| egg.matches(token) && !egg.is_found(&self.state))
            .cloned()
    }

    /// Ask whether the player really wants to quit. Only the first option
    /// ends the game. Returns whether it did.
    pub fn confirm_quit(&mut self) -> EngineResult<bool> {
        if self.choose("Are you sure you want to quit?", &["Yes", "No"])? == 1 {
            self.end();
            return Ok(true);
        }
        Ok(false)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write the story state to `path`. Failures are reported to the player
    /// and return `false`.
    pub fn save_game(&mut self, path: &Path) -> EngineResult<bool> {
        match self.state.to_save().write(path) {
            Ok(()) => {
                info!(path = %path.display(), "game saved");
                self.say(&format!("Game saved successfully to {}", path.display()))?;
                Ok(true)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "save failed");
                self.say(&format!("Error saving game: {err}"))?;
                Ok(false)
            }
        }
    }

    /// Replace the story state with the save at `path` and show the restored
    /// location. Failures are reported to the player, return `false`, and
    /// leave the current state untouched.
    pub fn load_game(&mut self, path: &Path) -> EngineResult<bool> {
        match self.read_save(path) {
            Ok(save) => {
                self.state.restore(save);
                info!(path = %path.display(), "game loaded");
                self.say(&format!("Game loaded successfully from {}", path.display()))?;
                self.describe_location()?;
                Ok(true)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "load failed");
                self.say(&format!("Error loading game: {err}"))?;
                Ok(false)
            }
        }
    }

    /// Read and check a save without touching the current state.
    fn read_save(&self, path: &Path) -> EngineResult<SaveData> {
        let save = SaveData::read(path)?;
        if let Some(id) = &save.current_location {
            self.world.resolve(id)?;
        }
        Ok(save)
    }

    // -----------------------------------------------------------------------
    // Turn loop
    // -----------------------------------------------------------------------

    /// Play `story` from the title screen to the closing words.
    pub fn play(&mut self, story: &dyn Story) -> EngineResult<()> {
        self.header(story.title())?;
        story.intro(self)?;
        self.state.player_name = self.ask("What is your name? ")?;

        story.build_world(&mut self.world);
        for dangling in self.world.dangling_connections() {
            warn!(
                from = %dangling.from,
                direction = %dangling.direction,
                to = %dangling.to,
                "connection leads to an unregistered location"
            );
        }
        for egg in story.easter_eggs() {
            self.add_easter_egg(egg);
        }
        info!(
            title = story.title(),
            locations = self.world.len(),
            "story started"
        );

        self.go_to(story.start_location())?;
        self.run()?;

        self.header("GAME OVER")?;
        story.outro(self)
    }

    /// Read and handle commands until the game ends.
    ///
    /// Errors from a single command are reported and the loop continues;
    /// only a closed input stream or a broken display stops it.
    pub fn run(&mut self) -> EngineResult<()> {
        while !self.state.game_over {
            if !self.location_shown {
                self.describe_location()?;
            }
            self.location_shown = false;

            self.print("")?;
            let prompt = self.config.command_prompt.clone();
            let command = self.read_line(&prompt)?;

            if let Err(err) = self.handle_turn(&command) {
                if !err.is_recoverable() {
                    return Err(err);
                }
                warn!(command = %command.trim(), error = %err, "command failed");
                self.print(&err.to_string())?;
            }
        }
        Ok(())
    }
}

/// Parse a numbered-option answer into a 1-based index.
fn parse_choice(reply: &str, count: usize) -> EngineResult<usize> {
    let number: i64 = reply
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidInput(NOT_A_NUMBER.to_string()))?;
    match usize::try_from(number) {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(EngineError::InvalidInput(OUT_OF_RANGE.to_string())),
    }
}
