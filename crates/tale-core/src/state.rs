//! Story state: who the player is, what they carry, and what has happened.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::flag::FlagValue;
use crate::location::LocationId;
use crate::save::SaveData;

/// Prefix of the flags that hold relationship scores.
pub const RELATIONSHIP_PREFIX: &str = "relationship_";

/// The mutable state of one playthrough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryState {
    /// Name the player entered at the start.
    pub player_name: String,
    /// Items carried, in acquisition order. Duplicates are allowed.
    inventory: Vec<String>,
    /// Story flags by key.
    flags: BTreeMap<String, FlagValue>,
    /// Where the player is. `None` before the first placement.
    pub current_location: Option<LocationId>,
    /// Number of easter eggs found so far.
    pub easter_eggs_found: u32,
    /// Set when the game should stop after the current turn.
    pub game_over: bool,
}

impl StoryState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Items carried, in acquisition order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Whether the player carries at least one of `item`.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first occurrence of an item. Returns whether it was carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Flags
    // -----------------------------------------------------------------------

    /// All story flags, ordered by key.
    pub fn flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.flags
    }

    /// Overwrite a flag.
    pub fn set_flag(&mut self, key: impl Into<String>, value: impl Into<FlagValue>) {
        self.flags.insert(key.into(), value.into());
    }

    /// Set a flag to `true`.
    pub fn set(&mut self, key: impl Into<String>) {
        self.set_flag(key, true);
    }

    /// Get a flag value, if present.
    pub fn flag(&self, key: &str) -> Option<&FlagValue> {
        self.flags.get(key)
    }

    /// Get a flag value, or `default` when the key is absent.
    pub fn flag_or(&self, key: &str, default: impl Into<FlagValue>) -> FlagValue {
        self.flags.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Whether a flag is present and truthy.
    pub fn check_flag(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(FlagValue::is_truthy)
    }

    /// Add `amount` to a numeric flag, starting from `default` when absent.
    /// Returns the new value.
    pub fn increment_flag(&mut self, key: &str, amount: i64, default: i64) -> CoreResult<i64> {
        let current = match self.flags.get(key) {
            None => default,
            Some(value) => value.as_integer().ok_or_else(|| CoreError::FlagType {
                key: key.to_string(),
                found: value.clone(),
            })?,
        };
        let next = current.saturating_add(amount);
        self.flags.insert(key.to_string(), FlagValue::Integer(next));
        Ok(next)
    }

    /// Current relationship score with a character (0 if never changed).
    pub fn relationship(&self, character: &str) -> i64 {
        self.flags
            .get(&relationship_key(character))
            .and_then(FlagValue::as_integer)
            .unwrap_or(0)
    }

    // -----------------------------------------------------------------------
    // Save records
    // -----------------------------------------------------------------------

    /// Snapshot the persistent part of the state.
    pub fn to_save(&self) -> SaveData {
        SaveData {
            player_name: self.player_name.clone(),
            inventory: self.inventory.clone(),
            story_flags: self.flags.clone(),
            current_location: self.current_location.clone(),
            easter_eggs_found: self.easter_eggs_found,
        }
    }

    /// Replace the persistent part of the state with a save record.
    ///
    /// `game_over` is not persisted and is left as is.
    pub fn restore(&mut self, save: SaveData) {
        self.player_name = save.player_name;
        self.inventory = save.inventory;
        self.flags = save.story_flags;
        self.current_location = save.current_location;
        self.easter_eggs_found = save.easter_eggs_found;
    }
}

/// Flag key holding the relationship score with `character`.
pub fn relationship_key(character: &str) -> String {
    format!("{RELATIONSHIP_PREFIX}{character}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = StoryState::new();
        assert!(state.player_name.is_empty());
        assert!(state.inventory().is_empty());
        assert!(state.flags().is_empty());
        assert!(state.current_location.is_none());
        assert_eq!(state.easter_eggs_found, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn inventory_keeps_order_and_duplicates() {
        let mut state = StoryState::new();
        state.add_item("keycard");
        state.add_item("coffee");
        state.add_item("keycard");
        assert_eq!(state.inventory(), ["keycard", "coffee", "keycard"]);

        assert!(state.remove_item("keycard"));
        assert_eq!(state.inventory(), ["coffee", "keycard"]);
        assert!(!state.remove_item("badge"));
    }

    #[test]
    fn single_item_inventory() {
        let mut state = StoryState::new();
        state.add_item("keycard");
        assert_eq!(state.inventory(), ["keycard"]);
        assert!(state.has_item("keycard"));
    }

    #[test]
    fn set_and_check_flags() {
        let mut state = StoryState::new();
        assert!(!state.check_flag("met_maya"));
        assert_eq!(state.flag_or("met_maya", false), FlagValue::Boolean(false));

        state.set("met_maya");
        assert!(state.check_flag("met_maya"));

        state.set_flag("met_maya", false);
        assert!(!state.check_flag("met_maya"));

        state.set_flag("codename", "Orchid");
        assert_eq!(state.flag("codename"), Some(&FlagValue::from("Orchid")));
    }

    #[test]
    fn increment_accumulates_from_default() {
        let mut state = StoryState::new();
        assert_eq!(state.increment_flag("x", 5, 0).unwrap(), 5);
        assert_eq!(state.increment_flag("x", 5, 0).unwrap(), 10);
        assert_eq!(state.flag("x"), Some(&FlagValue::Integer(10)));
    }

    #[test]
    fn increment_uses_custom_default() {
        let mut state = StoryState::new();
        assert_eq!(state.increment_flag("trust", -1, 3).unwrap(), 2);
    }

    #[test]
    fn increment_rejects_text_flag() {
        let mut state = StoryState::new();
        state.set_flag("codename", "Orchid");
        let err = state.increment_flag("codename", 1, 0).unwrap_err();
        assert!(matches!(err, CoreError::FlagType { .. }));
        assert_eq!(state.flag("codename"), Some(&FlagValue::from("Orchid")));
    }

    #[test]
    fn relationship_scores() {
        let mut state = StoryState::new();
        assert_eq!(state.relationship("maya"), 0);
        state
            .increment_flag(&relationship_key("maya"), 2, 0)
            .unwrap();
        assert_eq!(state.relationship("maya"), 2);
        assert!(state.flag("relationship_maya").is_some());
    }

    #[test]
    fn restore_keeps_game_over() {
        let mut state = StoryState::new();
        state.game_over = true;
        state.restore(SaveData::default());
        assert!(state.game_over);
    }
}
