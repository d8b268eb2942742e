//! Save records and their on-disk JSON form.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::flag::FlagValue;
use crate::location::LocationId;

/// Default save location used by stories that do not choose one.
pub const DEFAULT_SAVE_PATH: &str = "data/saves/savegame.json";

/// The persistent part of a [`StoryState`](crate::StoryState).
///
/// Every field defaults when missing so older or hand-edited saves still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// Player name.
    pub player_name: String,
    /// Inventory in acquisition order.
    pub inventory: Vec<String>,
    /// Story flags.
    pub story_flags: BTreeMap<String, FlagValue>,
    /// Current location, if the player had been placed.
    pub current_location: Option<LocationId>,
    /// Easter eggs found.
    pub easter_eggs_found: u32,
}

impl SaveData {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(CoreError::Encode)
    }

    /// Write the record to `path`.
    ///
    /// The JSON is built in memory and written to a temporary file next to
    /// the target, which then replaces the target in one rename. Missing
    /// parent directories are created.
    pub fn write(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json()?;
        let io_err = |source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), bytes = json.len(), "save written");
        Ok(())
    }

    /// Read and fully decode a record from `path`.
    pub fn read(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let save = serde_json::from_str(&text).map_err(|source| CoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "save read");
        Ok(save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn sample() -> SaveData {
        let mut story_flags = BTreeMap::new();
        story_flags.insert("terminal_unlocked".to_string(), FlagValue::Boolean(true));
        story_flags.insert("relationship_maya".to_string(), FlagValue::Integer(-1));
        story_flags.insert("codename".to_string(), FlagValue::from("Orchid"));
        SaveData {
            player_name: "Ada".to_string(),
            inventory: vec!["keycard".into(), "coffee".into(), "keycard".into()],
            story_flags,
            current_location: Some(LocationId::from("hallway")),
            easter_eggs_found: 2,
        }
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        sample().write(&path).unwrap();
        assert_eq!(SaveData::read(&path).unwrap(), sample());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data/saves/savegame.json");
        sample().write(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn field_names_on_disk() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["player_name"], "Ada");
        assert_eq!(json["inventory"][1], "coffee");
        assert_eq!(json["story_flags"]["relationship_maya"], -1);
        assert_eq!(json["current_location"], "hallway");
        assert_eq!(json["easter_eggs_found"], 2);
    }

    #[test]
    fn missing_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"player_name": "Ada"}"#).unwrap();

        let save = SaveData::read(&path).unwrap();
        assert_eq!(save.player_name, "Ada");
        assert!(save.inventory.is_empty());
        assert!(save.story_flags.is_empty());
        assert!(save.current_location.is_none());
        assert_eq!(save.easter_eggs_found, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = SaveData::read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SaveData::read(&path).unwrap_err();
        assert!(matches!(err, CoreError::Malformed { .. }));
    }

    #[test]
    fn failed_write_leaves_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        sample().write(&path).unwrap();

        // A directory where the file should be makes the final rename fail.
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("occupant"), "x").unwrap();
        assert!(SaveData::default().write(&blocked).is_err());

        assert_eq!(SaveData::read(&path).unwrap(), sample());
    }

    fn flag_value() -> impl Strategy<Value = FlagValue> {
        prop_oneof![
            any::<bool>().prop_map(FlagValue::Boolean),
            any::<i64>().prop_map(FlagValue::Integer),
            "[a-zA-Z ]{0,12}".prop_map(FlagValue::Text),
        ]
    }

    proptest! {
        #[test]
        fn json_round_trip(
            player_name in ".{0,16}",
            inventory in proptest::collection::vec("[a-z ]{1,10}", 0..6),
            story_flags in proptest::collection::btree_map("[a-z_]{1,10}", flag_value(), 0..6),
            current_location in proptest::option::of("[a-z_]{1,10}"),
            easter_eggs_found in any::<u32>(),
        ) {
            let save = SaveData {
                player_name,
                inventory,
                story_flags,
                current_location: current_location.map(LocationId::from),
                easter_eggs_found,
            };
            let back: SaveData = serde_json::from_str(&save.to_json().unwrap()).unwrap();
            prop_assert_eq!(back, save);
        }
    }
}
