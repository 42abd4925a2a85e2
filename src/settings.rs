//! Game settings
//!
//! Loaded from a JSON file next to the highscore list; missing fields take
//! their defaults.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{self, PersistenceError};
use crate::snap_to_grid;

/// Default settings file name
pub const SETTINGS_FILE: &str = "snake_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in board units (rounded down to whole grid squares)
    pub board_width: i32,
    /// Board height in board units (rounded down to whole grid squares)
    pub board_height: i32,
    /// Tick interval at the start of every game (ms)
    pub start_speed_ms: u32,
    /// RNG seed; the same seed replays the same food sequence
    pub seed: u64,
    /// Where the leaderboard is stored
    pub highscore_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            start_speed_ms: SNAKE_START_SPEED_MS,
            seed: 0,
            highscore_path: PathBuf::from("snake_highscorelist.json"),
        }
    }
}

impl Settings {
    /// Board size snapped to whole squares, never smaller than one square
    pub fn board_size(&self) -> (i32, i32) {
        let size = snap_to_grid(IVec2::new(self.board_width, self.board_height))
            .max(IVec2::splat(GRID_UNIT));
        (size.x, size.y)
    }

    /// Start interval, never faster than the speed floor
    pub fn start_speed(&self) -> u32 {
        self.start_speed_ms.max(SNAKE_SPEED_FLOOR_MS)
    }

    /// Load settings from `path`; if there is no file yet, write the
    /// defaults there so they can be edited
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self::default();
        if let Err(e) = settings.save(path) {
            log::warn!("Could not write default settings: {e}");
        }
        settings
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match persistence::load_json(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_board() {
        let settings = Settings::default();
        assert_eq!(settings.board_size(), (400, 400));
    }

    #[test]
    fn test_board_snaps_to_squares() {
        let settings = Settings {
            board_width: 415,
            board_height: 5,
            ..Default::default()
        };
        assert_eq!(settings.board_size(), (400, 20));
    }

    #[test]
    fn test_start_speed_floor() {
        let settings = Settings {
            start_speed_ms: 3,
            ..Default::default()
        };
        assert_eq!(settings.start_speed(), SNAKE_SPEED_FLOOR_MS);
        assert_eq!(Settings::default().start_speed(), 400);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        assert_eq!(Settings::load_or_create(&path), Settings::default());
        assert!(path.exists());

        std::fs::write(&path, r#"{"start_speed_ms": 300}"#).unwrap();
        assert_eq!(Settings::load_or_create(&path).start_speed_ms, 300);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"seed": 42}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.board_width, BOARD_WIDTH);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = Settings {
            board_width: 200,
            seed: 7,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }
}
