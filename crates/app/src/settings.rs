//! Player state that survives across runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use util::saved_file::{self, SavedFileError};

const SETTINGS_FILE_NAME: &str = "player_settings.json";

/// The slice of player state worth keeping across runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub volume: f64,
    pub playback_rate: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

impl PlayerSettings {
    /// Loads saved settings, falling back to defaults when nothing was saved
    /// yet.
    pub fn load() -> Result<Self, SavedFileError> {
        saved_file::load_json_or_default(settings_path())
    }

    pub fn save(&self) -> Result<(), SavedFileError> {
        saved_file::save_json(self, settings_path())
    }
}

fn settings_path() -> PathBuf {
    util::local_data::data_dir().join(SETTINGS_FILE_NAME)
}
