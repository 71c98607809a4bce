use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::SIMULATOR_GENRE;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Genre used by `by-genre` and the genre report when none is given.
    pub default_genre: String,
    pub genres_file: String,
    pub publishers_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_genre: SIMULATOR_GENRE.to_string(),
            genres_file: "genres.txt".to_string(),
            publishers_file: "game_publishers.csv".to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gamecat").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Loads the user's settings, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {e}", path);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                log::warn!("Failed to create config dir {:?}: {e}", dir);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    log::warn!("Failed to save settings to {:?}: {e}", path);
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }

    /// Removes the saved settings so the next `load` returns defaults.
    pub fn reset() {
        if let Some(path) = Self::config_path() {
            Self::reset_at(&path);
        }
    }

    pub fn reset_at(path: &Path) {
        if path.exists() {
            if let Err(e) = fs::remove_file(path) {
                log::warn!("Failed to remove settings at {:?}: {e}", path);
            }
        }
    }
}
