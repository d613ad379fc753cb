//! Player preferences
//!
//! Kept apart from the gameplay constants in `consts`; everything here is
//! presentation-side and may be edited by hand as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Preferences for one installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Input ===
    pub bindings: KeyBindings,

    // === Display ===
    /// Frame-rate cap
    pub frame_rate: u32,

    // === Assets ===
    /// Directory the asset files are read from
    pub asset_dir: PathBuf,
    /// HUD and menu font
    pub font_file: String,
    /// Zombie sprite sheet
    pub sprite_file: String,

    // === Headless ===
    /// Simulated seconds the autopilot session runs for
    pub autopilot_secs: f32,
    /// Session seed; `None` picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),

            frame_rate: 144,

            asset_dir: PathBuf::from("assets"),
            font_file: "zombie.otf".to_string(),
            sprite_file: "zombie.png".to_string(),

            autopilot_secs: 120.0,
            seed: None,
        }
    }
}

impl Settings {
    /// File the settings live in when no path is given
    pub const FILE_NAME: &'static str = "zomboid_settings.json";

    pub fn font_path(&self) -> PathBuf {
        self.asset_dir.join(&self.font_file)
    }

    pub fn sprite_path(&self) -> PathBuf {
        self.asset_dir.join(&self.sprite_file)
    }

    /// Simulation step for one frame at the capped rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or unreadable
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) if path.exists() => {
                log::warn!("Ignoring settings file: {err:#}");
                Self::default()
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}
