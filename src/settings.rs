//! World settings persistence — save/load generation parameters to JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Persisted world parameters. Saved to `~/.wildreach/settings.json`.
/// Missing fields default, so old files keep loading as parameters are added.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Outer grid dimensions, in locations.
    pub width_in_locations: i32,
    pub height_in_locations: i32,
    /// Per-location tile grid dimensions.
    pub location_width: i32,
    pub location_height: i32,
    /// Master seed. Every cell derives its own rng from this plus its
    /// coordinates, so regeneration after eviction is reproducible.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Width of the biome transition band at location edges, in tiles.
    #[serde(default = "default_edge_width")]
    pub edge_transition_width: i32,
}

fn default_seed() -> u64 {
    0xD1CE
}
fn default_edge_width() -> i32 {
    4
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width_in_locations: 10,
            height_in_locations: 10,
            location_width: 50,
            location_height: 50,
            seed: default_seed(),
            edge_transition_width: default_edge_width(),
        }
    }
}

impl WorldSettings {
    /// Reject parameter sets generation can't work with.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.width_in_locations < 1 || self.height_in_locations < 1 {
            return Err("world grid must be at least 1x1 locations");
        }
        if self.location_width < 8 || self.location_height < 8 {
            return Err("locations must be at least 8x8 tiles");
        }
        if self.edge_transition_width < 0 {
            return Err("edge transition width must not be negative");
        }
        Ok(())
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .ok()?;
    let dir = PathBuf::from(home).join(".wildreach");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

pub fn save_settings(settings: &WorldSettings) {
    let Some(path) = settings_path() else { return };
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

pub fn load_settings() -> WorldSettings {
    let Some(path) = settings_path() else { return WorldSettings::default() };
    match std::fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => WorldSettings::default(),
    }
}
