//! Loading config, wardrobe snapshots and outfits from disk.

use std::path::{Path, PathBuf};

use stylist_config::{AppConfig, ConfigError};
use stylist_core::{ClothingItem, Outfit};
use tracing::info;

pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => AppConfig::load_at(path),
        None => AppConfig::load(),
    }
}

/// Read a wardrobe snapshot: a JSON array of items.
pub fn load_items(
    config: &AppConfig,
    explicit: Option<PathBuf>,
) -> Result<Vec<ClothingItem>, Box<dyn std::error::Error>> {
    let path = config.wardrobe_path_or(explicit).ok_or(
        "No wardrobe given: pass --wardrobe, set STYLIST_WARDROBE, or add wardrobe_path to config.toml",
    )?;
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read wardrobe at {}: {e}", path.display()))?;
    let items: Vec<ClothingItem> =
        serde_json::from_str(&raw)?;
    info!(path = %path.display(), items = items.len(), "Loaded wardrobe");
    Ok(items)
}

pub fn load_outfit(path: &Path) -> Result<Outfit, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read outfit at {}: {e}", path.display()))?;
    let outfit: Outfit = serde_json::from_str(&raw)?;
    Ok(outfit)
}
