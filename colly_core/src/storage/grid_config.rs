// colly_core/src/storage/grid_config.rs
use std::fs;
use std::path::Path;
use ron::from_str;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use crate::{
    constants::*,
    error::Result,
    tiles::collision_type::{TableClassifier, TileId},
};

/// Grid dimensions, sweep resolution and tile classification, stored as `.ron`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Sub-steps per sweep.
    pub steps: u32,
    /// Ids the sweep ignores.
    pub none_ids: Vec<TileId>,
    /// Ids that are passable but reported as touched.
    pub cross_ids: Vec<TileId>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            steps: DEFAULT_STEPS,
            none_ids: DEFAULT_NONE_IDS.to_vec(),
            cross_ids: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Classifier described by the id tables.
    pub fn classifier(&self) -> TableClassifier {
        TableClassifier::new(self.none_ids.iter().copied(), self.cross_ids.iter().copied())
    }
}

/// Parses a config from RON text. Missing fields take their defaults.
pub fn parse_config(text: &str) -> Result<GridConfig> {
    Ok(from_str(text)?)
}

/// Loads a config from a `.ron` file.
pub fn load_config(path: impl AsRef<Path>) -> Result<GridConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log::info!("Loaded grid config from {}.", path.display());
    Ok(config)
}

/// Writes a config as pretty RON, creating parent folders as needed.
pub fn save_config(config: &GridConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let ron = to_string_pretty(config, PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}
