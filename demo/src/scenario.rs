// demo/src/scenario.rs
use std::fs;
use std::path::Path;
use colly_core::{
    CollyError, GridWorld, Rect, Result, TileId,
    storage::grid_config::GridConfig,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, FromInto};

/// A grid, its tiles, and one body to push around it.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub grid: GridConfig,
    /// Tile ids, one row per grid row.
    pub layout: Vec<Vec<TileId>>,
    pub body: Rect,
    #[serde_as(as = "FromInto<[f32; 2]>")]
    pub velocity: Vec2,
    /// Downward acceleration in world units per second squared.
    #[serde(default)]
    pub gravity: f32,
    pub frames: u32,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    /// Build the grid and copy the layout into it.
    pub fn build_world(&self) -> Result<GridWorld> {
        let mut world = GridWorld::from_config(&self.grid)?;

        if self.layout.len() != world.height() {
            return Err(CollyError::InvalidArgument(format!(
                "layout has {} rows, grid has {}",
                self.layout.len(),
                world.height()
            )));
        }

        for (row, ids) in self.layout.iter().enumerate() {
            for (column, &id) in ids.iter().enumerate() {
                world.set_tile(column, row, id)?;
            }
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colly_core::CollisionType;

    fn bundled() -> Scenario {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config").join("demo.ron");
        Scenario::load(&path).unwrap()
    }

    #[test]
    fn bundled_scenario_builds() {
        let scenario = bundled();
        let world = scenario.build_world().unwrap();

        assert_eq!((world.width(), world.height()), (12, 8));
        assert_eq!(scenario.body, Rect::new(20.0, 20.0, 12.0, 14.0));
        assert_eq!(world.classify(world.get_tile(5, 3).unwrap()), CollisionType::Cross);
        assert_eq!(world.classify(world.get_tile(4, 5).unwrap()), CollisionType::None);
        assert_eq!(world.classify(world.get_tile(0, 0).unwrap()), CollisionType::Solid);
    }

    #[test]
    fn layout_wider_than_grid_is_rejected() {
        let mut scenario = bundled();
        scenario.layout[2].push(1);

        assert!(matches!(scenario.build_world(), Err(CollyError::IndexOutOfRange { .. })));
    }

    #[test]
    fn layout_with_missing_rows_is_rejected() {
        let mut scenario = bundled();
        scenario.layout.pop();

        assert!(matches!(scenario.build_world(), Err(CollyError::InvalidArgument(_))));
    }
}
