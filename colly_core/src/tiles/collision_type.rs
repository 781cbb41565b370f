// colly_core/src/tiles/collision_type.rs
use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use crate::constants::DEFAULT_NONE_IDS;

/// Opaque tile identifier stored in each grid cell.
pub type TileId = i32;

/// How the sweep treats a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum CollisionType {
    /// Ignored by the sweep.
    None,
    /// Blocks movement.
    Solid,
    /// Passable, but reported to the touch hook (coins and other pickups).
    Cross,
}

/// Maps tile ids to collision behaviour. Must be a pure function of the id.
pub trait TileClassifier: Send + Sync {
    fn classify(&self, id: TileId) -> CollisionType;
}

impl<F> TileClassifier for F
where
    F: Fn(TileId) -> CollisionType + Send + Sync,
{
    fn classify(&self, id: TileId) -> CollisionType {
        self(id)
    }
}

/// Ids `0` and `11` are empty, everything else is solid.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl TileClassifier for DefaultClassifier {
    fn classify(&self, id: TileId) -> CollisionType {
        if DEFAULT_NONE_IDS.contains(&id) {
            CollisionType::None
        } else {
            CollisionType::Solid
        }
    }
}

/// Classifier built from explicit id tables. Ids in neither table are solid.
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    none_ids: HashSet<TileId>,
    cross_ids: HashSet<TileId>,
}

impl TableClassifier {
    pub fn new(
        none_ids: impl IntoIterator<Item = TileId>,
        cross_ids: impl IntoIterator<Item = TileId>,
    ) -> Self {
        Self {
            none_ids: none_ids.into_iter().collect(),
            cross_ids: cross_ids.into_iter().collect(),
        }
    }
}

impl TileClassifier for TableClassifier {
    fn classify(&self, id: TileId) -> CollisionType {
        // An id listed in both tables stays empty
        if self.none_ids.contains(&id) {
            CollisionType::None
        } else if self.cross_ids.contains(&id) {
            CollisionType::Cross
        } else {
            CollisionType::Solid
        }
    }
}
