pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod physics;
pub mod storage;
pub mod tiles;
pub mod world;

pub use error::{CollyError, Result};
pub use geometry::rect::Rect;
pub use physics::sweep::{Axis, SweepResult, TileContact};
pub use tiles::collision_type::{CollisionType, DefaultClassifier, TableClassifier, TileClassifier, TileId};
pub use world::grid_world::GridWorld;
