// colly_core/src/constants.rs
use crate::tiles::collision_type::TileId;

/// Tile ids the default classifier treats as empty space.
pub const DEFAULT_NONE_IDS: [TileId; 2] = [0, 11];

/// Id every cell holds when a grid is created.
pub const EMPTY_TILE: TileId = 0;

/// Sub-steps used when a config does not name its own.
pub const DEFAULT_STEPS: u32 = 10;

/// 60Hz physics.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Default cell size in world units.
pub const DEFAULT_CELL_SIZE: f32 = 16.0;

/// Default grid size in cells.
pub const DEFAULT_GRID_WIDTH: usize = 16;
pub const DEFAULT_GRID_HEIGHT: usize = 10;

/// Basename of the rotated log file.
pub const LOG_BASENAME: &str = "colly";

/// Rotate the log file once it reaches this many bytes.
pub const LOG_ROTATE_BYTES: u64 = 5_000_000;

/// Number of rotated log files to keep.
pub const LOG_KEEP_FILES: usize = 5;
