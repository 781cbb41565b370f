// colly_core/src/world/region.rs
use std::ops::RangeInclusive;
use glam::Vec2;
use crate::geometry::rect::Rect;
use crate::world::grid_world::GridWorld;

/// Inclusive block of cells a sweep has to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRegion {
    pub min_column: usize,
    pub max_column: usize,
    pub min_row: usize,
    pub max_row: usize,
}

impl CellRegion {
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.min_column..=self.max_column
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.min_row..=self.max_row
    }

    pub fn cell_count(&self) -> usize {
        (self.max_column - self.min_column + 1) * (self.max_row - self.min_row + 1)
    }
}

impl GridWorld {
    /// Cells that `bounds` can touch on its way to `goal`.
    ///
    /// Covers the box spanned by the start and goal positions, grown by the
    /// body's size on every side and clamped to the grid. Returns `None` when
    /// that box lies entirely outside the grid.
    ///
    /// Bodies with negative width or height are grown by the absolute size,
    /// so they still see the cells they cover.
    pub fn search_region(&self, bounds: Rect, goal: Vec2) -> Option<CellRegion> {
        let body = bounds.size().abs();

        let min = goal.min(bounds.position()) - body;
        let max = goal.max(bounds.position() + bounds.size()) + body;

        let min_column = to_cell(min.x, self.cell_width()).max(0);
        let min_row = to_cell(min.y, self.cell_height()).max(0);
        let max_column = to_cell(max.x, self.cell_width()).min(self.width() as i64 - 1);
        let max_row = to_cell(max.y, self.cell_height()).min(self.height() as i64 - 1);

        if min_column > max_column || min_row > max_row {
            return None;
        }

        Some(CellRegion {
            min_column: min_column as usize,
            max_column: max_column as usize,
            min_row: min_row as usize,
            max_row: max_row as usize,
        })
    }
}

/// World coordinate to cell index, flooring toward negative infinity.
fn to_cell(world: f32, cell_size: f32) -> i64 {
    (world / cell_size).floor() as i64
}
