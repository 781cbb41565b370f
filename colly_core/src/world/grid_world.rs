// colly_core/src/world/grid_world.rs
use std::fmt;
use crate::{
    constants::EMPTY_TILE,
    error::{CollyError, Result},
    geometry::rect::Rect,
    storage::grid_config::GridConfig,
    tiles::collision_type::{CollisionType, DefaultClassifier, TileClassifier, TileId},
};

/// A uniform grid of tile ids plus the classifier that gives them meaning.
pub struct GridWorld {
    width: usize,
    height: usize,
    cell_width: f32,
    cell_height: f32,
    /// Row-major: `row * width + column`.
    tiles: Vec<TileId>,
    classifier: Box<dyn TileClassifier>,
}

impl GridWorld {
    /// Creates an empty grid using the [`DefaultClassifier`].
    pub fn new(width: usize, height: usize, cell_width: f32, cell_height: f32) -> Result<Self> {
        Self::with_classifier(width, height, cell_width, cell_height, DefaultClassifier)
    }

    /// Creates an empty grid that classifies tiles with `classifier`.
    pub fn with_classifier(
        width: usize,
        height: usize,
        cell_width: f32,
        cell_height: f32,
        classifier: impl TileClassifier + 'static,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CollyError::InvalidArgument(format!(
                "grid size must be non-zero, got {width}x{height}"
            )));
        }
        let cell_count = width.checked_mul(height).ok_or_else(|| {
            CollyError::InvalidArgument(format!("grid size {width}x{height} is too large"))
        })?;
        // Rejects NaN as well
        if !(cell_width > 0.0 && cell_height > 0.0) || !cell_width.is_finite() || !cell_height.is_finite() {
            return Err(CollyError::InvalidArgument(format!(
                "cell size must be positive and finite, got {cell_width}x{cell_height}"
            )));
        }

        log::debug!(
            "Created {width}x{height} grid with {cell_width}x{cell_height} cells."
        );

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            tiles: vec![EMPTY_TILE; cell_count],
            classifier: Box::new(classifier),
        })
    }

    /// Builds a grid from its config, classified by the config's id tables.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        Self::with_classifier(
            config.width,
            config.height,
            config.cell_width,
            config.cell_height,
            config.classifier(),
        )
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn cell_width(&self) -> f32 { self.cell_width }
    pub fn cell_height(&self) -> f32 { self.cell_height }

    /// Set the tile id at a grid coordinate.
    pub fn set_tile(&mut self, column: usize, row: usize, id: TileId) -> Result<()> {
        let index = self.index(column, row)?;
        self.tiles[index] = id;
        Ok(())
    }

    /// Get the tile id at a grid coordinate.
    pub fn get_tile(&self, column: usize, row: usize) -> Result<TileId> {
        let index = self.index(column, row)?;
        Ok(self.tiles[index])
    }

    /// Overwrite every cell with `id`.
    pub fn fill(&mut self, id: TileId) {
        self.tiles.fill(id);
    }

    /// Swap the classifier. Takes effect on the next query.
    pub fn set_classifier(&mut self, classifier: impl TileClassifier + 'static) {
        log::debug!("Replaced tile classifier.");
        self.classifier = Box::new(classifier);
    }

    pub fn classify(&self, id: TileId) -> CollisionType {
        self.classifier.classify(id)
    }

    /// World-space rectangle covered by a cell.
    pub fn cell_rect(&self, column: usize, row: usize) -> Rect {
        Rect::new(
            column as f32 * self.cell_width,
            row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Unchecked read for coordinates already clamped to the grid.
    pub(crate) fn tile_at(&self, column: usize, row: usize) -> TileId {
        self.tiles[row * self.width + column]
    }

    fn index(&self, column: usize, row: usize) -> Result<usize> {
        if column >= self.width || row >= self.height {
            return Err(CollyError::IndexOutOfRange {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + column)
    }
}

impl fmt::Debug for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridWorld")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cell_width", &self.cell_width)
            .field("cell_height", &self.cell_height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = GridWorld::new(4, 3, 16.0, 16.0).unwrap();

        assert_eq!((grid.width(), grid.height()), (4, 3));
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(grid.get_tile(column, row).unwrap(), EMPTY_TILE);
            }
        }
    }

    #[test]
    fn tiles_are_addressed_by_column_then_row() {
        let mut grid = GridWorld::new(4, 3, 1.0, 1.0).unwrap();
        grid.set_tile(3, 1, 9).unwrap();

        assert_eq!(grid.get_tile(3, 1).unwrap(), 9);
        assert_eq!(grid.get_tile(1, 1).unwrap(), EMPTY_TILE);
        assert!(grid.get_tile(1, 3).is_err());
        assert_eq!(grid.tile_at(3, 1), 9);
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut grid = GridWorld::new(4, 3, 1.0, 1.0).unwrap();

        assert!(matches!(
            grid.set_tile(4, 0, 1),
            Err(CollyError::IndexOutOfRange { column: 4, row: 0, width: 4, height: 3 })
        ));
        assert!(matches!(grid.get_tile(0, 3), Err(CollyError::IndexOutOfRange { .. })));
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        assert!(matches!(GridWorld::new(4, 4, 0.0, 1.0), Err(CollyError::InvalidArgument(_))));
        assert!(matches!(GridWorld::new(4, 4, 1.0, -2.0), Err(CollyError::InvalidArgument(_))));
        assert!(matches!(GridWorld::new(4, 4, f32::NAN, 1.0), Err(CollyError::InvalidArgument(_))));
        assert!(matches!(GridWorld::new(0, 4, 1.0, 1.0), Err(CollyError::InvalidArgument(_))));
    }

    #[test]
    fn overflowing_grid_size_is_rejected() {
        assert!(matches!(GridWorld::new(usize::MAX, 2, 1.0, 1.0), Err(CollyError::InvalidArgument(_))));
    }

    #[test]
    fn classifier_can_be_replaced() {
        let mut grid = GridWorld::new(2, 2, 1.0, 1.0).unwrap();
        assert_eq!(grid.classify(5), CollisionType::Solid);

        grid.set_classifier(|_: TileId| CollisionType::Cross);
        assert_eq!(grid.classify(5), CollisionType::Cross);
        assert_eq!(grid.classify(0), CollisionType::Cross);
    }

    #[test]
    fn cell_rect_scales_by_cell_size() {
        let grid = GridWorld::new(8, 8, 16.0, 8.0).unwrap();

        assert_eq!(grid.cell_rect(2, 3), Rect::new(32.0, 24.0, 16.0, 8.0));
    }

    #[test]
    fn fill_overwrites_every_cell() {
        let mut grid = GridWorld::new(3, 2, 1.0, 1.0).unwrap();
        grid.fill(4);

        assert!((0..2).all(|row| (0..3).all(|column| grid.get_tile(column, row).unwrap() == 4)));
    }
}
