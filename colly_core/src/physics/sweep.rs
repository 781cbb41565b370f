// colly_core/src/physics/sweep.rs
use glam::Vec2;
use strum_macros::Display;
use crate::{
    error::{CollyError, Result},
    geometry::rect::Rect,
    tiles::collision_type::{CollisionType, TileId},
    world::{grid_world::GridWorld, region::CellRegion},
};

/// Which half of a sub-step is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Axis {
    X,
    Y,
}

/// A non-empty tile the body overlapped during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileContact {
    pub id: TileId,
    pub column: usize,
    pub row: usize,
    pub axis: Axis,
}

/// Information returned by the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Where the body ends up after all corrections.
    pub position: Vec2,
    /// Was the body pushed back on the X axis during any step?
    pub blocked_x: bool,
    /// Was the body pushed back on the Y axis during any step?
    pub blocked_y: bool,
}

impl GridWorld {
    /// Moves `bounds` toward `goal` in `steps` increments and returns the
    /// position it can actually reach.
    pub fn check(&self, steps: u32, bounds: Rect, goal: Vec2) -> Result<Vec2> {
        self.sweep(steps, bounds, goal).map(|result| result.position)
    }

    /// Same as [`GridWorld::check`], calling `on_touch` for every tile the body overlaps.
    pub fn check_with<F>(&self, steps: u32, bounds: Rect, goal: Vec2, on_touch: F) -> Result<Vec2>
    where
        F: FnMut(TileContact, &GridWorld),
    {
        self.sweep_with(steps, bounds, goal, on_touch).map(|result| result.position)
    }

    /// Sweep the requested movement and report which axes were blocked.
    pub fn sweep(&self, steps: u32, bounds: Rect, goal: Vec2) -> Result<SweepResult> {
        self.sweep_with(steps, bounds, goal, |_, _| {})
    }

    /// Sweep with a touch hook.
    ///
    /// Each step advances and resolves X completely before Y. The hook fires
    /// for every `Solid` or `Cross` tile the body overlaps, before deciding
    /// whether to push the body out. It cannot influence the result.
    pub fn sweep_with<F>(
        &self,
        steps: u32,
        bounds: Rect,
        goal: Vec2,
        mut on_touch: F,
    ) -> Result<SweepResult>
    where
        F: FnMut(TileContact, &GridWorld),
    {
        validate(steps, bounds, goal)?;

        let increment = (goal - bounds.position()) / steps as f32;
        let region = self.search_region(bounds, goal);

        let mut current = bounds;
        let mut blocked_x = false;
        let mut blocked_y = false;

        for _ in 0..steps {
            let (after_x, hit_x) = self.step_x(current, increment.x, region, &mut on_touch);
            let (after_y, hit_y) = self.step_y(after_x, increment.y, region, &mut on_touch);
            current = after_y;
            blocked_x |= hit_x;
            blocked_y |= hit_y;
        }

        log::debug!(
            "Swept {:?} -> {:?} in {} steps, resolved to {:?} (blocked x: {}, y: {}).",
            bounds.position(),
            goal,
            steps,
            current.position(),
            blocked_x,
            blocked_y,
        );

        Ok(SweepResult {
            position: current.position(),
            blocked_x,
            blocked_y,
        })
    }

    /// Advance `bounds` by `increment` on X and push it out of solid tiles.
    /// Returns the new bounds and whether a correction was applied.
    pub fn step_x(
        &self,
        bounds: Rect,
        increment: f32,
        region: Option<CellRegion>,
        on_touch: &mut dyn FnMut(TileContact, &GridWorld),
    ) -> (Rect, bool) {
        let moved = Rect { x: bounds.x + increment, ..bounds };
        self.resolve_axis(moved, Axis::X, region, on_touch)
    }

    /// Advance `bounds` by `increment` on Y and push it out of solid tiles.
    /// Returns the new bounds and whether a correction was applied.
    pub fn step_y(
        &self,
        bounds: Rect,
        increment: f32,
        region: Option<CellRegion>,
        on_touch: &mut dyn FnMut(TileContact, &GridWorld),
    ) -> (Rect, bool) {
        let moved = Rect { y: bounds.y + increment, ..bounds };
        self.resolve_axis(moved, Axis::Y, region, on_touch)
    }

    /// Scan the region row by row. A correction ends the scan of its row only;
    /// later rows are still checked against the corrected bounds.
    fn resolve_axis(
        &self,
        bounds: Rect,
        axis: Axis,
        region: Option<CellRegion>,
        on_touch: &mut dyn FnMut(TileContact, &GridWorld),
    ) -> (Rect, bool) {
        let Some(region) = region else {
            return (bounds, false);
        };

        let mut bounds = bounds;
        let mut corrected = false;

        for row in region.rows() {
            for column in region.columns() {
                let id = self.tile_at(column, row);
                let collision = self.classify(id);

                if collision == CollisionType::None {
                    continue;
                }

                let cell = self.cell_rect(column, row);
                let Some(overlap) = cell.intersects(&bounds) else {
                    continue;
                };

                on_touch(TileContact { id, column, row, axis }, self);

                // Cross tiles never block
                if collision != CollisionType::Solid {
                    continue;
                }

                let Some(push) = push_out(axis, bounds, cell, overlap) else {
                    continue;
                };

                match axis {
                    Axis::X => bounds.x += push,
                    Axis::Y => bounds.y += push,
                }
                corrected = true;

                log::trace!("Pushed {push} on {axis} out of tile {id} at ({column}, {row}).");
                break;
            }
        }

        (bounds, corrected)
    }
}

/// Distance to move `bounds` along `axis` to leave `cell`, if `axis` is the
/// shallow one. Equal penetration on both axes pushes nowhere.
fn push_out(axis: Axis, bounds: Rect, cell: Rect, overlap: Rect) -> Option<f32> {
    let (depth, other_depth, body_edge, cell_edge) = match axis {
        Axis::X => (overlap.width, overlap.height, bounds.x, cell.x),
        Axis::Y => (overlap.height, overlap.width, bounds.y, cell.y),
    };

    if depth >= other_depth {
        return None;
    }

    // Back out the way the body came in
    if body_edge < cell_edge {
        Some(-depth)
    } else {
        Some(depth)
    }
}

fn validate(steps: u32, bounds: Rect, goal: Vec2) -> Result<()> {
    if steps == 0 {
        return Err(CollyError::InvalidArgument("steps must be at least 1".to_string()));
    }
    if !bounds.position().is_finite() || !bounds.size().is_finite() || !goal.is_finite() {
        return Err(CollyError::InvalidArgument(format!(
            "sweep needs finite coordinates, got bounds {bounds:?} and goal {goal:?}"
        )));
    }
    Ok(())
}
