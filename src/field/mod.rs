//! Distance-field engine abstraction.
//!
//! The occupancy grid does not prescribe how distances are propagated; it
//! depends on the [`DistanceField`] capability trait so that exact,
//! approximate, or accelerated engines can be swapped without touching the
//! grid's contract. [`PropagationField`] is the bundled conforming engine.

mod propagation;

pub use propagation::PropagationField;

use crate::core::{GridCoord, WorldPoint};

/// Capability interface for a 3D distance-field engine.
///
/// An engine owns the per-cell distance state for a bounded volume with a
/// fixed geometry (cell counts, resolution, origin) and keeps, for every
/// cell, the distance to the nearest occupied cell clamped to
/// `[0, max_distance]`.
///
/// Coordinate conversions have default implementations derived from
/// `origin()` and `resolution()` so the cell-center convention and its
/// tie-break rule are uniform across engines.
pub trait DistanceField: Send {
    /// Cell counts along x, y, z
    fn num_cells(&self) -> [usize; 3];

    /// World coordinates of the cell (0, 0, 0) center
    fn origin(&self) -> WorldPoint;

    /// Meters per cell edge
    fn resolution(&self) -> f32;

    /// Propagation cutoff in meters
    fn max_distance(&self) -> f32;

    /// Clear all obstacle state; every cell's distance returns to
    /// `max_distance`. Geometry is untouched.
    fn reset(&mut self);

    /// Distance in meters from the cell center to the nearest occupied cell,
    /// or `None` if the index is out of bounds.
    fn distance_from_cell(&self, cell: GridCoord) -> Option<f32>;

    /// Mark the cells containing `points` occupied and update affected
    /// distances. Points outside the volume are silently ignored.
    fn add_points(&mut self, points: &[WorldPoint]);

    /// Whether the cell is currently marked occupied. Out-of-bounds cells
    /// are never occupied.
    fn is_occupied(&self, cell: GridCoord) -> bool {
        self.distance_from_cell(cell).map_or(false, |d| d == 0.0)
    }

    /// Convert a grid index to the world coordinates of its cell center:
    /// `world = origin + index * resolution`.
    ///
    /// Accepts any integer index; bounds validation is a separate call.
    fn grid_to_world(&self, cell: GridCoord) -> WorldPoint {
        let o = self.origin();
        let r = self.resolution();
        WorldPoint::new(
            o.x + cell.x as f32 * r,
            o.y + cell.y as f32 * r,
            o.z + cell.z as f32 * r,
        )
    }

    /// Convert world coordinates to the index of the nearest cell center.
    ///
    /// Tie-break rule: a coordinate exactly midway between two cell centers
    /// resolves to the higher-index cell (round-half-up), uniformly on all
    /// axes. The result may be out of bounds; validate separately.
    fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let o = self.origin();
        let r = self.resolution();
        GridCoord::new(
            ((point.x - o.x) / r + 0.5).floor() as i32,
            ((point.y - o.y) / r + 0.5).floor() as i32,
            ((point.z - o.z) / r + 0.5).floor() as i32,
        )
    }
}
