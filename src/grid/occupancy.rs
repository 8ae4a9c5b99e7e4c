//! The occupancy grid: collision-checking substrate for motion planning.
//!
//! [`OccupancyGrid`] wraps a distance-field engine with coordinate
//! conversion, bounds checking, obstacle insertion (point clouds, oriented
//! cuboids, whole-scene replacement) and distance/occupancy queries. The
//! planner's collision checker queries it at every expansion, so lookups are
//! O(1) after an insertion update.
//!
//! The grid exclusively owns its engine; queries take `&self` and mutation
//! takes `&mut self`, so a reimplementation that shares the grid across
//! planner threads gets the required readers-writer discipline from the
//! borrow checker (wrap in an `RwLock` and hold the write guard across a
//! manual reset-then-insert sequence).

use crate::core::{Aabb, GridCoord, Pose3, WorldPoint};
use crate::field::{DistanceField, PropagationField};
use crate::grid::{ConfigError, GridConfig};
use crate::io::CollisionMap;
use log::{debug, warn};

/// Tolerance for the cell-center point-in-box test, absorbing the rounding
/// error of centers reconstructed from integer indices.
const BOX_EPSILON: f32 = 1e-5;

/// A bounded 3D occupancy/distance grid.
pub struct OccupancyGrid {
    field: Box<dyn DistanceField>,
    resolution: f32,
    reference_frame: String,
}

impl OccupancyGrid {
    /// Create a grid backed by the bundled [`PropagationField`] engine.
    ///
    /// Fails fast on invalid geometry; geometry is immutable afterwards.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let field = PropagationField::new(&config)?;
        Ok(Self {
            field: Box::new(field),
            resolution: config.resolution,
            reference_frame: config.reference_frame,
        })
    }

    /// Create a grid around an externally constructed engine.
    ///
    /// The grid takes sole ownership of the engine.
    pub fn with_engine(field: Box<dyn DistanceField>, reference_frame: impl Into<String>) -> Self {
        let resolution = field.resolution();
        Self {
            field,
            resolution,
            reference_frame: reference_frame.into(),
        }
    }

    // === Coordinate transform ===

    /// Convert a grid index to the world coordinates of its cell center.
    ///
    /// Deterministic and side-effect free; accepts any integer index.
    #[inline]
    pub fn grid_to_world(&self, cell: GridCoord) -> WorldPoint {
        self.field.grid_to_world(cell)
    }

    /// Convert world coordinates to the index of the nearest cell center
    /// (round-half-up on each axis). The result may be out of bounds.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        self.field.world_to_grid(point)
    }

    // === Bounds ===

    /// Check whether all three indices fall within the grid extent
    #[inline]
    pub fn is_in_bounds(&self, cell: GridCoord) -> bool {
        let [nx, ny, nz] = self.field.num_cells();
        cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && (cell.x as usize) < nx
            && (cell.y as usize) < ny
            && (cell.z as usize) < nz
    }

    /// Check whether a world point falls inside the grid volume
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        self.is_in_bounds(self.world_to_grid(point))
    }

    // === Queries ===

    /// Distance in meters from the cell center to the nearest obstacle,
    /// clamped to `max_distance`. `None` means the index is out of bounds —
    /// never a "far from obstacle" answer.
    #[inline]
    pub fn distance(&self, cell: GridCoord) -> Option<f32> {
        self.field.distance_from_cell(cell)
    }

    /// Distance query by world coordinates. Bounds-checked internally so an
    /// out-of-grid point reports `None` instead of a misleading distance.
    #[inline]
    pub fn distance_at(&self, point: WorldPoint) -> Option<f32> {
        let cell = self.world_to_grid(point);
        if self.is_in_bounds(cell) {
            self.field.distance_from_cell(cell)
        } else {
            None
        }
    }

    /// Quantized view of [`Self::distance`]: distance divided by resolution,
    /// truncated, saturating at `u8::MAX`. Exists for compact visualization
    /// and serialization, not as the canonical representation.
    #[inline]
    pub fn cell_distance(&self, cell: GridCoord) -> Option<u8> {
        self.field
            .distance_from_cell(cell)
            .map(|d| (d / self.resolution).min(u8::MAX as f32) as u8)
    }

    /// Whether the cell is currently marked occupied
    #[inline]
    pub fn is_occupied(&self, cell: GridCoord) -> bool {
        self.field.is_occupied(cell)
    }

    // === Accessors ===

    /// Cell counts along x, y, z
    #[inline]
    pub fn grid_size(&self) -> [usize; 3] {
        self.field.num_cells()
    }

    /// Covered volume extent in meters along each axis (cells * resolution)
    pub fn world_size(&self) -> WorldPoint {
        let [nx, ny, nz] = self.field.num_cells();
        WorldPoint::new(
            nx as f32 * self.resolution,
            ny as f32 * self.resolution,
            nz as f32 * self.resolution,
        )
    }

    /// World coordinates of the cell (0, 0, 0) center
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.field.origin()
    }

    /// Meters per cell edge
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Propagation cutoff in meters
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.field.max_distance()
    }

    /// Name of the coordinate frame the grid's world coordinates live in
    #[inline]
    pub fn reference_frame(&self) -> &str {
        &self.reference_frame
    }

    /// Set the reference frame name (bookkeeping only)
    pub fn set_reference_frame(&mut self, frame: impl Into<String>) {
        self.reference_frame = frame.into();
    }

    /// Axis-aligned world bounds of the covered volume.
    ///
    /// Cell centers sit on `origin + index * resolution`, so the volume
    /// extends half a cell below the first center and past the last.
    pub fn world_bounds(&self) -> Aabb {
        let half = self.resolution * 0.5;
        let lo = self.origin() - WorldPoint::new(half, half, half);
        Aabb::new(lo, lo + self.world_size())
    }

    // === Obstacle insertion ===

    /// Mark the cells containing `points` occupied and update distances.
    ///
    /// Points outside the grid volume are silently ignored; the grid only
    /// represents the bounded volume it was constructed with.
    pub fn add_points(&mut self, points: &[WorldPoint]) {
        self.field.add_points(points);
    }

    /// Insert an oriented cuboid obstacle.
    ///
    /// Every cell whose center lies inside the rotated box is marked
    /// occupied. Candidates are limited to the grid-space AABB of the box;
    /// each candidate center is tested in box-local coordinates against the
    /// half-extents. A non-positive half-extent on any axis inserts nothing.
    pub fn add_cuboid(&mut self, pose: Pose3, half_extents: WorldPoint) {
        let points: Vec<WorldPoint> = self
            .cells_in_box(pose, half_extents)
            .map(|cell| self.grid_to_world(cell))
            .collect();
        debug!(
            "[OccupancyGrid] cuboid at ({:.3}, {:.3}, {:.3}) covers {} cells",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            points.len()
        );
        self.field.add_points(&points);
    }

    /// Insert an axis-aligned box given its center and full edge lengths.
    ///
    /// This is the shape the obstacle-list file format describes.
    pub fn add_box(&mut self, center: WorldPoint, size: WorldPoint) {
        self.add_cuboid(Pose3::from_position(center), size * 0.5);
    }

    /// Replace the whole scene with the contents of a collision map.
    ///
    /// Clears all prior obstacle state, then inserts the map's points. The
    /// two steps happen inside this single `&mut self` call, so no `&self`
    /// query can observe the intermediate all-clear state.
    pub fn update_from_collision_map(&mut self, map: &CollisionMap) {
        if map.frame_id != self.reference_frame {
            warn!(
                "[OccupancyGrid] collision map frame '{}' differs from grid frame '{}'",
                map.frame_id, self.reference_frame
            );
        }
        self.field.reset();
        self.field.add_points(&map.points);
        debug!(
            "[OccupancyGrid] scene replaced with {} points",
            map.points.len()
        );
    }

    /// Clear all obstacle state; every cell's distance returns to
    /// `max_distance`. Geometry is untouched. Idempotent.
    pub fn reset(&mut self) {
        self.field.reset();
    }

    // === Enumeration ===

    /// Iterate over all in-bounds cell indices in x-fastest order.
    ///
    /// Lazy and restartable; consuming a prefix has no side effects.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let [nx, ny, nz] = self.field.num_cells();
        (0..nz).flat_map(move |z| {
            (0..ny).flat_map(move |y| {
                (0..nx).map(move |x| GridCoord::new(x as i32, y as i32, z as i32))
            })
        })
    }

    /// Iterate over all occupied cell indices
    pub fn occupied_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells().filter(move |&c| self.field.is_occupied(c))
    }

    /// Iterate over the world-space centers of all occupied cells
    pub fn occupied_voxels(&self) -> impl Iterator<Item = WorldPoint> + '_ {
        self.occupied_cells().map(move |c| self.grid_to_world(c))
    }

    /// Collect the world-space centers of occupied cells inside an oriented
    /// box. `dims` are full edge lengths, matching the collision-object
    /// message shape.
    pub fn voxels_in_box(&self, pose: Pose3, dims: WorldPoint) -> Vec<WorldPoint> {
        self.cells_in_box(pose, dims * 0.5)
            .filter(|&cell| self.field.is_occupied(cell))
            .map(|cell| self.grid_to_world(cell))
            .collect()
    }

    /// In-bounds cells whose centers lie inside the oriented box.
    ///
    /// Candidates come from the grid-index AABB of the rotated box, clamped
    /// to the grid extent; everything outside that AABB is skipped without
    /// a point-in-box test.
    fn cells_in_box(
        &self,
        pose: Pose3,
        half_extents: WorldPoint,
    ) -> impl Iterator<Item = GridCoord> + '_ {
        let degenerate =
            !(half_extents.x > 0.0 && half_extents.y > 0.0 && half_extents.z > 0.0);

        let mut aabb = Aabb::empty();
        if !degenerate {
            for corner in Aabb::new(-half_extents, half_extents).vertices() {
                aabb.expand_to_include(pose.transform_point(corner));
            }
        }

        let [nx, ny, nz] = self.field.num_cells();
        let (lo, hi) = if degenerate {
            // Empty range: iterators below produce nothing
            (GridCoord::new(0, 0, 0), GridCoord::new(-1, -1, -1))
        } else {
            let lo = self.world_to_grid(aabb.min);
            let hi = self.world_to_grid(aabb.max);
            (
                GridCoord::new(lo.x.max(0), lo.y.max(0), lo.z.max(0)),
                GridCoord::new(
                    hi.x.min(nx as i32 - 1),
                    hi.y.min(ny as i32 - 1),
                    hi.z.min(nz as i32 - 1),
                ),
            )
        };

        (lo.z..=hi.z)
            .flat_map(move |z| {
                (lo.y..=hi.y)
                    .flat_map(move |y| (lo.x..=hi.x).map(move |x| GridCoord::new(x, y, z)))
            })
            .filter(move |&cell| {
                let local = pose.inverse_transform_point(self.grid_to_world(cell));
                local.x.abs() <= half_extents.x + BOX_EPSILON
                    && local.y.abs() <= half_extents.y + BOX_EPSILON
                    && local.z.abs() <= half_extents.z + BOX_EPSILON
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Quaternion;
    use std::f32::consts::FRAC_PI_4;

    fn test_grid() -> OccupancyGrid {
        OccupancyGrid::new(GridConfig {
            dimensions: WorldPoint::new(2.0, 2.0, 2.0),
            resolution: 0.05,
            origin: WorldPoint::new(-1.0, -1.0, -1.0),
            max_distance: 0.2,
            reference_frame: "map".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_conversion_roundtrip() {
        let grid = test_grid();
        for &cell in &[
            GridCoord::new(0, 0, 0),
            GridCoord::new(20, 20, 20),
            GridCoord::new(39, 39, 39),
            GridCoord::new(3, 17, 29),
        ] {
            let world = grid.grid_to_world(cell);
            assert_eq!(grid.world_to_grid(world), cell);
        }
    }

    #[test]
    fn test_boundary_rounds_half_up() {
        let grid = OccupancyGrid::new(GridConfig {
            dimensions: WorldPoint::new(4.0, 4.0, 4.0),
            resolution: 0.5,
            origin: WorldPoint::ZERO,
            max_distance: 1.0,
            reference_frame: "map".to_string(),
        })
        .unwrap();

        // 0.25 is exactly midway between centers 0.0 and 0.5
        let cell = grid.world_to_grid(WorldPoint::new(0.25, 0.25, 0.25));
        assert_eq!(cell, GridCoord::new(1, 1, 1));
    }

    #[test]
    fn test_bounds_checks() {
        let grid = test_grid();
        assert!(grid.is_in_bounds(GridCoord::new(0, 0, 0)));
        assert!(grid.is_in_bounds(GridCoord::new(39, 39, 39)));
        assert!(!grid.is_in_bounds(GridCoord::new(-1, 0, 0)));
        assert!(!grid.is_in_bounds(GridCoord::new(40, 0, 0)));
        assert!(grid.contains(WorldPoint::ZERO));
        assert!(!grid.contains(WorldPoint::new(10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_accessors() {
        let grid = test_grid();
        assert_eq!(grid.grid_size(), [40, 40, 40]);
        assert_eq!(grid.origin(), WorldPoint::new(-1.0, -1.0, -1.0));
        assert_eq!(grid.resolution(), 0.05);
        assert_eq!(grid.max_distance(), 0.2);
        assert_eq!(grid.reference_frame(), "map");

        let size = grid.world_size();
        assert!((size.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_at_out_of_grid_is_none() {
        let grid = test_grid();
        assert_eq!(grid.distance_at(WorldPoint::new(10.0, 10.0, 10.0)), None);
        // In-grid free cell reports the cutoff, not None
        assert_eq!(grid.distance_at(WorldPoint::ZERO), Some(0.2));
    }

    #[test]
    fn test_quantized_view_matches_metric_view() {
        let mut grid = test_grid();
        grid.add_points(&[WorldPoint::ZERO]);

        let occupied = grid.world_to_grid(WorldPoint::ZERO);
        assert_eq!(grid.cell_distance(occupied), Some(0));

        let neighbor = occupied.offset(1, 0, 0);
        let metric = grid.distance(neighbor).unwrap();
        assert_eq!(
            grid.cell_distance(neighbor),
            Some((metric / grid.resolution()) as u8)
        );

        // Free cell far away: cutoff / resolution = 0.2 / 0.05 = 4 cells
        assert_eq!(grid.cell_distance(GridCoord::new(0, 0, 0)), Some(4));
    }

    #[test]
    fn test_axis_aligned_box_rasterization() {
        let mut grid = test_grid();
        grid.add_box(WorldPoint::ZERO, WorldPoint::new(0.2, 0.2, 0.2));

        let center = grid.world_to_grid(WorldPoint::ZERO);
        assert!(grid.is_occupied(center));
        assert_eq!(grid.distance(center), Some(0.0));

        // Half-extent 0.1 at 0.05 resolution: centers at +/-2 cells are in
        assert!(grid.is_occupied(center.offset(2, 0, 0)));
        assert!(!grid.is_occupied(center.offset(3, 0, 0)));
    }

    #[test]
    fn test_rotated_cuboid_rasterization() {
        let mut grid = test_grid();
        // Long thin box rotated 45 degrees about Z
        let pose = Pose3::new(WorldPoint::ZERO, Quaternion::from_yaw(FRAC_PI_4));
        grid.add_cuboid(pose, WorldPoint::new(0.4, 0.05, 0.05));

        // A point along the rotated long axis is inside
        let along = WorldPoint::new(0.2, 0.2, 0.0);
        assert!(grid.is_occupied(grid.world_to_grid(along)));

        // The same offset along the unrotated axis is outside the thin box
        let off = WorldPoint::new(0.3, 0.0, 0.0);
        assert!(!grid.is_occupied(grid.world_to_grid(off)));
    }

    #[test]
    fn test_degenerate_cuboid_inserts_nothing() {
        let mut grid = test_grid();
        grid.add_cuboid(Pose3::identity(), WorldPoint::new(0.0, 0.1, 0.1));
        assert_eq!(grid.occupied_cells().count(), 0);
    }

    #[test]
    fn test_voxels_in_box_returns_occupied_only() {
        let mut grid = test_grid();
        grid.add_box(WorldPoint::ZERO, WorldPoint::new(0.1, 0.1, 0.1));

        // Query box covering the obstacle and a lot of free space
        let voxels = grid.voxels_in_box(Pose3::identity(), WorldPoint::new(1.0, 1.0, 1.0));
        assert!(!voxels.is_empty());
        for v in &voxels {
            assert!(grid.is_occupied(grid.world_to_grid(*v)));
        }

        // Query box away from the obstacle is empty
        let far = Pose3::from_position(WorldPoint::new(0.7, 0.7, 0.7));
        assert!(grid
            .voxels_in_box(far, WorldPoint::new(0.2, 0.2, 0.2))
            .is_empty());
    }

    #[test]
    fn test_occupied_voxels_lazy_prefix() {
        let mut grid = test_grid();
        grid.add_box(WorldPoint::ZERO, WorldPoint::new(0.2, 0.2, 0.2));

        let total = grid.occupied_voxels().count();
        assert!(total > 0);
        // Early abort, then restart: same contents, no side effects
        let prefix: Vec<_> = grid.occupied_voxels().take(3).collect();
        assert_eq!(prefix.len(), 3.min(total));
        assert_eq!(grid.occupied_voxels().count(), total);
    }

    #[test]
    fn test_world_bounds_cover_all_cell_centers() {
        let grid = test_grid();
        let bounds = grid.world_bounds();
        assert!(bounds.contains(grid.grid_to_world(GridCoord::new(0, 0, 0))));
        assert!(bounds.contains(grid.grid_to_world(GridCoord::new(39, 39, 39))));
    }

    #[test]
    fn test_set_reference_frame() {
        let mut grid = test_grid();
        grid.set_reference_frame("base_link");
        assert_eq!(grid.reference_frame(), "base_link");
    }
}
