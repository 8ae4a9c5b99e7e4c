//! Read-only rendering projections of the grid.
//!
//! Everything here is a pure view over [`OccupancyGrid`] state for external
//! visualization (marker arrays, debug overlays). Nothing mutates the grid,
//! and the iterator-returning functions are lazy and restartable, so a
//! consumer may abort early without side effects.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::OccupancyGrid;

/// The 8 world-space corner vertices of the grid volume, for drawing the
/// grid's bounding wireframe.
pub fn bounds_vertices(grid: &OccupancyGrid) -> [WorldPoint; 8] {
    grid.world_bounds().vertices()
}

/// One z-plane of the distance field: (cell center, distance) for every cell
/// at layer `z`. An out-of-range layer yields an empty sequence.
pub fn distance_slice(
    grid: &OccupancyGrid,
    z: usize,
) -> impl Iterator<Item = (WorldPoint, f32)> + '_ {
    let [nx, ny, nz] = grid.grid_size();
    // Out-of-range layer: empty row range, no candidates generated
    let rows = if z < nz { ny } else { 0 };
    (0..rows)
        .flat_map(move |y| (0..nx).map(move |x| GridCoord::new(x as i32, y as i32, z as i32)))
        .filter_map(move |cell| {
            grid.distance(cell)
                .map(|d| (grid.grid_to_world(cell), d))
        })
}

/// Cells whose distance to the nearest obstacle is at most `threshold`,
/// with their distances. With `threshold = 0.0` this is the occupied set;
/// larger thresholds render inflation shells around obstacles.
pub fn cells_within(
    grid: &OccupancyGrid,
    threshold: f32,
) -> impl Iterator<Item = (WorldPoint, f32)> + '_ {
    grid.cells().filter_map(move |cell| {
        grid.distance(cell)
            .filter(|&d| d <= threshold)
            .map(|d| (grid.grid_to_world(cell), d))
    })
}
