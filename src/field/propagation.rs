//! Brushfire distance propagation engine.
//!
//! [`PropagationField`] keeps a dense f32 distance volume plus an occupancy
//! bitmap and propagates distances outward from newly occupied cells with a
//! FIFO wavefront over the 26-connected neighborhood, relaxing a cell only
//! when the new distance improves on the stored one. Step costs are
//! the Euclidean length of each step (resolution, resolution * sqrt(2),
//! resolution * sqrt(3)), so the result is a chamfer approximation of the
//! true Euclidean distance, clamped to the configured cutoff.

use super::DistanceField;
use crate::core::{GridCoord, WorldPoint};
use crate::grid::{ConfigError, GridConfig};
use std::collections::VecDeque;

/// Per-step offsets and unit costs for the 26-connected neighborhood.
/// Cost is in cells; multiplied by the resolution at propagation time.
fn neighborhood() -> [(i32, i32, i32, f32); 26] {
    let mut out = [(0, 0, 0, 0.0); 26];
    let mut i = 0;
    for dz in -1i32..=1 {
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                let cost = ((dx * dx + dy * dy + dz * dz) as f32).sqrt();
                out[i] = (dx, dy, dz, cost);
                i += 1;
            }
        }
    }
    out
}

/// Dense 3D distance field with incremental brushfire updates.
pub struct PropagationField {
    distances: Vec<f32>,
    occupied: Vec<bool>,
    num_cells: [usize; 3],
    resolution: f32,
    origin: WorldPoint,
    max_distance: f32,
    neighbors: [(i32, i32, i32, f32); 26],
}

impl PropagationField {
    /// Construct an engine with the geometry described by `config`.
    ///
    /// Fails if the configuration would produce an invalid volume.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let num_cells = config.num_cells();
        let size = num_cells[0] * num_cells[1] * num_cells[2];
        Ok(Self {
            distances: vec![config.max_distance; size],
            occupied: vec![false; size],
            num_cells,
            resolution: config.resolution,
            origin: config.origin,
            max_distance: config.max_distance,
            neighbors: neighborhood(),
        })
    }

    /// Flat index for an in-bounds coordinate
    #[inline]
    fn index_of(&self, cell: GridCoord) -> Option<usize> {
        let [nx, ny, nz] = self.num_cells;
        if cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && (cell.x as usize) < nx
            && (cell.y as usize) < ny
            && (cell.z as usize) < nz
        {
            Some((cell.z as usize * ny + cell.y as usize) * nx + cell.x as usize)
        } else {
            None
        }
    }

    /// Propagate distances outward from the given seed cells.
    ///
    /// A cell is only rewritten when the new distance improves on the stored
    /// one, so incremental insertion never increases any distance.
    fn propagate(&mut self, seeds: &[GridCoord]) {
        let mut queue: VecDeque<(GridCoord, f32)> = VecDeque::with_capacity(seeds.len() * 4);
        for &seed in seeds {
            queue.push_back((seed, 0.0));
        }

        while let Some((cell, dist)) = queue.pop_front() {
            for (dx, dy, dz, cost) in self.neighbors {
                let neighbor = cell.offset(dx, dy, dz);
                let new_dist = dist + cost * self.resolution;
                if new_dist > self.max_distance {
                    continue;
                }
                if let Some(idx) = self.index_of(neighbor) {
                    if new_dist < self.distances[idx] {
                        self.distances[idx] = new_dist;
                        queue.push_back((neighbor, new_dist));
                    }
                }
            }
        }
    }
}

impl DistanceField for PropagationField {
    fn num_cells(&self) -> [usize; 3] {
        self.num_cells
    }

    fn origin(&self) -> WorldPoint {
        self.origin
    }

    fn resolution(&self) -> f32 {
        self.resolution
    }

    fn max_distance(&self) -> f32 {
        self.max_distance
    }

    fn reset(&mut self) {
        self.distances.fill(self.max_distance);
        self.occupied.fill(false);
    }

    fn distance_from_cell(&self, cell: GridCoord) -> Option<f32> {
        self.index_of(cell).map(|i| self.distances[i])
    }

    fn is_occupied(&self, cell: GridCoord) -> bool {
        self.index_of(cell).map_or(false, |i| self.occupied[i])
    }

    fn add_points(&mut self, points: &[WorldPoint]) {
        let mut seeds = Vec::with_capacity(points.len());
        for &point in points {
            let cell = self.world_to_grid(point);
            if let Some(idx) = self.index_of(cell) {
                self.occupied[idx] = true;
                self.distances[idx] = 0.0;
                seeds.push(cell);
            }
        }
        self.propagate(&seeds);
    }
}
