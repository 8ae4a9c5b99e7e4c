//! # Akasha-Grid: 3D Occupancy/Distance Grid for Motion Planning
//!
//! A spatial index that tracks, for every cell in a bounded volume, the
//! distance to the nearest obstacle, with fast bidirectional mapping between
//! continuous world coordinates and discrete grid indices. It is the
//! collision-checking substrate a search-based motion planner queries at
//! every expansion: O(1) distance lookups after an incremental update,
//! millions of queries per planning episode.
//!
//! ## Features
//!
//! - **Cell-center coordinate model**: `world = origin + index * resolution`
//!   with a documented round-half-up inverse
//! - **Pluggable propagation**: the grid depends on the [`DistanceField`]
//!   trait; [`PropagationField`] is the bundled 26-connected brushfire engine
//! - **Three insertion modes**: point clouds, oriented cuboids, and atomic
//!   whole-scene replacement from a [`CollisionMap`]
//! - **Read-only export surface**: lazy occupied-voxel and distance-slice
//!   iterators for external rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use akasha_grid::{GridConfig, OccupancyGrid};
//! use akasha_grid::core::WorldPoint;
//!
//! let config = GridConfig::centered(WorldPoint::new(2.0, 2.0, 2.0), 0.05);
//! let mut grid = OccupancyGrid::new(config).expect("valid geometry");
//!
//! grid.add_box(WorldPoint::ZERO, WorldPoint::new(0.2, 0.2, 0.2));
//!
//! // Obstacle cell reads 0.0; out-of-grid points read None, never a distance
//! assert_eq!(grid.distance_at(WorldPoint::ZERO), Some(0.0));
//! assert_eq!(grid.distance_at(WorldPoint::new(10.0, 10.0, 10.0)), None);
//! ```
//!
//! ## Coordinate Frame
//!
//! All world coordinates follow the ROS REP-103 convention (X-forward,
//! Y-left, Z-up, right-handed). The grid carries an opaque
//! `reference_frame` name for bookkeeping; it never interprets it.
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (GridCoord, WorldPoint, Pose3, Aabb)
//! - [`field`]: the [`DistanceField`] engine boundary and bundled engine
//! - [`grid`]: configuration and the [`OccupancyGrid`] itself
//! - [`io`]: collision-map input shape and obstacle-list file loader
//! - [`export`]: read-only rendering projections
//!
//! ## Threading
//!
//! All operations are synchronous call-and-return on the owning thread.
//! Queries take `&self`, mutation takes `&mut self`; sharing across planner
//! threads therefore requires a readers-writer wrapper, and a manual
//! reset-then-insert sequence must hold the write guard across both calls.
//! [`OccupancyGrid::update_from_collision_map`] does the pair inside one
//! call, so it is atomic with respect to queries by construction.

#![warn(missing_docs)]

pub mod core;
pub mod export;
pub mod field;
pub mod grid;
pub mod io;

// Re-export main types at crate root
pub use field::{DistanceField, PropagationField};
pub use grid::{ConfigError, GridConfig, OccupancyGrid};
pub use io::{CollisionMap, Obstacle, ObstacleFileError};
