//! Occupancy grid storage and update mechanisms.
//!
//! - [`GridConfig`]: geometry and propagation configuration
//! - [`OccupancyGrid`]: the collision-checking substrate itself

mod config;
mod occupancy;

pub use config::{ConfigError, GridConfig};
pub use occupancy::OccupancyGrid;
