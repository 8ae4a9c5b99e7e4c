//! Core types for the akasha-grid library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: integer cell indices and metric coordinates
//! - [`Quaternion`] and [`Pose3`]: orientation and placement of obstacles
//! - [`Aabb`]: axis-aligned bounding volume

mod bounds;
mod point;
mod pose;

pub use bounds::Aabb;
pub use point::{GridCoord, WorldPoint};
pub use pose::{Pose3, Quaternion};
