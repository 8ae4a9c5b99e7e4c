//! Collision map input shape.
//!
//! A whole-scene snapshot as produced by an external perception or planning
//! pipeline: a flat list of occupied world points plus the frame they are
//! expressed in. [`crate::OccupancyGrid::update_from_collision_map`]
//! consumes exactly this shape.

use crate::core::WorldPoint;
use serde::{Deserialize, Serialize};

/// A complete scene description: occupied points in a named frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CollisionMap {
    /// Coordinate frame the points are expressed in
    pub frame_id: String,
    /// Occupied world points
    pub points: Vec<WorldPoint>,
}

impl CollisionMap {
    /// Create an empty collision map for the given frame
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            points: Vec::new(),
        }
    }

    /// Create a collision map from a point list
    pub fn from_points(frame_id: impl Into<String>, points: Vec<WorldPoint>) -> Self {
        Self {
            frame_id: frame_id.into(),
            points,
        }
    }

    /// Number of occupied points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the map carries no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_map_construction() {
        let map = CollisionMap::from_points(
            "map",
            vec![WorldPoint::new(1.0, 2.0, 3.0), WorldPoint::ZERO],
        );
        assert_eq!(map.frame_id, "map");
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert!(CollisionMap::new("odom").is_empty());
    }
}
