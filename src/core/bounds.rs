//! Axis-aligned bounding box for spatial operations.
//!
//! [`Aabb`] represents a rectangular volume in 3D space, used for:
//! - Grid extent reporting (what volume does the grid cover)
//! - Cuboid rasterization (candidate cell range of a rotated box)
//! - Spatial queries (is a point inside a region)

use super::point::WorldPoint;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z)
    pub min: WorldPoint,
    /// Maximum corner (largest x, y, z)
    pub max: WorldPoint,
}

impl Aabb {
    /// Create a new bounding box from min and max corners
    #[inline]
    pub const fn new(min: WorldPoint, max: WorldPoint) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty box has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: WorldPoint::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: WorldPoint::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include a point
    pub fn expand_to_include(&mut self, point: WorldPoint) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Check if a point is inside the box (inclusive on both corners)
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Center of the box
    #[inline]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Extent of the box along each axis
    #[inline]
    pub fn size(&self) -> WorldPoint {
        self.max - self.min
    }

    /// The 8 corner vertices of the box
    pub fn vertices(&self) -> [WorldPoint; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            WorldPoint::new(lo.x, lo.y, lo.z),
            WorldPoint::new(hi.x, lo.y, lo.z),
            WorldPoint::new(lo.x, hi.y, lo.z),
            WorldPoint::new(hi.x, hi.y, lo.z),
            WorldPoint::new(lo.x, lo.y, hi.z),
            WorldPoint::new(hi.x, lo.y, hi.z),
            WorldPoint::new(lo.x, hi.y, hi.z),
            WorldPoint::new(hi.x, hi.y, hi.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expands_to_point() {
        let mut bounds = Aabb::empty();
        assert!(bounds.is_empty());
        bounds.expand_to_include(WorldPoint::new(1.0, -2.0, 3.0));
        assert!(!bounds.is_empty());
        assert_eq!(bounds.min, bounds.max);
    }

    #[test]
    fn test_expand_and_contains() {
        let mut bounds = Aabb::empty();
        bounds.expand_to_include(WorldPoint::new(-1.0, -1.0, -1.0));
        bounds.expand_to_include(WorldPoint::new(2.0, 3.0, 1.0));

        assert!(bounds.contains(WorldPoint::new(0.0, 0.0, 0.0)));
        assert!(bounds.contains(WorldPoint::new(2.0, 3.0, 1.0)));
        assert!(!bounds.contains(WorldPoint::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn test_center_and_size() {
        let bounds = Aabb::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(2.0, 4.0, 6.0),
        );
        assert_eq!(bounds.center(), WorldPoint::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.size(), WorldPoint::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_vertices_span_box() {
        let bounds = Aabb::new(
            WorldPoint::new(-1.0, -1.0, -1.0),
            WorldPoint::new(1.0, 1.0, 1.0),
        );
        let verts = bounds.vertices();
        assert_eq!(verts.len(), 8);
        for v in verts {
            assert!(bounds.contains(v));
        }
    }
}
