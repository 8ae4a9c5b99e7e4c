//! 3D pose type for obstacle placement.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use super::point::WorldPoint;
use serde::{Deserialize, Serialize};

/// A unit quaternion representing a 3D rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    /// X vector component
    pub x: f32,
    /// Y vector component
    pub y: f32,
    /// Z vector component
    pub z: f32,
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a quaternion from raw components (normalized on construction)
    #[inline]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }.normalized()
    }

    /// Rotation of `angle` radians about `axis` (axis need not be unit length)
    pub fn from_axis_angle(axis: WorldPoint, angle: f32) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            w: cos,
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
        }
    }

    /// Rotation about the Z axis (heading), CCW positive
    #[inline]
    pub fn from_yaw(yaw: f32) -> Self {
        Self::from_axis_angle(WorldPoint::new(0.0, 0.0, 1.0), yaw)
    }

    /// Normalized copy; identity if the quaternion is degenerate
    pub fn normalized(&self) -> Self {
        let norm = (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if norm > f32::EPSILON {
            Self {
                w: self.w / norm,
                x: self.x / norm,
                y: self.y / norm,
                z: self.z / norm,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Rotate a vector by this quaternion.
    ///
    /// Uses v' = v + 2w(q x v) + 2(q x (q x v)), cheaper than the full
    /// quaternion sandwich product.
    pub fn rotate(&self, v: WorldPoint) -> WorldPoint {
        let q = WorldPoint::new(self.x, self.y, self.z);
        let t = q.cross(&v) * 2.0;
        v + t * self.w + q.cross(&t)
    }

    /// Rotate a vector by the inverse of this quaternion
    #[inline]
    pub fn inverse_rotate(&self, v: WorldPoint) -> WorldPoint {
        self.conjugate().rotate(v)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A 3D pose: position plus orientation.
///
/// Used to place oriented cuboid obstacles and to express box-local
/// point-in-box tests.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose3 {
    /// Position in meters
    pub position: WorldPoint,
    /// Orientation as a unit quaternion
    pub orientation: Quaternion,
}

impl Pose3 {
    /// Create a new pose
    #[inline]
    pub fn new(position: WorldPoint, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Identity pose (origin, no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Pose at `position` with identity orientation
    #[inline]
    pub fn from_position(position: WorldPoint) -> Self {
        Self {
            position,
            orientation: Quaternion::IDENTITY,
        }
    }

    /// Transform a point from this pose's local frame to the world frame
    #[inline]
    pub fn transform_point(&self, point: WorldPoint) -> WorldPoint {
        self.position + self.orientation.rotate(point)
    }

    /// Transform a point from the world frame to this pose's local frame
    #[inline]
    pub fn inverse_transform_point(&self, point: WorldPoint) -> WorldPoint {
        self.orientation.inverse_rotate(point - self.position)
    }
}
