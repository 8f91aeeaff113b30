// Axis-angle rotation for camera orientation.
//
// Applies the Rodrigues formula directly rather than building a matrix,
// since a camera rotates one direction per primary ray.

use glam::Vec3;

/// A rotation of `degrees` about a unit `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    axis: Vec3,
    sin: f32,
    cos: f32,
}

impl AxisAngle {
    /// The rotation that leaves every vector unchanged.
    pub const IDENTITY: AxisAngle = AxisAngle {
        axis: Vec3::Y,
        sin: 0.0,
        cos: 1.0,
    };

    /// Create a rotation about `axis` by `degrees`.
    ///
    /// The axis is normalized here. A zero-length axis yields the identity
    /// rotation since it does not define a plane of rotation.
    pub fn from_degrees(axis: Vec3, degrees: f32) -> Self {
        match axis.try_normalize() {
            Some(axis) => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                Self { axis, sin, cos }
            }
            None => Self::IDENTITY,
        }
    }

    /// Rotate a vector.
    ///
    /// v_rot = v cos(t) + (k x v) sin(t) + k (k . v) (1 - cos(t))
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let k = self.axis;
        v * self.cos + k.cross(v) * self.sin + k * k.dot(v) * (1.0 - self.cos)
    }

    /// Returns true if this rotation leaves vectors unchanged.
    pub fn is_identity(&self) -> bool {
        self.sin == 0.0 && self.cos == 1.0
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rotation_quarter_turn_about_y() {
        // 90 degree rotation around Y axis
        let rot = AxisAngle::from_degrees(Vec3::Y, 90.0);
        assert_close(rot.rotate(Vec3::Z), Vec3::X);
        assert_close(rot.rotate(Vec3::X), Vec3::NEG_Z);
        assert_close(rot.rotate(Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_rotation_matches_quaternion() {
        let axis = Vec3::new(1.0, 2.0, -0.5).normalize();
        let rot = AxisAngle::from_degrees(axis, 37.0);
        let quat = Quat::from_axis_angle(axis, 37.0_f32.to_radians());

        for v in [Vec3::X, Vec3::new(0.3, -4.0, 2.0), Vec3::new(-1.0, 1.0, 1.0)] {
            assert_close(rot.rotate(v), quat * v);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rot = AxisAngle::from_degrees(Vec3::new(0.0, 1.0, 1.0), 123.0);
        let v = Vec3::new(2.0, -1.0, 0.5);
        assert!((rot.rotate(v).length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_unnormalized_axis() {
        let a = AxisAngle::from_degrees(Vec3::new(0.0, 10.0, 0.0), 45.0);
        let b = AxisAngle::from_degrees(Vec3::Y, 45.0);
        assert_close(a.rotate(Vec3::Z), b.rotate(Vec3::Z));
    }

    #[test]
    fn test_degenerate_rotations_are_identity() {
        assert!(AxisAngle::from_degrees(Vec3::ZERO, 90.0).is_identity());
        assert!(AxisAngle::from_degrees(Vec3::X, 0.0).is_identity());
        assert!(AxisAngle::default().is_identity());

        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(AxisAngle::IDENTITY.rotate(v), v);
    }
}
