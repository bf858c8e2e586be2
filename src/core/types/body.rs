//! Read-only rigid-body snapshot.

use nalgebra::{UnitQuaternion, Vector3};

/// A per-tick snapshot of the chassis rigid body.
///
/// Sampled once per tick from the physics engine, strictly after the
/// engine has integrated the frame (read-after-integrate). All controller
/// components read the same snapshot; the body itself is mutated only
/// through impulse application, never written directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    /// World-space position of the body origin (meters).
    pub translation: Vector3<f32>,
    /// World-space orientation.
    pub rotation: UnitQuaternion<f32>,
    /// Linear velocity (m/s).
    pub linvel: Vector3<f32>,
    /// Angular velocity (rad/s).
    pub angvel: Vector3<f32>,
}

impl BodySample {
    /// A body at rest at the origin.
    pub fn at_rest() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            linvel: Vector3::zeros(),
            angvel: Vector3::zeros(),
        }
    }

    /// Chassis forward unit vector: body-local +Z rotated into world space.
    #[inline]
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * Vector3::z()
    }

    /// Velocity of a world-space point rigidly attached to the body.
    ///
    /// `v_point = linvel + angvel × (point − center)`.
    #[inline]
    pub fn point_velocity(&self, point: Vector3<f32>) -> Vector3<f32> {
        self.linvel + self.angvel.cross(&(point - self.translation))
    }

    /// Heading about the vertical axis, in radians from world +Z.
    #[inline]
    pub fn yaw(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z)
    }
}

impl Default for BodySample {
    fn default() -> Self {
        Self::at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_forward_identity() {
        let sample = BodySample::at_rest();
        assert_relative_eq!(sample.forward(), Vector3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_forward_after_quarter_yaw() {
        let mut sample = BodySample::at_rest();
        sample.rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        // +90° about Y rotates +Z onto +X
        assert_relative_eq!(sample.forward(), Vector3::x(), epsilon = 1e-6);
        assert_relative_eq!(sample.yaw(), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_point_velocity_stationary_body() {
        let sample = BodySample::at_rest();
        let v = sample.point_velocity(Vector3::new(1.0, 0.3, -1.2));
        assert_relative_eq!(v, Vector3::zeros());
    }

    #[test]
    fn test_point_velocity_pure_translation() {
        let mut sample = BodySample::at_rest();
        sample.linvel = Vector3::new(0.0, 0.0, 1.0);
        let v = sample.point_velocity(Vector3::new(1.0, 0.3, 1.1));
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_point_velocity_pure_rotation() {
        let mut sample = BodySample::at_rest();
        // 1 rad/s yaw; a point 1m out on +X moves at 1 m/s along -Z
        sample.angvel = Vector3::new(0.0, 1.0, 0.0);
        let v = sample.point_velocity(Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }
}
