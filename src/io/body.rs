//! Physics-body boundary trait.

use crate::core::types::BodySample;
use nalgebra::{UnitQuaternion, Vector3};

/// The rigid-body surface the controller is allowed to touch.
///
/// The body is owned by the physics engine; the controller is its sole
/// mutator and only through the two impulse calls, never direct position
/// writes, so motion stays physically plausible. Everything else is
/// read-only.
pub trait PhysicsBody {
    /// World-space position of the body origin.
    fn translation(&self) -> Vector3<f32>;
    /// World-space orientation.
    fn rotation(&self) -> UnitQuaternion<f32>;
    /// Linear velocity.
    fn linvel(&self) -> Vector3<f32>;
    /// Angular velocity.
    fn angvel(&self) -> Vector3<f32>;
    /// Apply an instantaneous linear impulse, optionally waking the body.
    fn apply_impulse(&mut self, impulse: Vector3<f32>, wake: bool);
    /// Apply an instantaneous angular impulse, optionally waking the body.
    fn apply_torque_impulse(&mut self, torque: Vector3<f32>, wake: bool);

    /// Read the full per-tick kinematic snapshot.
    fn sample(&self) -> BodySample {
        BodySample {
            translation: self.translation(),
            rotation: self.rotation(),
            linvel: self.linvel(),
            angvel: self.angvel(),
        }
    }
}
