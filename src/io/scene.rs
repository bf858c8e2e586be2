//! Scene-graph boundary trait.

use crate::core::types::{ArmJoint, WheelId};
use crate::error::Result;
use nalgebra::Vector3;

/// Adapter over the rover's visual nodes.
///
/// The scene graph owns the nodes; the controller owns the angles (in
/// [`crate::core::types::RoverState`]) and pushes them through this trait
/// as an output step at the end of each tick.
///
/// `wheel_world_position` is fallible: a node can be detached mid-frame.
/// The spin estimator treats a failed read as transient: it logs and
/// skips that wheel for the frame.
pub trait RoverVisuals {
    /// World-space position of a wheel's center.
    fn wheel_world_position(&self, wheel: WheelId) -> Result<Vector3<f32>>;

    /// Set a wheel's rolling angle (rotation about its axle).
    fn set_wheel_spin(&mut self, wheel: WheelId, angle: f32);

    /// Set a corner wheel carrier's steer angle (rotation about the
    /// vertical axis). Never called for the middle pair.
    fn set_wheel_steer(&mut self, wheel: WheelId, angle: f32);

    /// Set an arm joint's rotation about its hinge axis.
    fn set_joint_angle(&mut self, joint: ArmJoint, angle: f32);

    /// Recenter the orbit-control look-at target.
    fn set_orbit_target(&mut self, target: Vector3<f32>);
}
