//! The controller-owned rover state aggregate.

use super::{ArmJoint, WheelId};

/// All mutable simulation state the controller owns.
///
/// Spin, steer and joint angles live here rather than on the scene nodes;
/// the controller updates this aggregate each tick and pushes it to the
/// scene graph as an explicit output step. This keeps simulation state
/// independent of rendering-node lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoverState {
    /// Accumulated rolling angle per wheel (radians, unbounded; wraps
    /// implicitly when rendered modulo 2π). Indexed by
    /// [`WheelId::spin_index`].
    pub spin: [f32; 6],
    /// Steer angle per corner wheel (radians, clamped to ±π/4).
    /// Indexed by [`WheelId::steer_index`].
    pub steer: [f32; 4],
    /// Arm joint angles (radians, clamped to per-joint bounds).
    /// Indexed by [`ArmJoint::index`].
    pub joints: [f32; 5],
    /// Ticks elapsed since the controller was created.
    pub tick: u64,
}

impl RoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean absolute corner steer angle, used by the pivot-turn engage
    /// check.
    #[inline]
    pub fn mean_abs_steer(&self) -> f32 {
        self.steer.iter().map(|a| a.abs()).sum::<f32>() / self.steer.len() as f32
    }

    #[inline]
    pub fn spin_of(&self, wheel: WheelId) -> f32 {
        self.spin[wheel.spin_index()]
    }

    #[inline]
    pub fn steer_of(&self, wheel: WheelId) -> Option<f32> {
        wheel.steer_index().map(|i| self.steer[i])
    }

    #[inline]
    pub fn joint_of(&self, joint: ArmJoint) -> f32 {
        self.joints[joint.index()]
    }
}
