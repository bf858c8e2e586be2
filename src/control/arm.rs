//! Manipulator arm control.
//!
//! A discrete stepper, deliberately unlike the wheel-steer lerp: each
//! held direction key moves its joint by a fixed increment per tick,
//! guarded by the joint's bounds. Both directions of one joint are
//! evaluated independently, so with both keys held the joint only moves
//! away from a bound it is resting on.

use crate::config::{ArmConfig, JointBounds};
use crate::core::types::{ArmJoint, RoverState};

use super::input::DriveCommand;

pub struct ArmController {
    step: f32,
    bounds: [JointBounds; 5],
}

impl ArmController {
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            step: config.step,
            bounds: config.bounds(),
        }
    }

    /// Step each joint per the command. Angles never leave their bounds,
    /// no matter how long a key is held.
    pub fn update(&self, state: &mut RoverState, cmd: &DriveCommand) {
        for joint in ArmJoint::ALL {
            let i = joint.index();
            let bounds = self.bounds[i];
            let direction = cmd.arm[i];
            let angle = &mut state.joints[i];

            if direction.increase && *angle < bounds.max {
                *angle = (*angle + self.step).min(bounds.max);
            }
            if direction.decrease && *angle > bounds.min {
                *angle = (*angle - self.step).max(bounds.min);
            }
        }
    }
}
