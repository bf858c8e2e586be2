//! Drive and steering control.
//!
//! Maps the per-tick command onto impulses applied to the chassis body
//! and target angles for the four steerable wheel carriers. Steering has
//! three coupled modes:
//!
//! - **Moving turn** (throttle and steer both held): yaw torque plus an
//!   asymmetric Ackermann-suggestive wheel pose: the wheels on the
//!   inside of the turn deflect further than the outside pair.
//! - **Pivot turn** (steer held, no throttle): two phases. The corner
//!   wheels first crab into a symmetric in-place configuration; only once
//!   the mean deflection passes the engage threshold does the (amplified)
//!   yaw torque start. A skid-steer rover needs its wheels pointed before
//!   an in-place spin is efficient, and the align-then-spin shape is kept
//!   deliberately.
//! - **Idle** (no steer): carriers decay back to center.
//!
//! Steer angles are clamped to ±[`MAX_STEER_ANGLE`] after every update;
//! nothing writes them past the clamp.

use crate::config::{DriveConfig, MAX_STEER_ANGLE};
use crate::core::math::{approach, lerp_toward};
use crate::core::types::{BodySample, RoverState, WheelId};
use crate::io::PhysicsBody;
use nalgebra::Vector3;

use super::input::DriveCommand;

pub struct DriveController {
    config: DriveConfig,
}

impl DriveController {
    pub fn new(config: DriveConfig) -> Self {
        Self { config }
    }

    /// Run one tick of drive and steering.
    ///
    /// Applies at most one linear impulse and at most one torque impulse
    /// to the body, and moves the corner steer angles in `state` toward
    /// their mode-dependent targets.
    pub fn update(
        &self,
        state: &mut RoverState,
        cmd: &DriveCommand,
        sample: &BodySample,
        body: &mut dyn PhysicsBody,
    ) {
        if cmd.throttle != 0 {
            let impulse = sample.forward() * self.config.move_speed * cmd.throttle as f32;
            if impulse != Vector3::zeros() {
                body.apply_impulse(impulse, true);
            }
        }

        match (cmd.throttle, cmd.steer) {
            (_, 0) => self.relax_steer(state),
            (0, steer) => self.pivot_turn(state, steer, body),
            (throttle, steer) => self.moving_turn(state, throttle, steer, body),
        }

        for angle in &mut state.steer {
            *angle = angle.clamp(-MAX_STEER_ANGLE, MAX_STEER_ANGLE);
        }
    }

    /// Moving turn: immediate yaw torque, turn sense reversed in reverse,
    /// carriers lerping toward asymmetric targets.
    fn moving_turn(
        &self,
        state: &mut RoverState,
        throttle: i8,
        steer: i8,
        body: &mut dyn PhysicsBody,
    ) {
        let torque_y = -self.config.rot_speed * steer as f32 * throttle.signum() as f32;
        body.apply_torque_impulse(Vector3::new(0.0, torque_y, 0.0), true);

        for (i, wheel) in WheelId::CORNERS.iter().enumerate() {
            let target = self.moving_turn_target(*wheel, steer);
            state.steer[i] = lerp_toward(state.steer[i], target, self.config.steer_engage_lerp);
        }
    }

    /// Target angle for one carrier during a moving turn. Front wheels
    /// point into the turn, rear wheels counter-rotate; the inside pair
    /// takes the full deflection, the outside pair a reduced one.
    fn moving_turn_target(&self, wheel: WheelId, steer: i8) -> f32 {
        let inner = wheel.is_left() == (steer < 0);
        let magnitude = if inner {
            MAX_STEER_ANGLE
        } else {
            MAX_STEER_ANGLE * self.config.steer_outer_ratio
        };
        let sign = (if wheel.is_front() { -steer } else { steer }) as f32;
        sign * magnitude
    }

    /// Pivot turn: crab the carriers into the in-place pose, then spin.
    fn pivot_turn(&self, state: &mut RoverState, steer: i8, body: &mut dyn PhysicsBody) {
        for (i, wheel) in WheelId::CORNERS.iter().enumerate() {
            let sign = (if wheel.is_front() { -steer } else { steer }) as f32;
            state.steer[i] = approach(
                state.steer[i],
                sign * MAX_STEER_ANGLE,
                self.config.pivot_align_rate,
            );
        }

        if state.mean_abs_steer() > self.config.pivot_engage_fraction * MAX_STEER_ANGLE {
            let torque_y = -self.config.rot_speed * self.config.pivot_torque_gain * steer as f32;
            body.apply_torque_impulse(Vector3::new(0.0, torque_y, 0.0), true);
        }
    }

    /// No steer input: carriers decay back to center.
    fn relax_steer(&self, state: &mut RoverState) {
        for angle in &mut state.steer {
            *angle = lerp_toward(*angle, 0.0, self.config.steer_return_lerp);
        }
    }
}
