//! The per-tick controller pipeline.

use crate::config::RoverConfig;
use crate::core::types::{ArmJoint, RoverState, WheelId};
use crate::error::Result;
use crate::io::{PhysicsBody, RoverVisuals};
use nalgebra::Vector3;

use super::arm::ArmController;
use super::drive::DriveController;
use super::input::{DriveCommand, InputSnapshot};
use super::orbit::OrbitFollow;
use super::wheels::WheelSpinEstimator;

/// Owns the rover's simulation state and runs the whole control pipeline
/// once per frame.
///
/// Everything executes synchronously inside [`RoverController::tick`],
/// which the host invokes once per animation frame after the physics
/// engine has integrated the frame. If the rigid body is not available
/// yet the tick is skipped wholesale: no error, no partial update.
pub struct RoverController {
    state: RoverState,
    drive: DriveController,
    wheels: WheelSpinEstimator,
    arm: ArmController,
    orbit: OrbitFollow,
}

impl RoverController {
    /// Build the controller, rejecting invalid configuration before the
    /// control loop starts.
    pub fn new(config: RoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: RoverState::new(),
            drive: DriveController::new(config.drive.clone()),
            wheels: WheelSpinEstimator::new(&config.wheels),
            arm: ArmController::new(&config.arm),
            orbit: OrbitFollow::new(&config.camera),
        })
    }

    /// The controller-owned state aggregate.
    pub fn state(&self) -> &RoverState {
        &self.state
    }

    /// Run one simulation tick.
    ///
    /// `dt` is the frame delta-time in seconds. Order within the tick:
    /// sample body → drive/steer → wheel spin → arm → orbit target →
    /// push state to the scene graph.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        body: Option<&mut dyn PhysicsBody>,
        visuals: &mut dyn RoverVisuals,
        dt: f32,
    ) {
        // Not spawned yet: skip the tick entirely.
        let Some(body) = body else {
            return;
        };

        let cmd = DriveCommand::from_snapshot(input);
        let sample = body.sample();

        self.drive.update(&mut self.state, &cmd, &sample, body);
        self.wheels.update(&mut self.state, &sample, visuals, dt);
        self.arm.update(&mut self.state, &cmd);
        let orbit_target = self.orbit.target(&sample);

        self.push_visuals(visuals, orbit_target);
        self.state.tick += 1;
    }

    /// Output step: write the state aggregate to the scene graph.
    fn push_visuals(&self, visuals: &mut dyn RoverVisuals, orbit_target: Vector3<f32>) {
        for wheel in WheelId::ALL {
            visuals.set_wheel_spin(wheel, self.state.spin_of(wheel));
        }
        for (i, wheel) in WheelId::CORNERS.iter().enumerate() {
            visuals.set_wheel_steer(*wheel, self.state.steer[i]);
        }
        for joint in ArmJoint::ALL {
            visuals.set_joint_angle(joint, self.state.joint_of(joint));
        }
        visuals.set_orbit_target(orbit_target);
    }
}
