//! Deterministic mock implementations of the io boundaries.
//!
//! `MockBody` is a minimal impulse-integrating rigid body and `MockVisuals`
//! a recording scene adapter. Together they let the full controller
//! pipeline run headless, in unit/integration tests and in the demo node,
//! with exact, inspectable physics.

use crate::core::types::{ArmJoint, BodySample, WheelId};
use crate::error::{Result, RoverError};
use crate::io::body::PhysicsBody;
use crate::io::scene::RoverVisuals;
use nalgebra::{UnitQuaternion, Vector3};

/// A rigid body with unit-diagonal inertia semantics: impulses divide by
/// mass into linear velocity, torque impulses divide by `inertia` into
/// angular velocity. No gravity, no contacts.
#[derive(Debug, Clone)]
pub struct MockBody {
    pub translation: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub linvel: Vector3<f32>,
    pub angvel: Vector3<f32>,
    pub mass: f32,
    pub inertia: f32,
    /// Every impulse applied, in order.
    pub applied_impulses: Vec<Vector3<f32>>,
    /// Every torque impulse applied, in order.
    pub applied_torques: Vec<Vector3<f32>>,
}

impl MockBody {
    pub fn new() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            linvel: Vector3::zeros(),
            angvel: Vector3::zeros(),
            mass: 1.0,
            inertia: 1.0,
            applied_impulses: Vec::new(),
            applied_torques: Vec::new(),
        }
    }

    /// Integrate position and orientation forward by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.translation += self.linvel * dt;
        self.rotation = UnitQuaternion::from_scaled_axis(self.angvel * dt) * self.rotation;
    }

    /// Sum of all linear impulses applied so far.
    pub fn total_impulse(&self) -> Vector3<f32> {
        self.applied_impulses.iter().sum()
    }

    /// Sum of all torque impulses applied so far.
    pub fn total_torque(&self) -> Vector3<f32> {
        self.applied_torques.iter().sum()
    }
}

impl Default for MockBody {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsBody for MockBody {
    fn translation(&self) -> Vector3<f32> {
        self.translation
    }

    fn rotation(&self) -> UnitQuaternion<f32> {
        self.rotation
    }

    fn linvel(&self) -> Vector3<f32> {
        self.linvel
    }

    fn angvel(&self) -> Vector3<f32> {
        self.angvel
    }

    fn apply_impulse(&mut self, impulse: Vector3<f32>, _wake: bool) {
        self.linvel += impulse / self.mass;
        self.applied_impulses.push(impulse);
    }

    fn apply_torque_impulse(&mut self, torque: Vector3<f32>, _wake: bool) {
        self.angvel += torque / self.inertia;
        self.applied_torques.push(torque);
    }
}

/// A headless scene graph: records pushed angles and synthesizes wheel
/// world positions from the body pose and a fixed body-local wheel layout.
#[derive(Debug, Clone)]
pub struct MockVisuals {
    /// Body-local wheel offsets in spin-array order.
    offsets: [Vector3<f32>; 6],
    /// Pose the wheel positions are derived from; the host keeps it in
    /// sync with the body (see [`MockVisuals::track`]).
    pub body_translation: Vector3<f32>,
    pub body_rotation: UnitQuaternion<f32>,
    /// Last pushed angles, indexed like the RoverState arrays.
    pub wheel_spin: [f32; 6],
    pub wheel_steer: [f32; 4],
    pub joint_angles: [f32; 5],
    pub orbit_target: Option<Vector3<f32>>,
    /// When set, every wheel position read fails, simulating nodes
    /// detached mid-frame.
    pub fail_reads: bool,
}

impl MockVisuals {
    /// Build from body-local wheel positions (e.g.
    /// [`crate::config::WheelConfig::positions`]).
    pub fn new(positions: [[f32; 3]; 6]) -> Self {
        Self {
            offsets: positions.map(Vector3::from),
            body_translation: Vector3::zeros(),
            body_rotation: UnitQuaternion::identity(),
            wheel_spin: [0.0; 6],
            wheel_steer: [0.0; 4],
            joint_angles: [0.0; 5],
            orbit_target: None,
            fail_reads: false,
        }
    }

    /// Follow the body pose so wheel positions stay rigidly attached.
    pub fn track(&mut self, sample: &BodySample) {
        self.body_translation = sample.translation;
        self.body_rotation = sample.rotation;
    }
}

impl Default for MockVisuals {
    fn default() -> Self {
        Self::new(crate::config::WheelConfig::default().positions)
    }
}

impl RoverVisuals for MockVisuals {
    fn wheel_world_position(&self, wheel: WheelId) -> Result<Vector3<f32>> {
        if self.fail_reads {
            return Err(RoverError::VisualRead(format!(
                "{:?} node detached",
                wheel
            )));
        }
        Ok(self.body_translation + self.body_rotation * self.offsets[wheel.spin_index()])
    }

    fn set_wheel_spin(&mut self, wheel: WheelId, angle: f32) {
        self.wheel_spin[wheel.spin_index()] = angle;
    }

    fn set_wheel_steer(&mut self, wheel: WheelId, angle: f32) {
        if let Some(i) = wheel.steer_index() {
            self.wheel_steer[i] = angle;
        }
    }

    fn set_joint_angle(&mut self, joint: ArmJoint, angle: f32) {
        self.joint_angles[joint.index()] = angle;
    }

    fn set_orbit_target(&mut self, target: Vector3<f32>) {
        self.orbit_target = Some(target);
    }
}
