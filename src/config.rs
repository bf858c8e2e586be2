//! Configuration loading and startup validation.
//!
//! All tuning constants of the controller live here rather than in the
//! code: every constant that changes the driving feel (speeds, lerp
//! rates, the pivot thresholds, the wheel layout) is a config field so
//! retuning never means editing the controller. Defaults reproduce the
//! shipped tuning. Every section can be overridden from a TOML file
//! (`mangala.toml`).

use crate::error::{Result, RoverError};
use serde::Deserialize;
use std::f32::consts::FRAC_PI_4;
use std::path::Path;

/// Maximum steer-carrier deflection (radians). Steer angles are clamped
/// to ±this after every update.
pub const MAX_STEER_ANGLE: f32 = FRAC_PI_4;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RoverConfig {
    pub drive: DriveConfig,
    pub wheels: WheelConfig,
    pub arm: ArmConfig,
    pub camera: CameraConfig,
}

/// Drive and steering tuning.
///
/// The lerp factors and the pivot align rate are per-tick quantities
/// (frame-rate coupled), not per-second rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Linear impulse magnitude applied per tick of held throttle.
    pub move_speed: f32,
    /// Torque impulse magnitude applied per tick of held steer.
    pub rot_speed: f32,
    /// Per-tick exponential factor driving corner wheels toward their
    /// moving-turn target angles.
    pub steer_engage_lerp: f32,
    /// Per-tick exponential factor returning corner wheels to center
    /// when no steer key is held.
    pub steer_return_lerp: f32,
    /// Fraction of the full steer angle the wheels on the outside of a
    /// moving turn target (inner wheels target the full angle).
    pub steer_outer_ratio: f32,
    /// Rate (rad/tick) at which corner wheels align to the crab
    /// configuration before an in-place turn.
    pub pivot_align_rate: f32,
    /// Torque gain applied during an in-place turn, relative to the
    /// moving-turn torque.
    pub pivot_torque_gain: f32,
    /// Fraction of the full steer angle the mean corner deflection must
    /// reach before in-place torque is applied.
    pub pivot_engage_fraction: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            rot_speed: 0.3,
            steer_engage_lerp: 0.05,
            steer_return_lerp: 0.1,
            steer_outer_ratio: 0.6,
            pivot_align_rate: 0.01,
            pivot_torque_gain: 1.5,
            pivot_engage_fraction: 0.8,
        }
    }
}

/// Wheel geometry and spin-estimator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Wheel radius in meters. Must be positive: the spin estimator
    /// divides by it.
    pub radius: f32,
    /// Run the spin estimator every Nth tick (N ≥ 1). Skipped ticks
    /// leave spin angles unchanged; the estimator scales its integration
    /// step by N so the average spin rate is preserved.
    pub spin_update_stride: u32,
    /// Body-local wheel positions [x, y, z] in spin-array order
    /// (FL, FR, ML, MR, RL, RR). Chassis forward is +Z, up is +Y,
    /// left is +X.
    pub positions: [[f32; 3]; 6],
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: 0.2625,
            spin_update_stride: 2,
            positions: [
                [1.05, 0.3, 1.1],
                [-1.05, 0.3, 1.1],
                [1.15, 0.3, -0.1],
                [-1.15, 0.3, -0.1],
                [1.05, 0.3, -1.2],
                [-1.05, 0.3, -1.2],
            ],
        }
    }
}

/// Inclusive angle bounds for one arm joint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JointBounds {
    pub min: f32,
    pub max: f32,
}

impl JointBounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Unbounded joint (no clamp ever engages).
    pub const fn free() -> Self {
        Self {
            min: f32::NEG_INFINITY,
            max: f32::INFINITY,
        }
    }
}

/// Manipulator arm settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Fixed per-tick joint increment (radians).
    pub step: f32,
    pub azimuth: JointBounds,
    pub shoulder: JointBounds,
    pub elbow: JointBounds,
    pub wrist_pitch: JointBounds,
    pub wrist_roll: JointBounds,
}

impl ArmConfig {
    /// Joint bounds in [`crate::core::types::ArmJoint`] index order.
    pub fn bounds(&self) -> [JointBounds; 5] {
        [
            self.azimuth,
            self.shoulder,
            self.elbow,
            self.wrist_pitch,
            self.wrist_roll,
        ]
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            step: 0.02,
            azimuth: JointBounds::new(-3.14, 0.0),
            shoulder: JointBounds::new(-1.3, 1.3),
            elbow: JointBounds::new(-5.7, -0.3),
            wrist_pitch: JointBounds::new(-1.0, 3.14),
            wrist_roll: JointBounds::free(),
        }
    }
}

/// Camera follow settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical offset of the orbit target above the body origin (meters).
    pub follow_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { follow_height: 1.0 }
    }
}

impl RoverConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RoverError::Config(format!("failed to read config file: {}", e)))?;
        let config: RoverConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reject invalid configuration before the control loop starts.
    ///
    /// A zero or negative wheel radius would make the spin estimator
    /// divide by zero; malformed joint bounds would make the arm clamp
    /// meaningless. Both are fatal here rather than surprises at tick
    /// time.
    pub fn validate(&self) -> Result<()> {
        let d = &self.drive;
        if !(self.wheels.radius > 0.0) || !self.wheels.radius.is_finite() {
            return Err(RoverError::Config(format!(
                "wheel radius must be positive and finite, got {}",
                self.wheels.radius
            )));
        }
        if self.wheels.spin_update_stride == 0 {
            return Err(RoverError::Config(
                "spin_update_stride must be at least 1".to_string(),
            ));
        }
        if !(d.move_speed > 0.0) || !(d.rot_speed > 0.0) {
            return Err(RoverError::Config(format!(
                "move_speed and rot_speed must be positive, got {} / {}",
                d.move_speed, d.rot_speed
            )));
        }
        for (name, lerp) in [
            ("steer_engage_lerp", d.steer_engage_lerp),
            ("steer_return_lerp", d.steer_return_lerp),
            ("steer_outer_ratio", d.steer_outer_ratio),
        ] {
            if !(lerp > 0.0 && lerp <= 1.0) {
                return Err(RoverError::Config(format!(
                    "{} must be in (0, 1], got {}",
                    name, lerp
                )));
            }
        }
        if !(d.pivot_align_rate > 0.0) {
            return Err(RoverError::Config(format!(
                "pivot_align_rate must be positive, got {}",
                d.pivot_align_rate
            )));
        }
        if !(d.pivot_engage_fraction > 0.0 && d.pivot_engage_fraction < 1.0) {
            return Err(RoverError::Config(format!(
                "pivot_engage_fraction must be in (0, 1), got {}",
                d.pivot_engage_fraction
            )));
        }
        if !(d.pivot_torque_gain > 0.0) {
            return Err(RoverError::Config(format!(
                "pivot_torque_gain must be positive, got {}",
                d.pivot_torque_gain
            )));
        }
        if !(self.arm.step > 0.0) {
            return Err(RoverError::Config(format!(
                "arm step must be positive, got {}",
                self.arm.step
            )));
        }
        for (joint, bounds) in [
            ("azimuth", self.arm.azimuth),
            ("shoulder", self.arm.shoulder),
            ("elbow", self.arm.elbow),
            ("wrist_pitch", self.arm.wrist_pitch),
            ("wrist_roll", self.arm.wrist_roll),
        ] {
            // `!(min <= max)` also rejects NaN bounds
            if !(bounds.min <= bounds.max) {
                return Err(RoverError::Config(format!(
                    "{} joint bounds malformed: min {} > max {}",
                    joint, bounds.min, bounds.max
                )));
            }
        }
        Ok(())
    }
}
