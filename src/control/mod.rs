//! The vehicle-dynamics controller.
//!
//! Per-tick pipeline: input mapping → drive/steer (impulses to the body,
//! steer targets to the state) → wheel-spin estimation → arm stepping →
//! orbit-target update → push the state aggregate to the scene graph.

pub mod arm;
pub mod drive;
pub mod input;
pub mod orbit;
pub mod rover;
pub mod wheels;

pub use arm::ArmController;
pub use drive::DriveController;
pub use input::{DriveCommand, InputSnapshot, JointStep, Key};
pub use orbit::OrbitFollow;
pub use rover::RoverController;
pub use wheels::WheelSpinEstimator;
