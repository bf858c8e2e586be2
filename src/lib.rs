//! MangalaRover - vehicle-dynamics controller for an interactive
//! Mars-rover simulation.
//!
//! The rover is a physics-driven chassis with six wheels and a five-joint
//! manipulator arm, teleoperated from the keyboard. This crate is the
//! per-frame controller: it maps held keys to impulses on the chassis
//! rigid body, derives visual wheel spin from the body's actual motion,
//! steers the corner wheel carriers through a three-mode state machine,
//! and steps the arm joints inside their bounds. Rendering, terrain and
//! the physics solver itself are external collaborators reached through
//! narrow traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      bin/                           │  ← Executables
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   overlay/                          │  ← Map presentation
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   control/                          │  ← The controller
//! │        (input, drive, wheels, arm, orbit)           │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Boundaries
//! │      (physics body, scene graph, mocks, chat)       │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Tick model
//!
//! Everything is single-threaded and cooperative. Once per animation
//! frame, after the physics engine has integrated the frame, the host
//! calls [`RoverController::tick`] with the frame's input snapshot and
//! delta-time. The controller samples the body once, applies impulses,
//! updates its [`RoverState`] aggregate, and pushes the aggregate to the
//! scene graph as an output step. If the body is not spawned yet the tick
//! is skipped wholesale.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Errors and configuration
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Layer 3: I/O boundaries (physics engine, scene graph, chat contract)
// ============================================================================
pub mod io;

// ============================================================================
// Layer 4: The vehicle-dynamics controller
// ============================================================================
pub mod control;

// ============================================================================
// Layer 5: Map-overlay presentation
// ============================================================================
pub mod overlay;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use config::{
    ArmConfig, CameraConfig, DriveConfig, JointBounds, RoverConfig, WheelConfig, MAX_STEER_ANGLE,
};
pub use control::{
    ArmController, DriveCommand, DriveController, InputSnapshot, JointStep, Key, OrbitFollow,
    RoverController, WheelSpinEstimator,
};
pub use crate::core::types::{ArmJoint, BodySample, RoverState, WheelId};
pub use error::{Result, RoverError};
pub use io::{MockBody, MockVisuals, PhysicsBody, RapierBody, RoverVisuals};
pub use overlay::{marker, OverlayMarker, Waypoint};
