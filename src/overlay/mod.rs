//! Map-overlay presentation math.
//!
//! The 2D map overlay draws the rover and an optional user-selected
//! way-point, with an arrow showing the bearing to the way-point relative
//! to the rover's heading. This module is pure presentation over state
//! the core already exposes (the body sample); it never feeds back into
//! control.

use crate::core::math::normalize_angle;
use crate::core::types::BodySample;
use serde::{Deserialize, Serialize};

/// A user-selected target position on the map plane (world X/Z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f32,
    pub z: f32,
}

impl Waypoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Whether the rover is within `tolerance` meters of the way-point
    /// on the map plane.
    pub fn is_reached(&self, sample: &BodySample, tolerance: f32) -> bool {
        let dx = self.x - sample.translation.x;
        let dz = self.z - sample.translation.z;
        dx * dx + dz * dz < tolerance * tolerance
    }
}

/// What the overlay draws for one way-point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayMarker {
    /// Way-point position on the map plane.
    pub x: f32,
    pub z: f32,
    /// Straight-line map distance from the rover (meters).
    pub distance: f32,
    /// Bearing to the way-point relative to the rover's heading,
    /// normalized to [-π, π]. Positive = to the rover's left.
    pub relative_bearing: f32,
}

/// Compute the overlay marker for a way-point given the current body
/// sample.
pub fn marker(sample: &BodySample, waypoint: &Waypoint) -> OverlayMarker {
    let dx = waypoint.x - sample.translation.x;
    let dz = waypoint.z - sample.translation.z;
    let world_bearing = dx.atan2(dz);

    OverlayMarker {
        x: waypoint.x,
        z: waypoint.z,
        distance: (dx * dx + dz * dz).sqrt(),
        relative_bearing: normalize_angle(world_bearing - sample.yaw()),
    }
}
