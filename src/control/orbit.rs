//! Orbit-camera follow.

use crate::config::CameraConfig;
use crate::core::types::BodySample;
use nalgebra::Vector3;

/// Keeps the orbit-control look-at target centered on the rover.
///
/// Purely derivative of the body sample: target = translation raised by
/// the configured follow height. No bounds, no state.
pub struct OrbitFollow {
    follow_height: f32,
}

impl OrbitFollow {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            follow_height: config.follow_height,
        }
    }

    #[inline]
    pub fn target(&self, sample: &BodySample) -> Vector3<f32> {
        sample.translation + Vector3::new(0.0, self.follow_height, 0.0)
    }
}
