//! Wheel spin estimation.
//!
//! Visual wheel rotation is derived from the body's actual motion rather
//! than from the drive impulses: for each wheel, the rigid-body velocity
//! at the wheel's contact point is projected onto the chassis forward
//! vector and integrated through the rolling-without-slipping relation
//! `Δspin = v · dt / r`. Wheels therefore spin correctly when the rover
//! is pushed, slides downhill, or pivots in place.
//!
//! The estimator runs every Nth tick (`spin_update_stride`) to bound its
//! cost; the integration step is scaled by the stride so the average spin
//! rate is unchanged. Pick the stride small enough that the stepping is
//! not visible at the target frame rate.

use crate::config::WheelConfig;
use crate::core::types::{BodySample, RoverState, WheelId};
use crate::io::RoverVisuals;
use log::warn;

pub struct WheelSpinEstimator {
    radius: f32,
    stride: u32,
}

impl WheelSpinEstimator {
    /// `config` must have passed [`crate::config::RoverConfig::validate`]:
    /// the radius is a divisor below.
    ///
    /// # Panics
    ///
    /// Panics on a non-positive radius rather than silently integrating
    /// infinite spin.
    pub fn new(config: &WheelConfig) -> Self {
        assert!(
            config.radius > 0.0,
            "wheel radius must be positive, got {}",
            config.radius
        );
        Self {
            radius: config.radius,
            stride: config.spin_update_stride.max(1),
        }
    }

    /// Integrate spin for all six wheels, on update ticks only.
    ///
    /// Reads the body sample and wheel positions; writes nothing but
    /// `state.spin`. A failed wheel-position read is logged and that
    /// wheel skipped for the frame.
    pub fn update(
        &self,
        state: &mut RoverState,
        sample: &BodySample,
        visuals: &dyn RoverVisuals,
        dt: f32,
    ) {
        if state.tick % self.stride as u64 != 0 {
            return;
        }

        let forward = sample.forward();
        let step = dt * self.stride as f32;

        for wheel in WheelId::ALL {
            let position = match visuals.wheel_world_position(wheel) {
                Ok(position) => position,
                Err(e) => {
                    warn!("skipping spin update for {:?}: {}", wheel, e);
                    continue;
                }
            };
            let signed_speed = sample.point_velocity(position).dot(&forward);
            state.spin[wheel.spin_index()] += signed_speed * step / self.radius;
        }
    }
}
