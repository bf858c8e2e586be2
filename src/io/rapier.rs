//! rapier3d adapter for the physics-body boundary.

use crate::io::body::PhysicsBody;
use nalgebra::{UnitQuaternion, Vector3};
use rapier3d::dynamics::{RigidBodyHandle, RigidBodySet};

/// [`PhysicsBody`] backed by a rapier3d rigid body.
///
/// Borrows the body set for the duration of a tick; the handle is
/// validated once at construction.
pub struct RapierBody<'a> {
    bodies: &'a mut RigidBodySet,
    handle: RigidBodyHandle,
}

impl<'a> RapierBody<'a> {
    /// Wrap a body from the set. Returns `None` if the handle is stale;
    /// the caller treats that as "not spawned yet" and skips the tick.
    pub fn new(bodies: &'a mut RigidBodySet, handle: RigidBodyHandle) -> Option<Self> {
        if bodies.get(handle).is_none() {
            return None;
        }
        Some(Self { bodies, handle })
    }
}

impl PhysicsBody for RapierBody<'_> {
    fn translation(&self) -> Vector3<f32> {
        *self.bodies[self.handle].translation()
    }

    fn rotation(&self) -> UnitQuaternion<f32> {
        *self.bodies[self.handle].rotation()
    }

    fn linvel(&self) -> Vector3<f32> {
        *self.bodies[self.handle].linvel()
    }

    fn angvel(&self) -> Vector3<f32> {
        *self.bodies[self.handle].angvel()
    }

    fn apply_impulse(&mut self, impulse: Vector3<f32>, wake: bool) {
        self.bodies[self.handle].apply_impulse(impulse, wake);
    }

    fn apply_torque_impulse(&mut self, torque: Vector3<f32>, wake: bool) {
        self.bodies[self.handle].apply_torque_impulse(torque, wake);
    }
}
