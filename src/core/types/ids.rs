//! Wheel and arm-joint identifiers.

use serde::{Deserialize, Serialize};

/// One of the rover's six wheels.
///
/// The four corner wheels (front and rear pairs) sit on steerable
/// carriers; the middle pair is fixed and only spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelId {
    FrontLeft,
    FrontRight,
    MidLeft,
    MidRight,
    RearLeft,
    RearRight,
}

impl WheelId {
    /// All six wheels, in spin-array order.
    pub const ALL: [WheelId; 6] = [
        WheelId::FrontLeft,
        WheelId::FrontRight,
        WheelId::MidLeft,
        WheelId::MidRight,
        WheelId::RearLeft,
        WheelId::RearRight,
    ];

    /// The four steerable corner wheels, in steer-array order.
    pub const CORNERS: [WheelId; 4] = [
        WheelId::FrontLeft,
        WheelId::FrontRight,
        WheelId::RearLeft,
        WheelId::RearRight,
    ];

    /// Index into [`crate::core::types::RoverState::spin`].
    #[inline]
    pub fn spin_index(&self) -> usize {
        match self {
            WheelId::FrontLeft => 0,
            WheelId::FrontRight => 1,
            WheelId::MidLeft => 2,
            WheelId::MidRight => 3,
            WheelId::RearLeft => 4,
            WheelId::RearRight => 5,
        }
    }

    /// Index into [`crate::core::types::RoverState::steer`], `None` for
    /// the fixed middle pair.
    #[inline]
    pub fn steer_index(&self) -> Option<usize> {
        match self {
            WheelId::FrontLeft => Some(0),
            WheelId::FrontRight => Some(1),
            WheelId::RearLeft => Some(2),
            WheelId::RearRight => Some(3),
            WheelId::MidLeft | WheelId::MidRight => None,
        }
    }

    /// Whether this wheel is on the front axle.
    #[inline]
    pub fn is_front(&self) -> bool {
        matches!(self, WheelId::FrontLeft | WheelId::FrontRight)
    }

    /// Whether this wheel is on the left side of the chassis.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(
            self,
            WheelId::FrontLeft | WheelId::MidLeft | WheelId::RearLeft
        )
    }
}

/// One of the manipulator arm's five joints, base to end effector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmJoint {
    /// Base rotation about the vertical axis.
    Azimuth,
    /// Shoulder pitch.
    Shoulder,
    /// Elbow pitch.
    Elbow,
    /// Wrist pitch.
    WristPitch,
    /// Wrist roll about the vertical axis.
    WristRoll,
}

impl ArmJoint {
    /// All five joints, in joint-array order.
    pub const ALL: [ArmJoint; 5] = [
        ArmJoint::Azimuth,
        ArmJoint::Shoulder,
        ArmJoint::Elbow,
        ArmJoint::WristPitch,
        ArmJoint::WristRoll,
    ];

    /// Index into [`crate::core::types::RoverState::joints`].
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ArmJoint::Azimuth => 0,
            ArmJoint::Shoulder => 1,
            ArmJoint::Elbow => 2,
            ArmJoint::WristPitch => 3,
            ArmJoint::WristRoll => 4,
        }
    }
}
