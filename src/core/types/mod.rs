//! Plain data types shared across the controller.

mod body;
mod ids;
mod state;

pub use body::BodySample;
pub use ids::{ArmJoint, WheelId};
pub use state::RoverState;
