//! Boundaries with the world outside the controller.
//!
//! The physics engine, the scene graph and the chat backend are external
//! collaborators. This module defines the narrow traits the controller
//! talks through, the production adapters (rapier3d), deterministic mock
//! implementations for tests and headless runs, and the wire contract of
//! the chat collaborator.

pub mod body;
pub mod messages;
pub mod mock;
pub mod rapier;
pub mod scene;

pub use body::PhysicsBody;
pub use mock::{MockBody, MockVisuals};
pub use rapier::RapierBody;
pub use scene::RoverVisuals;
