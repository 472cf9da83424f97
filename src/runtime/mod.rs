//! Boundary layer towards the spatial-tracking runtime
//!
//! Everything the core consumes from the host lives here: pose and ray
//! geometry, opaque handles for runtime-owned objects, per-frame input
//! snapshots, and the traits the host implements.
//!
//! # Architecture
//!
//! ```text
//! Tracking runtime ──► PoseFrame / InputSourceSnapshot ──► device core
//! Session objects  ──► SessionEventHub (subscription table)
//! Gamepad hardware ──► GamepadSnapshot + HapticActuator
//! ```
//!
//! The core never owns runtime objects; it sees them through handles and
//! per-frame snapshots supplied by the host loop.

pub mod traits;
pub mod types;

pub use traits::{HapticActuator, PoseFrame, SessionEventHub};
pub use types::{
    ButtonSample, DeviceId, GamepadMapping, GamepadSnapshot, InputSourceSnapshot, Intersection,
    ObjectId, Pose, Ray, SessionEventKind, SessionId, SpaceHandle, TargetRayMode,
};
