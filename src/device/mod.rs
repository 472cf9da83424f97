//! Per-device input core
//!
//! Implements the frame-driven reconciliation pipeline for one pointing
//! device:
//!
//! 1. [`pose`] - Per-frame target-ray/grip pose resolution
//! 2. [`buttons`] - Polled gamepad button/axis diffing
//! 3. [`session_bridge`] - Discrete session event subscriptions
//! 4. [`coordinator`] - Lifecycle machine, shared frame state, haptics and
//!    semantic dispatch
//!
//! # Architecture
//!
//! ```text
//! PoseFrame ──► pose ──► FrameSnapshot ──► visuals
//! Gamepad   ──► buttons ─┐
//! Session   ──► bridge ──┴─► PointerAction ──► WorldEvent
//! Scene     ──► coordinator ──► haptic pulse + SemanticDispatch
//! ```
//!
//! Exactly one of the gamepad tracker and the session bridge is active at a
//! time; the coordinator selects the mode whenever the owning session
//! changes.

pub mod buttons;
pub mod coordinator;
pub mod pose;
pub mod session_bridge;

pub use buttons::ButtonTracker;
pub use coordinator::{
    DeviceError, FrameSnapshot, FrameUpdate, InputMode, PointerDevice, SceneReaction,
    VisualChildren, VisualKind, VisualState,
};
pub use pose::{resolve_poses, ResolvedPoses};
pub use session_bridge::{action_for_session_event, SessionBinding};
