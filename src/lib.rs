//! xrpointer - frame-driven input core for spatial pointing devices
//!
//! Translates raw tracking-runtime input (poses, gamepad snapshots,
//! discrete session events) into a normalized pointer event stream plus
//! visual and haptic side effects, one device at a time.
//!
//! # Pipeline
//!
//! ```text
//! PoseFrame ─────────┐
//! GamepadSnapshot ───┼──► PointerDevice (per frame) ──► WorldEvent
//! Session events ────┘            │                       │
//!                                 ▼                       ▼
//!                          VisualChildren          rayPointerMotion /
//!                          HapticActuator          rayPointerAction
//! ```
//!
//! The host drives everything from its frame loop; there is no internal
//! threading or async machinery. A device moves through three lifecycle
//! states: detached (created, no session), tracking (bound and receiving
//! frames), torn down (all subscriptions removed, final).

pub mod config;
pub mod device;
pub mod events;
pub mod runtime;

pub use config::{ConfigError, HapticSettings, PointerSettings};
pub use device::coordinator::{Detached, DeviceLifecycle, TornDown, Tracking};
pub use device::{
    DeviceError, FrameSnapshot, FrameUpdate, InputMode, PointerDevice, SceneReaction,
    VisualChildren, VisualKind, VisualState,
};
pub use events::{
    PointerAction, PointerButton, PointerEventKind, SceneNotification, SemanticDispatch,
    SemanticEvent, SemanticEventKind, WheelDeltaMode, WorldEvent,
};
pub use runtime::{
    ButtonSample, DeviceId, GamepadMapping, GamepadSnapshot, HapticActuator, InputSourceSnapshot,
    Intersection, ObjectId, Pose, PoseFrame, Ray, SessionEventHub, SessionEventKind, SessionId,
    SpaceHandle, TargetRayMode,
};
