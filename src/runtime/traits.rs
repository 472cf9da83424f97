//! Traits the host implements for the core.

use super::types::{DeviceId, Pose, SessionEventKind, SessionId, SpaceHandle};

/// Per-frame pose queries against the tracking runtime.
///
/// Returning `None` is the normal way to report an untracked space this
/// frame (device outside the tracking volume, reference space not yet
/// established). It is never an error.
pub trait PoseFrame {
    fn pose(&self, space: SpaceHandle, reference: SpaceHandle) -> Option<Pose>;
}

/// Subscription table for the discrete session event stream.
///
/// The host keeps one table covering all live sessions and delivers a
/// session's events only to devices currently subscribed for that
/// `(session, device, kind)` entry. Removing an entry that is not present
/// must be a no-op.
pub trait SessionEventHub {
    fn subscribe(&mut self, session: SessionId, device: DeviceId, kind: SessionEventKind);
    fn unsubscribe(&mut self, session: SessionId, device: DeviceId, kind: SessionEventKind);
}

/// One haptic actuator on the device.
///
/// Pulses are best-effort and fire-and-forget; the core never observes the
/// outcome.
pub trait HapticActuator {
    fn pulse(&self, intensity: f32, duration_ms: f32);
}
