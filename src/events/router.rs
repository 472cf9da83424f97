//! World-channel egress and the secondary semantic event mapping.
//!
//! The world channel is the single egress point towards the application's
//! interaction-routing machinery: at-most-once per emission, synchronous,
//! fire-and-forget. Semantic events are the device-originated counterparts
//! of select/squeeze interactions, redispatched to whatever scene object
//! the ray currently intersects.

use crate::events::action::{PointerAction, PointerButton, PointerEventKind};
use crate::runtime::{DeviceId, ObjectId, Ray};

/// Payloads delivered to the world-level notification channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorldEvent {
    RayPointerMotion { ray: Ray },
    RayPointerAction { action: PointerAction },
}

impl WorldEvent {
    /// Channel name the host delivers this payload on.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::RayPointerMotion { .. } => "rayPointerMotion",
            Self::RayPointerAction { .. } => "rayPointerAction",
        }
    }
}

/// Semantic select/squeeze event kinds dispatched to scene objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticEventKind {
    SelectStart,
    Select,
    SelectEnd,
    SqueezeStart,
    Squeeze,
    SqueezeEnd,
}

impl SemanticEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectStart => "xrselectstart",
            Self::Select => "xrselect",
            Self::SelectEnd => "xrselectend",
            Self::SqueezeStart => "xrsqueezestart",
            Self::Squeeze => "xrsqueeze",
            Self::SqueezeEnd => "xrsqueezeend",
        }
    }
}

/// A semantic event tagged with the originating device so downstream
/// handlers can tell device-originated events from ordinary pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemanticEvent {
    pub kind: SemanticEventKind,
    pub source: DeviceId,
    pub bubbles: bool,
}

/// A semantic event addressed to the intersected scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemanticDispatch {
    pub target: ObjectId,
    pub event: SemanticEvent,
}

/// The secondary semantic mapping: which button/kind combinations produce a
/// semantic event. Anything outside the table produces none.
pub fn semantic_for(button: PointerButton, kind: PointerEventKind) -> Option<SemanticEventKind> {
    match (button, kind) {
        (PointerButton::Trigger, PointerEventKind::MouseDown) => Some(SemanticEventKind::SelectStart),
        (PointerButton::Trigger, PointerEventKind::MouseUp) => Some(SemanticEventKind::SelectEnd),
        (PointerButton::Trigger, PointerEventKind::Click) => Some(SemanticEventKind::Select),
        (PointerButton::Squeeze, PointerEventKind::MouseDown) => {
            Some(SemanticEventKind::SqueezeStart)
        }
        (PointerButton::Squeeze, PointerEventKind::MouseUp) => Some(SemanticEventKind::SqueezeEnd),
        (PointerButton::Squeeze, PointerEventKind::Click) => Some(SemanticEventKind::Squeeze),
        _ => None,
    }
}
