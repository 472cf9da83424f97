//! Normalized pointer actions and the inbound scene notification type.

use serde::{Deserialize, Serialize};

use crate::runtime::{DeviceId, Intersection, ObjectId, Ray};

/// Pointer-style event kinds shared by outbound actions and inbound scene
/// notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    MouseDown,
    MouseUp,
    Click,
    Wheel,
    MouseMove,
    MouseOver,
    MouseOut,
}

impl PointerEventKind {
    /// DOM-style name, useful for logs and host-side bridging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::Click => "click",
            Self::Wheel => "wheel",
            Self::MouseMove => "mousemove",
            Self::MouseOver => "mouseover",
            Self::MouseOut => "mouseout",
        }
    }
}

/// Logical button identity carried by button-driven actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Trigger,
    Squeeze,
}

impl PointerButton {
    /// Map a gamepad button index to its logical identity. The standard XR
    /// layout places the squeeze at index 1; everything else reports as the
    /// trigger.
    pub fn from_index(index: usize) -> Self {
        if index == 1 {
            Self::Squeeze
        } else {
            Self::Trigger
        }
    }
}

/// Unit for wheel deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// One normalized action, constructed and dispatched within a single frame.
///
/// Button actions carry `button` and zero deltas; wheel actions carry the
/// scaled deltas and a delta mode and no button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerAction {
    pub ray: Ray,
    pub kind: PointerEventKind,
    pub button: Option<PointerButton>,
    pub delta_x: f32,
    pub delta_y: f32,
    pub delta_mode: Option<WheelDeltaMode>,
}

impl PointerAction {
    pub fn button_event(ray: Ray, kind: PointerEventKind, button: PointerButton) -> Self {
        Self {
            ray,
            kind,
            button: Some(button),
            delta_x: 0.0,
            delta_y: 0.0,
            delta_mode: None,
        }
    }

    pub fn wheel(ray: Ray, delta_x: f32, delta_y: f32) -> Self {
        Self {
            ray,
            kind: PointerEventKind::Wheel,
            button: None,
            delta_x,
            delta_y,
            delta_mode: Some(WheelDeltaMode::Pixel),
        }
    }
}

/// Scene-level ray interaction notification delivered by the external
/// hit-testing layer.
///
/// `source` identifies the device whose ray produced the interaction;
/// `current_target` is the object the scene listener was installed on
/// (the scene root for world-level listeners).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNotification {
    pub kind: PointerEventKind,
    pub target: ObjectId,
    pub current_target: ObjectId,
    pub source: DeviceId,
    pub intersection: Option<Intersection>,
    pub button: Option<PointerButton>,
}
