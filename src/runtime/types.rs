//! Handle and snapshot types shared with the host.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identity token for one tracked pointing device.
///
/// Carried through event payloads so receivers can match notifications to
/// the originating device by value equality instead of reference identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub u64);

/// Identity token for a runtime session object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

/// Opaque handle to a runtime-owned spatial reference (target-ray space,
/// grip space, reference space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceHandle(pub u64);

/// Opaque handle to a scene object owned by the hit-testing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Position plus orientation as reported by a per-frame pose query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Pointing ray in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Derive the ray from a target-ray pose: origin at the pose position,
    /// direction along the pose's negative Z axis.
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            origin: pose.position,
            direction: (pose.orientation * Vec3::NEG_Z).normalize_or_zero(),
        }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}

/// How a device targets scene content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRayMode {
    Screen,
    Gaze,
    TrackedPointer,
}

/// Button/axis layout reported by the runtime for a gamepad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamepadMapping {
    /// The recognized standard XR layout; drives frame-by-frame polling.
    XrStandard,
    /// Anything else; the device falls back to discrete session events.
    #[default]
    Other,
}

/// One button as sampled this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub pressed: bool,
}

/// Per-frame view of a gamepad's buttons and axes.
#[derive(Clone, Debug, Default)]
pub struct GamepadSnapshot {
    pub mapping: GamepadMapping,
    pub buttons: Vec<ButtonSample>,
    pub axes: Vec<f32>,
}

impl GamepadSnapshot {
    pub fn is_xr_standard(&self) -> bool {
        self.mapping == GamepadMapping::XrStandard
    }

    /// Axis value at `index`, reading out-of-range indices as 0.
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }
}

/// Per-frame view of one input source as reported by the runtime.
///
/// The runtime owns the underlying object; the core only ever sees these
/// snapshots plus the opaque space handles for pose queries.
#[derive(Clone, Debug)]
pub struct InputSourceSnapshot {
    pub target_ray_mode: TargetRayMode,
    pub target_ray_space: Option<SpaceHandle>,
    pub grip_space: Option<SpaceHandle>,
    pub gamepad: Option<GamepadSnapshot>,
}

impl InputSourceSnapshot {
    /// Whether a standard-mapped gamepad is attached this frame.
    pub fn has_standard_gamepad(&self) -> bool {
        self.gamepad.as_ref().is_some_and(|g| g.is_xr_standard())
    }
}

/// Ray/scene intersection as supplied by the external hit-testing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: ObjectId,
    pub point: Vec3,
    pub distance: f32,
}

/// Discrete select/squeeze event names delivered by a session object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEventKind {
    SelectStart,
    Select,
    SelectEnd,
    SqueezeStart,
    Squeeze,
    SqueezeEnd,
}

impl SessionEventKind {
    pub const ALL: [SessionEventKind; 6] = [
        SessionEventKind::SelectStart,
        SessionEventKind::Select,
        SessionEventKind::SelectEnd,
        SessionEventKind::SqueezeStart,
        SessionEventKind::Squeeze,
        SessionEventKind::SqueezeEnd,
    ];

    /// Runtime-level event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectStart => "selectstart",
            Self::Select => "select",
            Self::SelectEnd => "selectend",
            Self::SqueezeStart => "squeezestart",
            Self::Squeeze => "squeeze",
            Self::SqueezeEnd => "squeezeend",
        }
    }

    /// Whether the event belongs to the squeeze family.
    pub fn is_squeeze(&self) -> bool {
        matches!(
            self,
            Self::SqueezeStart | Self::Squeeze | Self::SqueezeEnd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    #[test]
    fn ray_from_identity_pose_points_down_negative_z() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        let ray = Ray::from_pose(&pose);
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn ray_follows_pose_rotation() {
        // 90 degrees around Y turns -Z into -X.
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let ray = Ray::from_pose(&pose);
        assert!((ray.direction - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn axis_out_of_range_reads_zero() {
        let pad = GamepadSnapshot {
            mapping: GamepadMapping::XrStandard,
            buttons: Vec::new(),
            axes: vec![0.5],
        };
        assert_eq!(pad.axis(0), 0.5);
        assert_eq!(pad.axis(1), 0.0);
        assert_eq!(pad.axis(7), 0.0);
    }

    #[test]
    fn standard_gamepad_detection() {
        let source = InputSourceSnapshot {
            target_ray_mode: TargetRayMode::TrackedPointer,
            target_ray_space: None,
            grip_space: None,
            gamepad: Some(GamepadSnapshot {
                mapping: GamepadMapping::XrStandard,
                ..Default::default()
            }),
        };
        assert!(source.has_standard_gamepad());

        let no_pad = InputSourceSnapshot {
            gamepad: None,
            ..source.clone()
        };
        assert!(!no_pad.has_standard_gamepad());

        let other = InputSourceSnapshot {
            gamepad: Some(GamepadSnapshot::default()),
            ..source
        };
        assert!(!other.has_standard_gamepad());
    }

    #[test]
    fn session_event_names() {
        assert_eq!(SessionEventKind::SelectStart.as_str(), "selectstart");
        assert_eq!(SessionEventKind::SqueezeEnd.as_str(), "squeezeend");
        assert!(SessionEventKind::Squeeze.is_squeeze());
        assert!(!SessionEventKind::Select.is_squeeze());
        assert_eq!(SessionEventKind::ALL.len(), 6);
    }
}
