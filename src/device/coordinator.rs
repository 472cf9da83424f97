//! Interaction coordinator: the per-device lifecycle machine.
//!
//! Owns the frame-shared state (poses, ray, intersection), selects the
//! input mode whenever the owning session changes, drives the gamepad
//! tracker, recomputes which visual children are active, and turns scene
//! notifications into haptic pulses and semantic dispatches.

use chrono::{DateTime, Utc};
use statum::{machine, state, transition};
use tracing::{debug, info};

use crate::config::{ConfigError, PointerSettings};
use crate::device::buttons::ButtonTracker;
use crate::device::pose::resolve_poses;
use crate::device::session_bridge::{action_for_session_event, SessionBinding};
use crate::events::action::{PointerEventKind, SceneNotification};
use crate::events::router::{semantic_for, SemanticDispatch, SemanticEvent, WorldEvent};
use crate::runtime::{
    DeviceId, HapticActuator, InputSourceSnapshot, Intersection, Pose, PoseFrame, Ray,
    SessionEventHub, SessionEventKind, SessionId, SpaceHandle, TargetRayMode,
};

/// Which of the two event sources drives this device.
///
/// Exactly one is active at a time; the selection is recomputed whenever
/// the owning session handle changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Standard-mapped gamepad present: poll buttons/axes each frame.
    GamepadDriven,
    /// No usable gamepad: subscribe to the discrete session event stream.
    EventDriven,
}

impl InputMode {
    pub fn for_source(source: &InputSourceSnapshot) -> Self {
        if source.has_standard_gamepad() {
            Self::GamepadDriven
        } else {
            Self::EventDriven
        }
    }
}

/// Frame-shared state for one device.
///
/// The ray and the intersection deliberately retain their last values on
/// frames where no fresh pose or scene notification arrives, so
/// intersection-dependent effects stay coherent across tracking dropouts.
#[derive(Clone, Debug, Default)]
pub struct FrameSnapshot {
    pub target_ray_pose: Option<Pose>,
    pub grip_pose: Option<Pose>,
    pub ray: Ray,
    pub intersection: Option<Intersection>,
}

/// The three visual roles a device can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualKind {
    Cursor,
    TargetRay,
    Grip,
}

impl VisualKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::TargetRay => "target-ray",
            Self::Grip => "grip",
        }
    }
}

/// Input state handed to one active visual child, propagated verbatim from
/// the frame snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub kind: VisualKind,
    pub target_ray_pose: Option<Pose>,
    pub grip_pose: Option<Pose>,
    pub ray_intersection: Option<Intersection>,
    pub source: DeviceId,
}

/// Which visual children are active after an update pass; `None` slots are
/// inactive this pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualChildren {
    pub cursor: Option<VisualState>,
    pub target_ray: Option<VisualState>,
    pub grip: Option<VisualState>,
}

/// Result of one frame update.
#[derive(Clone, Debug)]
pub struct FrameUpdate {
    pub world: Vec<WorldEvent>,
    pub visuals: VisualChildren,
}

/// Result of a matching scene notification: refreshed visuals plus the
/// secondary semantic dispatch when the button/kind combination defines one.
#[derive(Clone, Copy, Debug)]
pub struct SceneReaction {
    pub visuals: VisualChildren,
    pub semantic: Option<SemanticDispatch>,
}

// Device errors
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] ConfigError),
}

#[state]
#[derive(Debug, Clone)]
pub enum DeviceLifecycle {
    Detached,
    Tracking,
    TornDown,
}

#[machine]
pub struct PointerDevice<DeviceLifecycle> {
    id: DeviceId,
    reference_space: SpaceHandle,
    settings: PointerSettings,
    target_ray_mode: TargetRayMode,
    mode: InputMode,
    pointing: bool,
    session: Option<SessionId>,
    binding: Option<SessionBinding>,
    frame: FrameSnapshot,
    buttons: ButtonTracker,
}

// Methods available in all lifecycle states
impl<S: DeviceLifecycleTrait> PointerDevice<S> {
    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn settings(&self) -> &PointerSettings {
        &self.settings
    }
}

impl PointerDevice<Detached> {
    /// Create a device that is not yet bound to a session.
    pub fn create(
        id: DeviceId,
        reference_space: SpaceHandle,
        settings: PointerSettings,
    ) -> Result<Self, DeviceError> {
        settings.validate()?;
        debug!("created pointer device {:?}", id);
        Ok(Self::builder()
            .id(id)
            .reference_space(reference_space)
            .settings(settings)
            .target_ray_mode(TargetRayMode::TrackedPointer)
            .mode(InputMode::EventDriven)
            .pointing(true)
            .session(None)
            .binding(None)
            .frame(FrameSnapshot::default())
            .buttons(ButtonTracker::new())
            .build())
    }
}

#[transition]
impl PointerDevice<Detached> {
    /// Bind the device to its session and start tracking.
    ///
    /// The input mode is decided here from the source's gamepad capability;
    /// only the event-driven mode installs session subscriptions.
    pub fn activate(
        mut self,
        hub: &mut dyn SessionEventHub,
        session: SessionId,
        source: &InputSourceSnapshot,
    ) -> PointerDevice<Tracking> {
        self.target_ray_mode = source.target_ray_mode;
        self.mode = InputMode::for_source(source);
        self.session = Some(session);
        if self.mode == InputMode::EventDriven {
            self.binding = Some(SessionBinding::install(hub, session, self.id));
        }
        info!(
            "pointer device {:?} active on session {:?} in {:?} mode",
            self.id, session, self.mode
        );
        self.transition()
    }
}

impl PointerDevice<Tracking> {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_pointing(&self) -> bool {
        self.pointing
    }

    /// Enable or disable pointing. While disabled, no actions or motion are
    /// emitted and the pointing visuals deactivate; button state keeps
    /// tracking so re-enabling does not see stale transitions.
    pub fn set_pointing(&mut self, pointing: bool) {
        if self.pointing != pointing {
            debug!("device {:?} pointing set to {}", self.id, pointing);
        }
        self.pointing = pointing;
    }

    pub fn ray(&self) -> Ray {
        self.frame.ray
    }

    pub fn intersection(&self) -> Option<&Intersection> {
        self.frame.intersection.as_ref()
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.frame
    }

    /// Re-evaluate the session binding. A no-op while the session handle is
    /// unchanged; on change, the old session's subscriptions are removed
    /// before any new ones are installed and the input mode is recomputed.
    pub fn sync_session(
        &mut self,
        hub: &mut dyn SessionEventHub,
        session: SessionId,
        source: &InputSourceSnapshot,
    ) {
        if self.session == Some(session) {
            return;
        }
        info!(
            "device {:?} session changed {:?} -> {:?}",
            self.id, self.session, session
        );
        if let Some(binding) = self.binding.take() {
            binding.teardown(hub);
        }
        self.session = Some(session);
        self.mode = InputMode::for_source(source);
        if self.mode == InputMode::EventDriven {
            self.binding = Some(SessionBinding::install(hub, session, self.id));
        }
    }

    /// Run one frame: resolve poses, refresh the shared snapshot, poll the
    /// gamepad in gamepad-driven mode, and recompute the visual children.
    pub fn update_frame(
        &mut self,
        frame: &dyn PoseFrame,
        source: &InputSourceSnapshot,
        now: DateTime<Utc>,
    ) -> FrameUpdate {
        self.target_ray_mode = source.target_ray_mode;

        let resolved = resolve_poses(frame, self.reference_space, source);
        self.frame.target_ray_pose = resolved.target_ray;
        self.frame.grip_pose = resolved.grip;

        let mut world = Vec::new();
        if self.pointing {
            if let Some(pose) = resolved.target_ray {
                self.frame.ray = Ray::from_pose(&pose);
                world.push(WorldEvent::RayPointerMotion {
                    ray: self.frame.ray,
                });
            }
        }

        if self.mode == InputMode::GamepadDriven {
            if let Some(gamepad) = &source.gamepad {
                for action in self.buttons.poll(
                    gamepad,
                    self.frame.ray,
                    self.pointing,
                    now,
                    &self.settings,
                ) {
                    world.push(WorldEvent::RayPointerAction { action });
                }
            }
        }

        FrameUpdate {
            world,
            visuals: self.visuals(),
        }
    }

    /// Translate one discrete session event delivered by the hub. Only
    /// devices in event-driven mode receive these; correctness relies on
    /// the subscription table, not on checks here.
    pub fn handle_session_event(&self, kind: SessionEventKind) -> Vec<WorldEvent> {
        let action = action_for_session_event(kind, self.frame.ray);
        debug!("device {:?} session event {}", self.id, kind.as_str());
        vec![WorldEvent::RayPointerAction { action }]
    }

    /// React to a scene-level ray interaction notification. Returns `None`
    /// when the notification originates from a different device.
    ///
    /// A matching notification stores the intersection, triggers a visual
    /// update pass, fires haptic feedback, and synthesizes the secondary
    /// semantic event for defined button/kind combinations.
    pub fn handle_scene_notification(
        &mut self,
        note: &SceneNotification,
        actuators: &[&dyn HapticActuator],
    ) -> Option<SceneReaction> {
        if note.source != self.id {
            return None;
        }

        self.frame.intersection = note.intersection;
        self.fire_haptics(note, actuators);

        let semantic = note
            .button
            .and_then(|button| semantic_for(button, note.kind))
            .map(|kind| SemanticDispatch {
                target: note.target,
                event: SemanticEvent {
                    kind,
                    source: self.id,
                    bubbles: true,
                },
            });

        Some(SceneReaction {
            visuals: self.visuals(),
            semantic,
        })
    }

    /// Compute which visual children are active for the current state.
    ///
    /// Screen mode drives nothing; gaze mode drives the cursor while
    /// pointing; tracked-pointer mode drives cursor and target-ray while
    /// pointing and the grip whenever a grip pose is present.
    pub fn visuals(&self) -> VisualChildren {
        let child = |kind| VisualState {
            kind,
            target_ray_pose: self.frame.target_ray_pose,
            grip_pose: self.frame.grip_pose,
            ray_intersection: self.frame.intersection,
            source: self.id,
        };

        let mut children = VisualChildren::default();
        match self.target_ray_mode {
            TargetRayMode::Screen => {}
            TargetRayMode::Gaze => {
                if self.pointing {
                    children.cursor = Some(child(VisualKind::Cursor));
                }
            }
            TargetRayMode::TrackedPointer => {
                if self.pointing {
                    children.cursor = Some(child(VisualKind::Cursor));
                    children.target_ray = Some(child(VisualKind::TargetRay));
                }
                if self.frame.grip_pose.is_some() {
                    children.grip = Some(child(VisualKind::Grip));
                }
            }
        }
        children
    }

    fn fire_haptics(&self, note: &SceneNotification, actuators: &[&dyn HapticActuator]) {
        let haptics = &self.settings.haptics;
        let pulse = match note.kind {
            PointerEventKind::Click => {
                Some((haptics.click_intensity, haptics.click_duration_ms))
            }
            // Hovering the scene root itself gives no feedback.
            PointerEventKind::MouseOver if note.target != note.current_target => {
                Some((haptics.hover_intensity, haptics.hover_duration_ms))
            }
            _ => None,
        };
        if let Some((intensity, duration_ms)) = pulse {
            if let Some(actuator) = actuators.first() {
                debug!(
                    "device {:?} haptic pulse {} for {} ms",
                    self.id, intensity, duration_ms
                );
                actuator.pulse(intensity, duration_ms);
            }
        }
    }
}

#[transition]
impl PointerDevice<Tracking> {
    /// Stop tracking and remove every session subscription. The torn-down
    /// device can no longer receive frames or events.
    pub fn deactivate(mut self, hub: &mut dyn SessionEventHub) -> PointerDevice<TornDown> {
        if let Some(binding) = self.binding.take() {
            binding.teardown(hub);
        }
        self.session = None;
        info!("pointer device {:?} torn down", self.id);
        self.transition()
    }
}
