//! Discrete session event bridge.
//!
//! Active only when the device has no standard-mapped gamepad. Subscribes
//! the device to the six select/squeeze event kinds on the owning session
//! through the host's subscription table, and translates delivered events
//! into normalized actions: `*start` becomes a press, `*end` a release,
//! and the bare event a click; the `squeeze*` family reports the squeeze
//! button, everything else the trigger.

use tracing::{debug, info};

use crate::events::action::{PointerAction, PointerButton, PointerEventKind};
use crate::runtime::{DeviceId, Ray, SessionEventHub, SessionEventKind, SessionId};

/// Record of which session a device is subscribed on.
///
/// A binding always covers all six event kinds; it is torn down as a whole
/// before a new session's binding is installed, so the subscription table
/// can never point at a stale session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionBinding {
    session: SessionId,
    device: DeviceId,
}

impl SessionBinding {
    /// Subscribe `device` to all discrete event kinds on `session`.
    pub fn install(
        hub: &mut dyn SessionEventHub,
        session: SessionId,
        device: DeviceId,
    ) -> Self {
        for kind in SessionEventKind::ALL {
            hub.subscribe(session, device, kind);
        }
        info!("device {:?} subscribed to session {:?}", device, session);
        Self { session, device }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Remove every subscription this binding installed. Removal is
    /// idempotent at the hub contract level.
    pub fn teardown(self, hub: &mut dyn SessionEventHub) {
        for kind in SessionEventKind::ALL {
            hub.unsubscribe(self.session, self.device, kind);
        }
        debug!(
            "device {:?} unsubscribed from session {:?}",
            self.device, self.session
        );
    }
}

/// Translate one discrete session event into a normalized action carrying
/// the device's current ray.
pub fn action_for_session_event(kind: SessionEventKind, ray: Ray) -> PointerAction {
    let button = if kind.is_squeeze() {
        PointerButton::Squeeze
    } else {
        PointerButton::Trigger
    };
    let action_kind = match kind {
        SessionEventKind::SelectStart | SessionEventKind::SqueezeStart => {
            PointerEventKind::MouseDown
        }
        SessionEventKind::SelectEnd | SessionEventKind::SqueezeEnd => PointerEventKind::MouseUp,
        SessionEventKind::Select | SessionEventKind::Squeeze => PointerEventKind::Click,
    };
    PointerAction::button_event(ray, action_kind, button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum HubOp {
        Subscribe(SessionId, DeviceId, SessionEventKind),
        Unsubscribe(SessionId, DeviceId, SessionEventKind),
    }

    #[derive(Default)]
    struct RecordingHub {
        ops: Vec<HubOp>,
    }

    impl SessionEventHub for RecordingHub {
        fn subscribe(&mut self, session: SessionId, device: DeviceId, kind: SessionEventKind) {
            self.ops.push(HubOp::Subscribe(session, device, kind));
        }
        fn unsubscribe(&mut self, session: SessionId, device: DeviceId, kind: SessionEventKind) {
            self.ops.push(HubOp::Unsubscribe(session, device, kind));
        }
    }

    #[test]
    fn install_subscribes_all_six_kinds() {
        let mut hub = RecordingHub::default();
        let binding = SessionBinding::install(&mut hub, SessionId(7), DeviceId(3));
        assert_eq!(binding.session(), SessionId(7));
        assert_eq!(hub.ops.len(), 6);
        for kind in SessionEventKind::ALL {
            assert!(hub
                .ops
                .contains(&HubOp::Subscribe(SessionId(7), DeviceId(3), kind)));
        }
    }

    #[test]
    fn teardown_unsubscribes_everything_it_installed() {
        let mut hub = RecordingHub::default();
        let binding = SessionBinding::install(&mut hub, SessionId(7), DeviceId(3));
        hub.ops.clear();
        binding.teardown(&mut hub);
        assert_eq!(hub.ops.len(), 6);
        for kind in SessionEventKind::ALL {
            assert!(hub
                .ops
                .contains(&HubOp::Unsubscribe(SessionId(7), DeviceId(3), kind)));
        }
    }

    #[test]
    fn start_events_map_to_mousedown() {
        let a = action_for_session_event(SessionEventKind::SelectStart, Ray::default());
        assert_eq!(a.kind, PointerEventKind::MouseDown);
        assert_eq!(a.button, Some(PointerButton::Trigger));

        let a = action_for_session_event(SessionEventKind::SqueezeStart, Ray::default());
        assert_eq!(a.kind, PointerEventKind::MouseDown);
        assert_eq!(a.button, Some(PointerButton::Squeeze));
    }

    #[test]
    fn end_events_map_to_mouseup() {
        let a = action_for_session_event(SessionEventKind::SelectEnd, Ray::default());
        assert_eq!(a.kind, PointerEventKind::MouseUp);
        assert_eq!(a.button, Some(PointerButton::Trigger));

        let a = action_for_session_event(SessionEventKind::SqueezeEnd, Ray::default());
        assert_eq!(a.kind, PointerEventKind::MouseUp);
        assert_eq!(a.button, Some(PointerButton::Squeeze));
    }

    #[test]
    fn bare_events_map_to_click() {
        let a = action_for_session_event(SessionEventKind::Select, Ray::default());
        assert_eq!(a.kind, PointerEventKind::Click);
        assert_eq!(a.button, Some(PointerButton::Trigger));

        let a = action_for_session_event(SessionEventKind::Squeeze, Ray::default());
        assert_eq!(a.kind, PointerEventKind::Click);
        assert_eq!(a.button, Some(PointerButton::Squeeze));
    }
}
