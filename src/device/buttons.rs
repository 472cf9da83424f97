//! Polled gamepad button and axis tracking.
//!
//! Runs once per frame for devices whose gamepad reports the standard XR
//! mapping. Button transitions are diffed against the previous frame's
//! state; press timestamps drive click synthesis within the configured
//! window. Axis pairs become instantaneous wheel actions behind a deadzone,
//! with no accumulation across frames.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::config::PointerSettings;
use crate::events::action::{PointerAction, PointerButton, PointerEventKind};
use crate::runtime::{GamepadSnapshot, Ray};

#[derive(Clone, Copy, Debug, Default)]
struct ButtonTrackState {
    pressed: bool,
    pressed_at: Option<DateTime<Utc>>,
}

/// Per-button state positionally matching the gamepad's button array.
#[derive(Clone, Debug, Default)]
pub struct ButtonTracker {
    states: Vec<ButtonTrackState>,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buttons currently tracked.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Diff one frame of gamepad state and emit the resulting actions.
    ///
    /// Buttons are processed first, then the tracked state is resized to
    /// the gamepad's current button count, then axis pairs are converted to
    /// wheel actions. All actions carry `ray` as computed for this frame.
    pub fn poll(
        &mut self,
        gamepad: &GamepadSnapshot,
        ray: Ray,
        pointing: bool,
        now: DateTime<Utc>,
        settings: &PointerSettings,
    ) -> Vec<PointerAction> {
        let mut actions = Vec::new();
        self.poll_buttons(gamepad, ray, pointing, now, settings, &mut actions);
        self.poll_axes(gamepad, ray, pointing, settings, &mut actions);
        actions
    }

    fn poll_buttons(
        &mut self,
        gamepad: &GamepadSnapshot,
        ray: Ray,
        pointing: bool,
        now: DateTime<Utc>,
        settings: &PointerSettings,
        actions: &mut Vec<PointerAction>,
    ) {
        let click_window = Duration::milliseconds(settings.click_window_ms);

        for (index, sample) in gamepad.buttons.iter().enumerate() {
            // Buttons that appeared since the last poll start unpressed.
            let prev = self.states.get(index).copied().unwrap_or_default();
            let mut next = prev;

            if sample.pressed && !prev.pressed {
                next.pressed = true;
                next.pressed_at = Some(now);
                debug!("button {} pressed", index);
                if pointing {
                    actions.push(PointerAction::button_event(
                        ray,
                        PointerEventKind::MouseDown,
                        PointerButton::from_index(index),
                    ));
                }
            } else if !sample.pressed && prev.pressed {
                next.pressed = false;
                let held_for = prev.pressed_at.map(|at| now - at);
                next.pressed_at = None;
                debug!(
                    "button {} released after {:?} ms",
                    index,
                    held_for.map(|d| d.num_milliseconds())
                );
                if pointing {
                    let button = PointerButton::from_index(index);
                    actions.push(PointerAction::button_event(
                        ray,
                        PointerEventKind::MouseUp,
                        button,
                    ));
                    if matches!(held_for, Some(held) if held <= click_window) {
                        actions.push(PointerAction::button_event(
                            ray,
                            PointerEventKind::Click,
                            button,
                        ));
                    }
                }
            }

            if index < self.states.len() {
                self.states[index] = next;
            } else {
                self.states.push(next);
            }
        }

        // Keep the tracked length exactly in step with the gamepad so a
        // changing button count cannot misalign indices next frame.
        if self.states.len() > gamepad.buttons.len() {
            warn!(
                "gamepad button count shrank from {} to {}",
                self.states.len(),
                gamepad.buttons.len()
            );
            self.states.truncate(gamepad.buttons.len());
        }
    }

    fn poll_axes(
        &mut self,
        gamepad: &GamepadSnapshot,
        ray: Ray,
        pointing: bool,
        settings: &PointerSettings,
        actions: &mut Vec<PointerAction>,
    ) {
        if !pointing {
            return;
        }
        // Odd-length axis arrays read the missing partner as 0.
        let pairs = gamepad.axes.len().div_ceil(2);
        for pair in 0..pairs {
            let delta_x = gamepad.axis(pair * 2) * settings.wheel_scale;
            let delta_y = gamepad.axis(pair * 2 + 1) * settings.wheel_scale;
            let magnitude = (delta_x * delta_x + delta_y * delta_y).sqrt();
            if magnitude > settings.wheel_deadzone {
                actions.push(PointerAction::wheel(ray, delta_x, delta_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ButtonSample, GamepadMapping};

    fn pad(pressed: &[bool], axes: &[f32]) -> GamepadSnapshot {
        GamepadSnapshot {
            mapping: GamepadMapping::XrStandard,
            buttons: pressed.iter().map(|&p| ButtonSample { pressed: p }).collect(),
            axes: axes.to_vec(),
        }
    }

    fn t(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap() + Duration::milliseconds(ms)
    }

    fn kinds(actions: &[PointerAction]) -> Vec<PointerEventKind> {
        actions.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn press_emits_one_mousedown() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(0), &settings);
        assert_eq!(kinds(&actions), vec![PointerEventKind::MouseDown]);
        assert_eq!(actions[0].button, Some(PointerButton::Trigger));
    }

    #[test]
    fn unchanged_state_emits_nothing() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(0), &settings);
        let actions = tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(50), &settings);
        assert!(actions.is_empty(), "held button must not re-emit: {actions:?}");

        let mut idle = ButtonTracker::new();
        let actions = idle.poll(&pad(&[false], &[]), Ray::default(), true, t(0), &settings);
        assert!(actions.is_empty());
    }

    #[test]
    fn release_within_window_emits_mouseup_and_click() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(0), &settings);
        let actions = tracker.poll(&pad(&[false], &[]), Ray::default(), true, t(300), &settings);
        assert_eq!(
            kinds(&actions),
            vec![PointerEventKind::MouseUp, PointerEventKind::Click]
        );
    }

    #[test]
    fn late_release_emits_mouseup_only() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(0), &settings);
        let actions = tracker.poll(&pad(&[false], &[]), Ray::default(), true, t(301), &settings);
        assert_eq!(kinds(&actions), vec![PointerEventKind::MouseUp]);
    }

    #[test]
    fn second_press_starts_a_fresh_click_window() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(0), &settings);
        tracker.poll(&pad(&[false], &[]), Ray::default(), true, t(500), &settings);
        tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(1000), &settings);
        let actions = tracker.poll(&pad(&[false], &[]), Ray::default(), true, t(1100), &settings);
        assert_eq!(
            kinds(&actions),
            vec![PointerEventKind::MouseUp, PointerEventKind::Click]
        );
    }

    #[test]
    fn squeeze_button_is_index_one() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(
            &pad(&[false, true], &[]),
            Ray::default(),
            true,
            t(0),
            &settings,
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].button, Some(PointerButton::Squeeze));
    }

    #[test]
    fn pointing_disabled_suppresses_actions_but_tracks_state() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(&pad(&[true], &[]), Ray::default(), false, t(0), &settings);
        assert!(actions.is_empty());
        // Re-enabled pointing must not see a stale transition.
        let actions = tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(50), &settings);
        assert!(actions.is_empty());
        let actions = tracker.poll(&pad(&[false], &[]), Ray::default(), true, t(100), &settings);
        assert_eq!(
            kinds(&actions),
            vec![PointerEventKind::MouseUp, PointerEventKind::Click]
        );
    }

    #[test]
    fn button_count_growth_and_shrink_keep_indices_aligned() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        tracker.poll(&pad(&[true, false], &[]), Ray::default(), true, t(0), &settings);
        assert_eq!(tracker.len(), 2);

        // Grow: the new button press is attributed to the new index.
        let actions = tracker.poll(
            &pad(&[true, false, true], &[]),
            Ray::default(),
            true,
            t(10),
            &settings,
        );
        assert_eq!(tracker.len(), 3);
        assert_eq!(kinds(&actions), vec![PointerEventKind::MouseDown]);

        // Shrink: dropped indices disappear without phantom releases.
        let actions = tracker.poll(&pad(&[true], &[]), Ray::default(), true, t(20), &settings);
        assert_eq!(tracker.len(), 1);
        assert!(actions.is_empty());
    }

    #[test]
    fn axis_pair_below_deadzone_is_silent() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(
            &pad(&[], &[0.005, 0.005]),
            Ray::default(),
            true,
            t(0),
            &settings,
        );
        assert!(actions.is_empty(), "within deadzone: {actions:?}");
    }

    #[test]
    fn axis_pair_above_deadzone_emits_scaled_wheel() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(
            &pad(&[], &[0.5, -0.25]),
            Ray::default(),
            true,
            t(0),
            &settings,
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, PointerEventKind::Wheel);
        assert_eq!(actions[0].delta_x, 5.0);
        assert_eq!(actions[0].delta_y, -2.5);
    }

    #[test]
    fn each_axis_pair_is_checked_independently() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(
            &pad(&[], &[0.0, 0.0, 0.8, 0.0]),
            Ray::default(),
            true,
            t(0),
            &settings,
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].delta_x, 8.0);
        assert_eq!(actions[0].delta_y, 0.0);
    }

    #[test]
    fn odd_axis_array_reads_missing_partner_as_zero() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(&pad(&[], &[0.0, 0.0, 0.6]), Ray::default(), true, t(0), &settings);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].delta_x, 6.0);
        assert_eq!(actions[0].delta_y, 0.0);
    }

    #[test]
    fn wheel_is_instantaneous_per_frame() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let first = tracker.poll(&pad(&[], &[0.5, 0.0]), Ray::default(), true, t(0), &settings);
        let second = tracker.poll(&pad(&[], &[0.5, 0.0]), Ray::default(), true, t(16), &settings);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0].delta_x, second[0].delta_x);
    }

    #[test]
    fn wheel_suppressed_while_not_pointing() {
        let mut tracker = ButtonTracker::new();
        let settings = PointerSettings::default();
        let actions = tracker.poll(&pad(&[], &[1.0, 1.0]), Ray::default(), false, t(0), &settings);
        assert!(actions.is_empty());
    }
}
