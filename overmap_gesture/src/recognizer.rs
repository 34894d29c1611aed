// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroU64;

use hashbrown::HashMap;
use kurbo::Point;

use overmap_view::{Viewport, geom};

/// Pointer identifier for tracking multiple concurrent contacts.
pub type PointerId = NonZeroU64;

/// Rotation magnitude (radians) a two-finger gesture must exceed before a
/// rotation update is applied. Roughly 8.5 degrees.
pub const ROTATE_THRESHOLD: f64 = 0.15;

/// Pinch magnitude (`|ratio - 1|`) a two-finger gesture must exceed before a
/// scale update is applied.
pub const PINCH_THRESHOLD: f64 = 0.05;

/// Accumulated movement (screen pixels) below which a press/release counts
/// as a tap rather than a drag.
pub const TAP_THRESHOLD: f64 = 5.0;

/// Session state for a single-contact interaction.
///
/// The target is remembered at press time but not acted on: the interaction
/// may still become a drag, in which case it is discarded.
#[derive(Clone, Debug)]
struct DragSession<K> {
    last: Point,
    moved: f64,
    target: K,
}

/// Baseline captured the moment a second contact joins.
#[derive(Clone, Debug)]
struct MultiSession {
    ids: (PointerId, PointerId),
    initial_distance: f64,
    initial_angle: f64,
    initial_scale: f64,
    initial_rotation: f64,
    /// Gesture midpoint in surface units, the pivot for zoom and rotation.
    midpoint: Point,
}

#[derive(Clone, Debug)]
enum Mode<K> {
    Idle,
    Drag(DragSession<K>),
    Multi(MultiSession),
    /// Contacts remain after a multi-contact session ended (a finger lifted
    /// or a third finger joined). Inert until the count changes again; no
    /// tap can come out of this interaction.
    Settling,
}

// Manual impl: the derive would demand `K: Default` for `mem::take`.
impl<K> Default for Mode<K> {
    fn default() -> Self {
        Self::Idle
    }
}

/// State machine over live contacts, classifying drag, pinch-zoom, rotate,
/// and tap, and applying continuous updates to a [`Viewport`].
///
/// One recognizer instance serves one map surface. Contacts are keyed by a
/// stable [`PointerId`] for their press-to-release lifetime; cancellation is
/// handled exactly like release except that it can never produce a tap.
#[derive(Clone, Debug)]
pub struct GestureRecognizer<K> {
    contacts: HashMap<PointerId, Point>,
    mode: Mode<K>,
    /// Rotation classification threshold in radians.
    pub rotate_threshold: f64,
    /// Pinch classification threshold on `|ratio - 1|`.
    pub pinch_threshold: f64,
    /// Tap/drag boundary in accumulated screen pixels.
    pub tap_threshold: f64,
}

impl<K> GestureRecognizer<K> {
    /// Creates a recognizer with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
            mode: Mode::Idle,
            rotate_threshold: ROTATE_THRESHOLD,
            pinch_threshold: PINCH_THRESHOLD,
            tap_threshold: TAP_THRESHOLD,
        }
    }

    /// Number of live contacts.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact-based gesture is in progress.
    ///
    /// Hover processing at a higher layer is gated on this: pointer movement
    /// during an active gesture is gesture input, not hover.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Records a contact press.
    ///
    /// `target` is whatever the caller wants back if this interaction ends as
    /// a tap; it is held, not inspected. A second press captures the
    /// two-contact baseline (distance, angle, scale, rotation, and the
    /// surface-space midpoint the gesture will pivot around) from the current
    /// viewport state. Any in-flight focus animation is interrupted here.
    pub fn on_down(&mut self, id: PointerId, position: Point, target: K, view: &mut Viewport) {
        view.begin_user_input();
        self.contacts.insert(id, position);

        match self.contacts.len() {
            1 => {
                self.mode = Mode::Drag(DragSession {
                    last: position,
                    moved: 0.0,
                    target,
                });
            }
            2 => {
                // The pre-existing contact comes first so the session's
                // angle baseline is stable for its whole lifetime.
                let other = self.contacts.keys().copied().find(|k| *k != id);
                self.mode = match other.and_then(|o| self.capture_multi((o, id), view)) {
                    Some(session) => Mode::Multi(session),
                    None => Mode::Settling,
                };
            }
            _ => {
                // Three or more contacts: the two-finger session no longer
                // describes the input. Freeze until the count drops.
                self.mode = Mode::Settling;
            }
        }
    }

    /// Records a contact move and applies the classified update.
    ///
    /// Unknown contact ids are ignored.
    pub fn on_move(&mut self, id: PointerId, position: Point, view: &mut Viewport) {
        let Some(stored) = self.contacts.get_mut(&id) else {
            return;
        };
        *stored = position;

        match &mut self.mode {
            Mode::Drag(session) => {
                let delta = position - session.last;
                session.moved += delta.x.abs() + delta.y.abs();
                session.last = position;
                view.pan_by_screen(delta);
            }
            Mode::Multi(session) => {
                let (Some(&a), Some(&b)) = (
                    self.contacts.get(&session.ids.0),
                    self.contacts.get(&session.ids.1),
                ) else {
                    return;
                };
                if session.initial_distance <= 0.0 {
                    return;
                }

                let pinch_ratio = geom::distance(a, b) / session.initial_distance;
                let angle_delta = geom::angle(a, b) - session.initial_angle;

                let pinch_strength = (pinch_ratio - 1.0).abs();
                let rotate_strength = angle_delta.abs();

                if rotate_strength > self.rotate_threshold && rotate_strength > pinch_strength {
                    let next_rotation = session.initial_rotation + angle_delta.to_degrees();
                    view.rotate_about(session.midpoint, next_rotation);
                } else if pinch_strength > self.pinch_threshold {
                    view.set_scale_about(session.midpoint, session.initial_scale * pinch_ratio);
                    view.set_rotation_degrees(session.initial_rotation);
                }
                // Below both thresholds: no visual update this frame.
            }
            Mode::Idle | Mode::Settling => {}
        }
    }

    /// Records a contact release.
    ///
    /// Returns the press target when the interaction was a tap: a
    /// single-contact session that never went multi-contact and accumulated
    /// at most [`tap_threshold`](Self::tap_threshold) pixels of movement.
    pub fn on_up(&mut self, id: PointerId, view: &mut Viewport) -> Option<K> {
        self.release(id, view, true)
    }

    /// Records a contact cancellation. Identical cleanup to release, but the
    /// interaction can never be a tap.
    pub fn on_cancel(&mut self, id: PointerId, view: &mut Viewport) {
        let _ = self.release(id, view, false);
    }

    /// Drops all contacts and session state without reporting anything.
    pub fn clear(&mut self, view: &mut Viewport) {
        self.contacts.clear();
        self.mode = Mode::Idle;
        view.end_user_input();
    }

    fn release(&mut self, id: PointerId, view: &mut Viewport, allow_tap: bool) -> Option<K> {
        self.contacts.remove(&id)?;

        let mut tap = None;
        self.mode = match core::mem::take(&mut self.mode) {
            Mode::Drag(session) => {
                if allow_tap && session.moved <= self.tap_threshold {
                    tap = Some(session.target);
                }
                Mode::Idle
            }
            Mode::Multi(_) | Mode::Settling => match self.contacts.len() {
                0 => Mode::Idle,
                // Re-baseline from scratch: a fresh two-contact session
                // starts clean after a finger lifts out of a crowd.
                2 => {
                    let mut keys = self.contacts.keys().copied();
                    match (keys.next(), keys.next()) {
                        (Some(a), Some(b)) => match self.capture_multi((a, b), view) {
                            Some(session) => Mode::Multi(session),
                            None => Mode::Settling,
                        },
                        _ => Mode::Settling,
                    }
                }
                _ => Mode::Settling,
            },
            Mode::Idle => Mode::Idle,
        };

        if self.contacts.is_empty() {
            view.end_user_input();
        }
        tap
    }

    fn capture_multi(&self, ids: (PointerId, PointerId), view: &Viewport) -> Option<MultiSession> {
        let a = *self.contacts.get(&ids.0)?;
        let b = *self.contacts.get(&ids.1)?;
        Some(MultiSession {
            ids,
            initial_distance: geom::distance(a, b),
            initial_angle: geom::angle(a, b),
            initial_scale: view.scale(),
            initial_rotation: view.rotation_degrees(),
            midpoint: view.screen_to_surface(a.midpoint(b)),
        })
    }
}

impl<K> Default for GestureRecognizer<K> {
    fn default() -> Self {
        Self::new()
    }
}
