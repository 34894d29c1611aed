// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};
use overmap_view::{Transform2D, ViewPhase, Viewport};

/// Fraction of the viewport the focused rectangle should fill.
///
/// The fit scale is multiplied by this, leaving breathing room around the
/// framed region.
pub const FOCUS_PADDING: f64 = 0.7;

/// Duration of a focus transition in milliseconds.
pub const FOCUS_DURATION_MS: u64 = 800;

/// One in-flight transition. The clock is baselined lazily on the first
/// tick, so focus requests need no timestamp of their own.
#[derive(Clone, Copy, Debug)]
struct Flight {
    from: Transform2D,
    to: Transform2D,
    start_ms: Option<u64>,
}

/// Drives eased fly-to transitions that frame a target rectangle.
///
/// At most one transition is in flight; a new focus request retargets from
/// wherever the viewport currently is. The controller never runs its own
/// clock: the host calls [`FocusController::tick`] with monotonic
/// milliseconds from its frame loop.
#[derive(Clone, Copy, Debug)]
pub struct FocusController {
    flight: Option<Flight>,
    /// Transition length in milliseconds.
    pub duration_ms: u64,
    /// Padding factor applied to the fit scale.
    pub padding: f64,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusController {
    /// Creates a controller with the stock duration and padding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flight: None,
            duration_ms: FOCUS_DURATION_MS,
            padding: FOCUS_PADDING,
        }
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// Starts a transition that frames `bounds` (in surface units): zoomed
    /// so the rectangle fills [`FOCUS_PADDING`] of the viewport, centered,
    /// with rotation reset to upright.
    ///
    /// The start point is the viewport's current transform, so refocusing
    /// mid-flight bends the path rather than snapping back. Degenerate
    /// bounds or an empty surface leave everything untouched; returns
    /// whether a transition began.
    pub fn focus_rect(&mut self, view: &mut Viewport, bounds: Rect) -> bool {
        let surface = view.surface_size();
        if bounds.width() <= 0.0
            || bounds.height() <= 0.0
            || surface.width <= 0.0
            || surface.height <= 0.0
        {
            return false;
        }

        let fit = (surface.width / bounds.width()).min(surface.height / bounds.height());
        let scale = view.clamp_scale(fit * self.padding);
        let center = bounds.center();
        let to = Transform2D {
            scale,
            rotation_degrees: 0.0,
            translate: Vec2::new(
                surface.width * 0.5 / scale - center.x,
                surface.height * 0.5 / scale - center.y,
            ),
        };

        self.flight = Some(Flight {
            from: view.transform(),
            to,
            start_ms: None,
        });
        view.begin_animation();
        true
    }

    /// Advances the in-flight transition to `now_ms`, writing the
    /// interpolated transform to the viewport.
    ///
    /// If the viewport has left the animating phase (the user grabbed the
    /// map) the transition is abandoned where it stands. Returns whether
    /// another frame is still needed.
    pub fn tick(&mut self, view: &mut Viewport, now_ms: u64) -> bool {
        let Some(flight) = self.flight.as_mut() else {
            return false;
        };
        if view.phase() != ViewPhase::Animating {
            self.flight = None;
            return false;
        }

        let start = *flight.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= self.duration_ms {
            view.apply_transform(flight.to);
            view.end_animation();
            self.flight = None;
            return false;
        }

        let t = elapsed as f64 / self.duration_ms as f64;
        view.apply_transform(flight.from.lerp(&flight.to, ease_in_out_cubic(t)));
        true
    }

    /// Drops any in-flight transition, leaving the viewport where it is.
    pub fn cancel(&mut self, view: &mut Viewport) {
        if self.flight.take().is_some() && view.phase() == ViewPhase::Animating {
            view.end_animation();
        }
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u * u / 2.0
    }
}
