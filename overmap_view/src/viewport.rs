// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Point, Rect, Size, Vec2};

use crate::geom;
use crate::transform::Transform2D;

/// Default lower zoom bound.
pub const DEFAULT_MIN_SCALE: f64 = 0.6;
/// Default upper zoom bound.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Who currently drives the viewport transform.
///
/// The transform has two producers: continuous gesture input and animated
/// focus transitions. The phase makes the hand-off explicit: user input
/// always wins, and an animation abandoned mid-flight simply stops writing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// No gesture and no animation in progress.
    #[default]
    Idle,
    /// A pointer gesture owns the transform.
    UserDriven,
    /// A focus transition owns the transform.
    Animating,
}

/// Viewport over the logical map surface.
///
/// `Viewport` tracks the on-screen view rectangle (device pixels), the
/// declared logical surface size, and the authoritative [`Transform2D`].
/// All mutation goes through its methods; scale is always clamped to the
/// configured range. While the view rect or surface size is degenerate
/// (layout not yet complete), geometry-dependent operations no-op.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    surface_size: Size,
    transform: Transform2D,
    min_scale: f64,
    max_scale: f64,
    pixels_per_unit: f64,
    phase: ViewPhase,
}

impl Viewport {
    /// Creates a viewport rendering `surface_size` logical units into
    /// `view_rect` device pixels, with the identity transform and default
    /// zoom limits.
    #[must_use]
    pub fn new(view_rect: Rect, surface_size: Size) -> Self {
        let mut vp = Self {
            view_rect,
            surface_size,
            transform: Transform2D::IDENTITY,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            pixels_per_unit: 0.0,
            phase: ViewPhase::Idle,
        };
        vp.recompute_pixel_ratio();
        vp
    }

    /// Returns the current view rectangle in device pixels.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device pixels.
    ///
    /// The cached screen-pixels-per-surface-unit ratio is recomputed eagerly
    /// here; drag deltas converted before the next resize notification would
    /// otherwise use a stale factor.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
        self.recompute_pixel_ratio();
    }

    /// Returns the declared logical surface size.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Sets the logical surface size.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = size;
        self.recompute_pixel_ratio();
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Writes a whole transform, clamping its scale into the zoom range.
    ///
    /// This is the entry point for animation frames; gestures use the
    /// incremental operations instead.
    pub fn apply_transform(&mut self, transform: Transform2D) {
        self.transform = Transform2D {
            scale: self.clamp_scale(transform.scale),
            ..transform
        };
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the current rotation in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.transform.rotation_degrees
    }

    /// Sets the rotation without compensating translation.
    ///
    /// Pinch scale updates restore the gesture's initial rotation this way;
    /// pivot-preserving rotation goes through [`rotate_about`](Self::rotate_about).
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.transform.rotation_degrees = degrees;
    }

    /// Returns the current translation in surface units.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.transform.translate
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.transform.scale = self.clamp_scale(self.transform.scale);
    }

    /// Returns `(min_scale, max_scale)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Clamps a candidate scale into the configured zoom range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Whether layout has produced usable geometry.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.pixels_per_unit > 0.0
            && self.view_rect.height() > 0.0
            && self.surface_size.height > 0.0
    }

    /// Converts a screen-pixel point into surface units (pre-transform).
    ///
    /// This is the linear rescale between the rendered size and the declared
    /// surface size; it does not invert the pan/zoom/rotate transform.
    #[must_use]
    pub fn screen_to_surface(&self, point: Point) -> Point {
        geom::screen_to_surface(point, self.view_rect, self.surface_size)
    }

    /// Converts a screen-pixel point into authored map coordinates,
    /// inverting the full transform. Used for hit testing.
    #[must_use]
    pub fn screen_to_map(&self, point: Point) -> Point {
        self.transform.unmap_point(self.screen_to_surface(point))
    }

    /// Pans by a screen-pixel delta, converting it into surface units.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if !self.is_laid_out() || self.transform.scale <= 0.0 {
            return;
        }
        self.transform.translate += delta / (self.transform.scale * self.pixels_per_unit);
    }

    /// Multiplies the scale by `factor`, keeping the surface point under the
    /// given screen point fixed. Wheel zoom enters here.
    pub fn zoom_about(&mut self, screen_point: Point, factor: f64) {
        if !self.is_laid_out() || factor <= 0.0 {
            return;
        }
        let next = self.clamp_scale(self.transform.scale * factor);
        if next == self.transform.scale {
            return;
        }
        let anchor_pt = self.screen_to_surface(screen_point);
        self.rescale_about(anchor_pt, next);
    }

    /// Sets an absolute scale, keeping the given surface-space point (for
    /// example a pinch midpoint) fixed on screen.
    pub fn set_scale_about(&mut self, surface_point: Point, scale: f64) {
        if !self.is_laid_out() {
            return;
        }
        let next = self.clamp_scale(scale);
        self.rescale_about(surface_point, next);
    }

    /// Rotates to an absolute angle, keeping the given surface-space point
    /// fixed on screen by compensating translation.
    pub fn rotate_about(&mut self, surface_point: Point, degrees: f64) {
        if !self.is_laid_out() || self.transform.scale <= 0.0 {
            return;
        }
        let delta_radians = (degrees - self.transform.rotation_degrees) * PI / 180.0;
        let anchor = surface_point.to_vec2() / self.transform.scale - self.transform.translate;
        let rotated = geom::rotate(anchor, delta_radians);
        self.transform.translate += anchor - rotated;
        self.transform.rotation_degrees = degrees;
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Marks the transform as gesture-owned.
    ///
    /// An in-flight animation is abandoned here: its further frame writes
    /// become no-ops, so the user gesture always wins.
    pub fn begin_user_input(&mut self) {
        self.phase = ViewPhase::UserDriven;
    }

    /// Returns the viewport to idle after the last contact lifts.
    pub fn end_user_input(&mut self) {
        if self.phase == ViewPhase::UserDriven {
            self.phase = ViewPhase::Idle;
        }
    }

    /// Marks the transform as animation-owned.
    pub fn begin_animation(&mut self) {
        self.phase = ViewPhase::Animating;
    }

    /// Returns the viewport to idle when an animation completes.
    pub fn end_animation(&mut self) {
        if self.phase == ViewPhase::Animating {
            self.phase = ViewPhase::Idle;
        }
    }

    fn rescale_about(&mut self, surface_point: Point, next_scale: f64) {
        if next_scale == self.transform.scale || self.transform.scale <= 0.0 {
            return;
        }
        let anchor = surface_point.to_vec2() / self.transform.scale - self.transform.translate;
        self.transform.translate = surface_point.to_vec2() / next_scale - anchor;
        self.transform.scale = next_scale;
    }

    fn recompute_pixel_ratio(&mut self) {
        self.pixels_per_unit = if self.view_rect.width() > 0.0 && self.surface_size.width > 0.0 {
            self.view_rect.width() / self.surface_size.width
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        // 800x600 view over a 1600x1200 surface: 0.5 pixels per unit.
        Viewport::new(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Size::new(1600.0, 1200.0),
        )
    }

    #[test]
    fn pan_converts_screen_pixels_to_surface_units() {
        let mut vp = test_viewport();
        vp.pan_by_screen(Vec2::new(8.0, 6.0));
        // delta / (scale * pixels_per_unit) = (8, 6) / (1.0 * 0.5)
        assert!((vp.translate().x - 16.0).abs() < 1e-12);
        assert!((vp.translate().y - 12.0).abs() < 1e-12);
    }

    #[test]
    fn pan_accounts_for_current_scale() {
        let mut vp = test_viewport();
        vp.zoom_about(Point::new(0.0, 0.0), 2.0);
        let before = vp.translate();
        vp.pan_by_screen(Vec2::new(8.0, 0.0));
        assert!((vp.translate().x - before.x - 8.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = test_viewport();
        let anchor_screen = Point::new(300.0, 200.0);
        let map_before = vp.screen_to_map(anchor_screen);

        vp.zoom_about(anchor_screen, 2.0);
        let map_after = vp.screen_to_map(anchor_screen);

        assert!((map_after.x - map_before.x).abs() < 1e-9);
        assert!((map_after.y - map_before.y).abs() < 1e-9);
    }

    #[test]
    fn scale_always_stays_within_limits() {
        let mut vp = test_viewport();
        for _ in 0..50 {
            vp.zoom_about(Point::new(400.0, 300.0), 1.5);
            let (min, max) = vp.zoom_limits();
            assert!(vp.scale() >= min && vp.scale() <= max);
        }
        for _ in 0..50 {
            vp.zoom_about(Point::new(400.0, 300.0), 0.5);
            let (min, max) = vp.zoom_limits();
            assert!(vp.scale() >= min && vp.scale() <= max);
        }
        assert_eq!(vp.scale(), DEFAULT_MIN_SCALE);
    }

    #[test]
    fn set_zoom_limits_normalizes_and_reclamps() {
        let mut vp = test_viewport();
        vp.set_zoom_limits(3.0, 2.0);
        assert_eq!(vp.zoom_limits(), (2.0, 3.0));
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn rotate_about_keeps_pivot_fixed() {
        let mut vp = test_viewport();
        vp.pan_by_screen(Vec2::new(40.0, -25.0));
        let pivot = vp.screen_to_surface(Point::new(500.0, 250.0));
        let map_pt = vp.transform().unmap_point(pivot);

        vp.rotate_about(pivot, 30.0);

        let projected = vp.transform().map_point(map_pt);
        assert!((projected.x - pivot.x).abs() < 1e-9);
        assert!((projected.y - pivot.y).abs() < 1e-9);
        assert!((vp.rotation_degrees() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_layout_noops() {
        let mut vp = Viewport::new(Rect::ZERO, Size::new(1600.0, 1200.0));
        assert!(!vp.is_laid_out());
        vp.pan_by_screen(Vec2::new(10.0, 10.0));
        vp.zoom_about(Point::new(5.0, 5.0), 2.0);
        vp.rotate_about(Point::new(5.0, 5.0), 45.0);
        assert_eq!(vp.transform(), Transform2D::IDENTITY);
    }

    #[test]
    fn resize_recomputes_pixel_ratio_eagerly() {
        let mut vp = Viewport::new(Rect::ZERO, Size::new(1600.0, 1200.0));
        vp.set_view_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(vp.is_laid_out());
        vp.pan_by_screen(Vec2::new(8.0, 0.0));
        assert!((vp.translate().x - 16.0).abs() < 1e-12);
    }

    #[test]
    fn user_input_interrupts_animation_phase() {
        let mut vp = test_viewport();
        vp.begin_animation();
        assert_eq!(vp.phase(), ViewPhase::Animating);
        vp.begin_user_input();
        assert_eq!(vp.phase(), ViewPhase::UserDriven);
        // Ending an animation that was already interrupted changes nothing.
        vp.end_animation();
        assert_eq!(vp.phase(), ViewPhase::UserDriven);
        vp.end_user_input();
        assert_eq!(vp.phase(), ViewPhase::Idle);
    }

    #[test]
    fn apply_transform_clamps_scale() {
        let mut vp = test_viewport();
        vp.apply_transform(Transform2D {
            scale: 100.0,
            rotation_degrees: 0.0,
            translate: Vec2::ZERO,
        });
        assert_eq!(vp.scale(), DEFAULT_MAX_SCALE);
    }
}
