// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry helpers shared by the viewport and gesture layers.

use kurbo::{Point, Rect, Size, Vec2};

/// Euclidean distance between two screen points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle of the segment from `a` to `b` in radians, in `(-pi, pi]`.
#[must_use]
pub fn angle(a: Point, b: Point) -> f64 {
    (b - a).atan2()
}

/// Rotates a vector by `radians` about the origin.
#[must_use]
pub fn rotate(v: Vec2, radians: f64) -> Vec2 {
    let u = Vec2::from_angle(radians);
    Vec2::new(v.x * u.x - v.y * u.y, v.x * u.y + v.y * u.x)
}

/// Linear rescale of a screen-pixel point into the logical surface
/// coordinate system declared by `surface_size`.
///
/// The mapping depends on the on-screen rendered size, so callers must use a
/// current `view_rect` (recomputed on resize, not a cached layout).
#[must_use]
pub fn screen_to_surface(point: Point, view_rect: Rect, surface_size: Size) -> Point {
    Point::new(
        (point.x - view_rect.x0) / view_rect.width() * surface_size.width,
        (point.y - view_rect.y0) / view_rect.height() * surface_size.height,
    )
}
