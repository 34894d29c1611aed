// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::geom;

/// The pan/zoom/rotate transform applied to the map surface.
///
/// Applied to a surface-space point as: rotate about the surface origin,
/// translate by [`translate`](Self::translate) (surface units), then scale
/// uniformly. The result is a point in surface units that the host renders
/// into the view rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Rotation about the surface origin, in degrees.
    pub rotation_degrees: f64,
    /// Translation in surface units, applied after rotation.
    pub translate: Vec2,
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_degrees: 0.0,
        translate: Vec2::ZERO,
    };

    /// Maps a surface-space point through the transform.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        let rotated = geom::rotate(p.to_vec2(), self.rotation_degrees * PI / 180.0);
        ((rotated + self.translate) * self.scale).to_point()
    }

    /// Inverse of [`map_point`](Self::map_point).
    ///
    /// Returns the original point unchanged when the scale is degenerate.
    #[must_use]
    pub fn unmap_point(&self, p: Point) -> Point {
        if self.scale <= 0.0 {
            return p;
        }
        let anchor = p.to_vec2() / self.scale - self.translate;
        geom::rotate(anchor, -self.rotation_degrees * PI / 180.0).to_point()
    }

    /// Linear interpolation between two transforms, component-wise.
    ///
    /// `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            rotation_degrees: self.rotation_degrees
                + (other.rotation_degrees - self.rotation_degrees) * t,
            translate: self.translate + (other.translate - self.translate) * t,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
