// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overmap View: viewport state for an interactive 2D map surface.
//!
//! This crate provides a small, headless model of a map viewport: a logical
//! drawing surface (the coordinate space the map artwork is authored in)
//! rendered into a device-pixel view rectangle under a pan/zoom/rotate
//! transform. It focuses on:
//! - The authoritative [`Transform2D`] (scale, rotation, translation) with
//!   scale clamping.
//! - Coordinate conversion between screen pixels, surface units, and the
//!   transformed map plane.
//! - Anchor-preserving zoom and rotation (a chosen point stays fixed on
//!   screen while the transform changes).
//! - An explicit [`ViewPhase`] so gesture input and animations coordinate
//!   ownership of the transform instead of racing on it.
//!
//! It does **not** own any scene graph, gesture recognition, or rendering
//! backend. Callers are expected to:
//! - Wire pointer/wheel input into viewport operations at a higher layer
//!   (for example with `overmap_gesture`).
//! - Read the transform each frame and hand it to whatever draws the map.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use overmap_view::Viewport;
//!
//! // 800x600 widget showing a 4558x5184 surface.
//! let mut view = Viewport::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Size::new(4558.44, 5184.06),
//! );
//!
//! // Zoom in around the cursor; the surface point under it stays put.
//! view.zoom_about(Point::new(400.0, 300.0), 1.1);
//!
//! // Convert a screen point into map coordinates (for hit testing, etc.).
//! let map_pt = view.screen_to_map(Point::new(400.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform applies rotation about the surface origin, then
//!   translation in surface units, then uniform scale.
//! - Translation deltas from dragging are screen-aligned; rotation does not
//!   re-orient drag directions.
//! - All geometry-dependent operations silently no-op while the view rect or
//!   surface size is degenerate (layout not yet complete).
//!
//! This crate is `no_std`.

#![no_std]

pub mod geom;
mod transform;
mod viewport;

pub use transform::Transform2D;
pub use viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ViewPhase, Viewport};
