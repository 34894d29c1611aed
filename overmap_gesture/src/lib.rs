// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overmap Gesture: multi-touch gesture recognition for the map viewport.
//!
//! This crate classifies a stream of raw pointer-contact events
//! (press/move/release/cancel per contact id) into the interactions the map
//! supports, and applies them to an [`overmap_view::Viewport`]:
//!
//! - **Drag**: one contact pans the viewport by screen deltas.
//! - **Pinch-zoom**: two contacts spreading or closing rescale the viewport
//!   about the gesture midpoint.
//! - **Two-finger rotate**: two contacts turning rotate the viewport about
//!   the gesture midpoint.
//! - **Tap**: a press/release with almost no movement reports the target
//!   remembered at press time, for selection at a higher layer.
//!
//! Pinch and rotate are disambiguated per move event with hysteresis
//! thresholds and are mutually exclusive per frame: whichever intent is
//! stronger wins outright, and below both thresholds nothing updates. This
//! keeps ambiguous two-finger input from jittering between modes or
//! compounding blended error.
//!
//! ## Usage
//!
//! ```rust
//! use core::num::NonZeroU64;
//! use kurbo::{Point, Rect, Size};
//! use overmap_gesture::GestureRecognizer;
//! use overmap_view::Viewport;
//!
//! let mut view = Viewport::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Size::new(1600.0, 1200.0),
//! );
//! let mut gestures: GestureRecognizer<&str> = GestureRecognizer::new();
//! let finger = NonZeroU64::new(1).unwrap();
//!
//! // Press, barely move, release: that's a tap on the remembered target.
//! gestures.on_down(finger, Point::new(100.0, 100.0), "plaza", &mut view);
//! gestures.on_move(finger, Point::new(101.0, 100.0), &mut view);
//! let tap = gestures.on_up(finger, &mut view);
//! assert_eq!(tap, Some("plaza"));
//! ```
//!
//! The recognizer is generic over the tap target type `K`: callers capture
//! whatever they need at press time (a region id, a hit-test payload, a
//! surface point) and get it back only if the interaction turns out to be a
//! tap rather than a drag.
//!
//! This crate is `no_std`.

#![no_std]

mod recognizer;

pub use recognizer::{
    GestureRecognizer, PINCH_THRESHOLD, PointerId, ROTATE_THRESHOLD, TAP_THRESHOLD,
};
