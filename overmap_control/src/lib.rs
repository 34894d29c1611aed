// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overmap Control: the host-facing handle over one interactive map.
//!
//! [`MapController`] composes the viewport, gesture recognizer, region
//! registry, and focus controller into a single imperative surface. The host
//! feeds it raw pointer, wheel, hover, resize, and frame callbacks; the
//! controller mutates the viewport and hands back values the host renders:
//! [`MapEvent`]s for selection modals and [`TooltipState`] for hover.
//!
//! Nothing here draws or schedules. Time is host-supplied milliseconds and
//! events are plain return values, so the controller drops into any frame
//! loop or UI framework unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use overmap_control::{MapController, MapEvent, PointerId};
//!
//! // A view rect matching the campus artwork 1:1 keeps the doctest's
//! // screen coordinates equal to surface coordinates.
//! let mut map = MapController::campus(Rect::new(0.0, 0.0, 4558.44, 5184.06), true);
//!
//! // Tap the main block: the region is selected and the view flies to it.
//! let id = PointerId::new(1).unwrap();
//! map.pointer_down(id, Point::new(2600.0, 2925.0));
//! let event = map.pointer_up(id).unwrap();
//! assert!(matches!(
//!     event,
//!     MapEvent::RegionSelected { ref title, .. } if title == "Main Block"
//! ));
//!
//! // Drive the transition from the frame loop until it settles.
//! let mut now = 0;
//! while map.frame(now) {
//!     now += 16;
//! }
//! assert_eq!(map.viewport().rotation_degrees(), 0.0);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod controller;

pub use controller::{MapController, MapEvent, TooltipState, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
pub use overmap_gesture::PointerId;
pub use overmap_region::search::{SearchIndex, SearchItem, SearchKind};
pub use overmap_region::{Region, RegionRegistry};
