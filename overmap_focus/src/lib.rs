// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overmap Focus: animated fly-to transitions for the map viewport.
//!
//! A [`FocusController`] owns at most one in-flight transition. Asking it to
//! frame a rectangle computes a target transform (zoomed to fit with padding,
//! centered, rotation reset to upright) and captures the viewport's current
//! transform as the starting point. The host then drives the transition from
//! its frame loop by calling [`FocusController::tick`] with a monotonic
//! millisecond timestamp; the controller interpolates with an ease-in-out
//! curve and writes each intermediate transform back to the viewport.
//!
//! The viewport's interaction phase arbitrates between animation and direct
//! manipulation: if the user touches the map mid-flight the phase leaves
//! `Animating` and the next tick abandons the transition, leaving the view
//! wherever the user grabbed it.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use overmap_focus::FocusController;
//! use overmap_view::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(1000.0, 1000.0));
//! let mut focus = FocusController::new();
//!
//! focus.focus_rect(&mut view, Rect::new(100.0, 100.0, 300.0, 300.0));
//! assert!(focus.is_animating());
//!
//! // Host frame loop: first tick baselines the clock, later ticks advance.
//! // `tick` reports whether another frame is still needed.
//! assert!(focus.tick(&mut view, 0));
//! assert!(!focus.tick(&mut view, 800));
//! assert!(!focus.is_animating());
//! assert_eq!(view.rotation_degrees(), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;

pub use controller::{FOCUS_DURATION_MS, FOCUS_PADDING, FocusController};
