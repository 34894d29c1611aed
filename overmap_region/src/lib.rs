// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overmap Region: addressable sub-areas of the map surface.
//!
//! A [`Region`] is a named, hit-testable, focusable area authored once in
//! surface coordinates and immutable at runtime. The [`RegionRegistry`] is a
//! read-only projection over the authored set, plus the single mutable bit
//! the map needs: which region (at most one) is currently highlighted.
//!
//! Hit testing is a point-in-bounds query against the authored geometry in
//! document order, topmost first, so overlapping regions resolve the way the
//! artwork stacks them. There is no markup tree to walk; the registry itself
//! is the spatial source of truth.
//!
//! The [`search`] module implements the query contract the external search
//! UI consumes: a combined index of regions and externally supplied entries,
//! filtered by case-insensitive substring match.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use overmap_region::{Region, RegionRegistry};
//!
//! let mut registry = RegionRegistry::new(vec![
//!     Region::new("plaza", "Plaza", "Open all day", Rect::new(0.0, 0.0, 100.0, 100.0)),
//!     Region::new("stage", "Main Stage", "Concerts here", Rect::new(80.0, 0.0, 200.0, 60.0)),
//! ]);
//!
//! // Topmost region wins where they overlap.
//! let hit = registry.hit_test(Point::new(90.0, 30.0)).unwrap();
//! assert_eq!(hit.id(), "stage");
//!
//! // At most one region carries the highlight.
//! registry.set_active("plaza");
//! assert_eq!(registry.active().map(Region::id), Some("plaza"));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod registry;
pub mod search;

pub use registry::{Region, RegionRegistry};
