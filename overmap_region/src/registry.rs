// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

/// A named, hit-testable, focusable sub-area of the map artwork.
///
/// Authored once in surface coordinates; immutable at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    id: String,
    title: String,
    info: String,
    bounds: Rect,
}

impl Region {
    /// Creates a region from its identifier, display name, descriptive
    /// text, and bounding geometry in surface units.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        info: impl Into<String>,
        bounds: Rect,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            info: info.into(),
            bounds,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Descriptive text shown in tooltips and selection modals.
    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Bounding geometry in surface units.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Read-only projection over the authored regions, in document order, plus
/// the single active-highlight slot.
#[derive(Clone, Debug)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    by_id: HashMap<String, usize>,
    active: Option<usize>,
}

impl RegionRegistry {
    /// Builds a registry from authored regions, preserving document order.
    ///
    /// Duplicate identifiers are an authoring mistake; the first occurrence
    /// wins and later ones are dropped.
    #[must_use]
    pub fn new(regions: Vec<Region>) -> Self {
        let mut kept: Vec<Region> = Vec::with_capacity(regions.len());
        let mut by_id = HashMap::with_capacity(regions.len());
        for region in regions {
            if !by_id.contains_key(region.id()) {
                by_id.insert(region.id.clone(), kept.len());
                kept.push(region);
            }
        }
        Self {
            regions: kept,
            by_id,
            active: None,
        }
    }

    /// The campus map shipped with the original artwork.
    #[must_use]
    pub fn campus() -> Self {
        // Bounding boxes in the artwork's 4558.44 x 5184.06 surface space.
        Self::new(alloc::vec![
            Region::new(
                "basketballcourt",
                "BasketBall Court",
                "No events here",
                Rect::new(3230.0, 2265.0, 3935.0, 2850.0),
            ),
            Region::new(
                "mitegreens",
                "MITE Greens",
                "No events here",
                Rect::new(1650.0, 3300.0, 2750.0, 4150.0),
            ),
            Region::new(
                "mainblock",
                "Main Block",
                "No events here",
                Rect::new(2100.0, 2520.0, 3100.0, 3330.0),
            ),
            Region::new(
                "store",
                "Store",
                "No events here",
                Rect::new(2850.0, 3450.0, 3350.0, 3900.0),
            ),
        ])
    }

    /// All regions in document order.
    #[must_use]
    pub fn list(&self) -> &[Region] {
        &self.regions
    }

    /// Looks up a region by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.by_id.get(id).map(|&i| &self.regions[i])
    }

    /// Returns the topmost region whose bounds contain the given
    /// surface-space point, or `None` over the background.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&Region> {
        // Later in document order renders on top, so scan in reverse.
        self.regions
            .iter()
            .rev()
            .find(|region| region.bounds.contains(point))
    }

    /// Marks the named region as active, clearing any previous highlight.
    ///
    /// Unknown identifiers are a silent no-op; the previous highlight is
    /// kept. Returns whether the highlight changed.
    pub fn set_active(&mut self, id: &str) -> bool {
        match self.by_id.get(id) {
            Some(&i) => {
                self.active = Some(i);
                true
            }
            None => false,
        }
    }

    /// Removes the highlight entirely.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// The currently highlighted region, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Region> {
        self.active.map(|i| &self.regions[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> RegionRegistry {
        RegionRegistry::new(vec![
            Region::new("a", "Alpha", "first", Rect::new(0.0, 0.0, 100.0, 100.0)),
            Region::new("b", "Beta", "second", Rect::new(50.0, 50.0, 150.0, 150.0)),
        ])
    }

    #[test]
    fn list_preserves_document_order() {
        let reg = sample();
        let ids: Vec<&str> = reg.list().iter().map(Region::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn hit_test_prefers_topmost_region() {
        let reg = sample();
        // Inside both: "b" is later in document order, so on top.
        assert_eq!(reg.hit_test(Point::new(75.0, 75.0)).unwrap().id(), "b");
        // Only inside "a".
        assert_eq!(reg.hit_test(Point::new(10.0, 10.0)).unwrap().id(), "a");
    }

    #[test]
    fn hit_test_misses_background() {
        let reg = sample();
        assert!(reg.hit_test(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn active_is_reassigned_never_accumulated() {
        let mut reg = sample();
        assert!(reg.set_active("a"));
        assert!(reg.set_active("b"));
        assert_eq!(reg.active().unwrap().id(), "b");
    }

    #[test]
    fn unknown_active_id_is_a_noop() {
        let mut reg = sample();
        reg.set_active("a");
        assert!(!reg.set_active("nope"));
        assert_eq!(reg.active().unwrap().id(), "a");
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let reg = RegionRegistry::new(vec![
            Region::new("a", "First", "", Rect::new(0.0, 0.0, 1.0, 1.0)),
            Region::new("a", "Second", "", Rect::new(2.0, 2.0, 3.0, 3.0)),
        ]);
        assert_eq!(reg.list().len(), 1);
        assert_eq!(reg.get("a").unwrap().title(), "First");
    }

    #[test]
    fn campus_registry_resolves_mainblock() {
        let reg = RegionRegistry::campus();
        let main = reg.get("mainblock").unwrap();
        assert_eq!(main.title(), "Main Block");
        assert!(reg.hit_test(main.bounds().center()).is_some());
    }
}
