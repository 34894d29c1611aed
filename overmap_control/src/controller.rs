// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use overmap_focus::FocusController;
use overmap_gesture::{GestureRecognizer, PointerId};
use overmap_region::search::{SearchIndex, SearchItem};
use overmap_region::{Region, RegionRegistry};
use overmap_view::Viewport;

/// Zoom factor applied per scroll-up wheel step.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Zoom factor applied per scroll-down wheel step.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// An event the host should surface, returned from input methods.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// A region was tap-selected; the host shows its detail modal.
    RegionSelected {
        /// Identifier of the selected region.
        region_id: String,
        /// Display name.
        title: String,
        /// Descriptive text.
        info: String,
    },
}

/// Hover tooltip state the host renders.
///
/// When the pointer leaves every region only `visible` flips off; the text
/// fields keep their last values so a fade-out can finish rendering them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    /// Whether the tooltip should be shown.
    pub visible: bool,
    /// Pointer position in screen pixels.
    pub position: Point,
    /// Title of the hovered region.
    pub title: String,
    /// Descriptive text of the hovered region.
    pub info: String,
}

/// The host-facing imperative handle over one interactive map.
///
/// Owns the viewport, gesture recognizer, region registry, and focus
/// controller, and wires raw input callbacks into viewport mutations and
/// returned [`MapEvent`]s. Gestures carry the map-space point under the
/// initial press as their tap payload, so hit testing happens against where
/// the press landed, not where the pointer drifted to.
#[derive(Clone, Debug)]
pub struct MapController {
    view: Viewport,
    gestures: GestureRecognizer<Point>,
    regions: RegionRegistry,
    focus: FocusController,
    search: SearchIndex,
    tooltip: TooltipState,
    hover_enabled: bool,
}

impl MapController {
    /// Creates a controller over the given regions.
    ///
    /// `hover_enabled` declares whether the host delivers hover movement;
    /// touch-only hosts pass `false` and [`hover`](Self::hover) becomes
    /// inert.
    #[must_use]
    pub fn new(
        view_rect: Rect,
        surface_size: Size,
        regions: RegionRegistry,
        hover_enabled: bool,
    ) -> Self {
        let search = SearchIndex::build(&regions, []);
        Self {
            view: Viewport::new(view_rect, surface_size),
            gestures: GestureRecognizer::new(),
            regions,
            focus: FocusController::new(),
            search,
            tooltip: TooltipState::default(),
            hover_enabled,
        }
    }

    /// Creates a controller over the stock campus map.
    #[must_use]
    pub fn campus(view_rect: Rect, hover_enabled: bool) -> Self {
        // The campus artwork's authored dimensions.
        let surface = Size::new(4558.44, 5184.06);
        Self::new(view_rect, surface, RegionRegistry::campus(), hover_enabled)
    }

    /// The viewport, for reads (current transform, coordinate conversion).
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    /// The viewport, for host-side configuration such as zoom limits.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.view
    }

    /// The region registry, for the external search UI and rendering.
    #[must_use]
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// Records a contact press at a screen position.
    pub fn pointer_down(&mut self, id: PointerId, position: Point) {
        let pressed = self.view.screen_to_map(position);
        self.gestures.on_down(id, position, pressed, &mut self.view);
    }

    /// Records a contact move, panning/zooming/rotating as classified.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) {
        self.gestures.on_move(id, position, &mut self.view);
    }

    /// Records a contact release.
    ///
    /// A confirmed tap hit-tests the press point; tapping a region marks it
    /// active, starts a focus transition, and returns the selection event.
    /// Taps on the background return nothing and leave the highlight alone.
    pub fn pointer_up(&mut self, id: PointerId) -> Option<MapEvent> {
        let pressed = self.gestures.on_up(id, &mut self.view)?;
        let region = self.regions.hit_test(pressed)?;
        let (region_id, title, info, bounds) = (
            String::from(region.id()),
            String::from(region.title()),
            String::from(region.info()),
            region.bounds(),
        );

        self.regions.set_active(&region_id);
        self.focus.focus_rect(&mut self.view, bounds);
        Some(MapEvent::RegionSelected {
            region_id,
            title,
            info,
        })
    }

    /// Records a contact cancellation. Never selects.
    pub fn pointer_cancel(&mut self, id: PointerId) {
        self.gestures.on_cancel(id, &mut self.view);
    }

    /// Applies one wheel step, zooming about the cursor.
    pub fn wheel(&mut self, position: Point, scroll_up: bool) {
        let factor = if scroll_up {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        // Bracketing as user input makes a wheel step interrupt any
        // in-flight focus transition.
        self.view.begin_user_input();
        self.view.zoom_about(position, factor);
        self.view.end_user_input();
    }

    /// Processes hover movement, updating and returning the tooltip state.
    ///
    /// Inert while hover is disabled or any contact is down: pointer
    /// movement during a gesture is gesture input, not hover.
    pub fn hover(&mut self, position: Point) -> &TooltipState {
        if !self.hover_enabled || !self.gestures.is_idle() {
            return &self.tooltip;
        }
        match self.regions.hit_test(self.view.screen_to_map(position)) {
            Some(region) => {
                self.tooltip = TooltipState {
                    visible: true,
                    position,
                    title: String::from(region.title()),
                    info: String::from(region.info()),
                };
            }
            None => self.tooltip.visible = false,
        }
        &self.tooltip
    }

    /// Hides the tooltip when the pointer leaves the map entirely.
    pub fn hover_leave(&mut self) {
        self.tooltip.visible = false;
    }

    /// The current tooltip state.
    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Advances any in-flight focus transition to `now_ms` (host-supplied
    /// monotonic milliseconds). Returns whether another frame is needed.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        self.focus.tick(&mut self.view, now_ms)
    }

    /// Handles a host resize, keeping drag conversion factors fresh.
    pub fn resized(&mut self, view_rect: Rect) {
        self.view.set_view_rect(view_rect);
    }

    /// Marks the named region active and starts a focus transition to it.
    ///
    /// Unknown identifiers are a silent no-op. Returns whether a transition
    /// began.
    pub fn focus_region(&mut self, id: &str) -> bool {
        let Some(region) = self.regions.get(id) else {
            return false;
        };
        let bounds = region.bounds();
        self.regions.set_active(id);
        self.focus.focus_rect(&mut self.view, bounds)
    }

    /// Replaces the externally supplied search entries, rebuilding the index.
    pub fn set_search_entries(&mut self, extra: impl IntoIterator<Item = SearchItem>) {
        self.search = SearchIndex::build(&self.regions, extra);
    }

    /// The combined search index (regions plus external entries).
    #[must_use]
    pub fn search_index(&self) -> &SearchIndex {
        &self.search
    }

    /// Runs a search query; see [`SearchIndex::query`] for the semantics.
    /// Selecting a result is `focus_region(result.region_id)`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SearchItem> {
        self.search.query(query)
    }

    /// The currently highlighted region, if any.
    #[must_use]
    pub fn active_region(&self) -> Option<&Region> {
        self.regions.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overmap_view::ViewPhase;

    fn pid(n: u64) -> PointerId {
        PointerId::new(n).unwrap()
    }

    /// View rect matching the artwork 1:1, so screen coordinates equal
    /// surface coordinates while the transform is identity.
    fn campus() -> MapController {
        MapController::campus(Rect::new(0.0, 0.0, 4558.44, 5184.06), true)
    }

    #[test]
    fn tapping_mainblock_selects_and_focuses_it() {
        let mut map = campus();
        // Inside the "Main Block" bounds.
        map.pointer_down(pid(1), Point::new(2600.0, 2925.0));
        let event = map.pointer_up(pid(1));

        assert_eq!(
            event,
            Some(MapEvent::RegionSelected {
                region_id: String::from("mainblock"),
                title: String::from("Main Block"),
                info: String::from("No events here"),
            })
        );
        assert_eq!(map.active_region().unwrap().id(), "mainblock");
        assert_eq!(map.viewport().phase(), ViewPhase::Animating);

        // Run the transition out and check the framing took hold.
        map.frame(0);
        assert!(!map.frame(800));
        assert!(map.viewport().scale() > 1.0);
        assert_eq!(map.viewport().rotation_degrees(), 0.0);
        assert_eq!(map.viewport().phase(), ViewPhase::Idle);
    }

    #[test]
    fn dragging_never_selects() {
        let mut map = campus();
        map.pointer_down(pid(1), Point::new(2600.0, 2925.0));
        map.pointer_move(pid(1), Point::new(2680.0, 2925.0));
        assert_eq!(map.pointer_up(pid(1)), None);
        assert!(map.active_region().is_none());
        // The drag still panned the map.
        assert!(map.viewport().translate().x > 0.0);
    }

    #[test]
    fn background_tap_returns_nothing_and_keeps_the_highlight() {
        let mut map = campus();
        assert!(map.focus_region("store"));
        map.pointer_down(pid(1), Point::new(100.0, 100.0));
        assert_eq!(map.pointer_up(pid(1)), None);
        assert_eq!(map.active_region().unwrap().id(), "store");
    }

    #[test]
    fn hit_testing_uses_the_press_point_not_the_release_point() {
        let mut map = campus();
        // Press on mainblock, wobble within the tap threshold toward the
        // background; the press point decides.
        map.pointer_down(pid(1), Point::new(2600.0, 2925.0));
        map.pointer_move(pid(1), Point::new(2602.0, 2926.0));
        let event = map.pointer_up(pid(1));
        assert!(matches!(
            event,
            Some(MapEvent::RegionSelected { ref region_id, .. }) if region_id == "mainblock"
        ));
    }

    #[test]
    fn wheel_zoom_stays_within_limits() {
        let mut map = campus();
        let cursor = Point::new(2000.0, 2000.0);
        for _ in 0..50 {
            map.wheel(cursor, true);
        }
        assert_eq!(map.viewport().scale(), map.viewport().zoom_limits().1);
        for _ in 0..100 {
            map.wheel(cursor, false);
        }
        assert_eq!(map.viewport().scale(), map.viewport().zoom_limits().0);
    }

    #[test]
    fn one_wheel_step_applies_the_fixed_factor() {
        let mut map = campus();
        map.wheel(Point::new(2000.0, 2000.0), true);
        assert!((map.viewport().scale() - WHEEL_ZOOM_IN).abs() < 1e-12);
    }

    #[test]
    fn wheel_interrupts_a_focus_transition() {
        let mut map = campus();
        map.focus_region("mitegreens");
        map.frame(0);
        map.frame(200);
        map.wheel(Point::new(2000.0, 2000.0), true);
        assert!(!map.frame(400));
        assert_eq!(map.viewport().phase(), ViewPhase::Idle);
    }

    #[test]
    fn unknown_focus_id_is_a_silent_noop() {
        let mut map = campus();
        assert!(!map.focus_region("underwater-dome"));
        assert!(map.active_region().is_none());
        assert_eq!(map.viewport().phase(), ViewPhase::Idle);
    }

    #[test]
    fn hover_shows_the_tooltip_and_hides_it_off_region() {
        let mut map = campus();
        let tip = map.hover(Point::new(2600.0, 2925.0));
        assert!(tip.visible);
        assert_eq!(tip.title, "Main Block");
        assert_eq!(tip.position, Point::new(2600.0, 2925.0));

        let tip = map.hover(Point::new(100.0, 100.0));
        assert!(!tip.visible);
        // Text sticks around for the host's fade-out.
        assert_eq!(tip.title, "Main Block");
    }

    #[test]
    fn hover_is_inert_during_a_gesture() {
        let mut map = campus();
        map.pointer_down(pid(1), Point::new(100.0, 100.0));
        let tip = map.hover(Point::new(2600.0, 2925.0));
        assert!(!tip.visible);
    }

    #[test]
    fn hover_is_inert_on_touch_only_hosts() {
        let mut map =
            MapController::campus(Rect::new(0.0, 0.0, 4558.44, 5184.06), false);
        let tip = map.hover(Point::new(2600.0, 2925.0));
        assert!(!tip.visible);
    }

    #[test]
    fn search_spans_regions_and_external_entries() {
        let mut map = campus();
        map.set_search_entries([SearchItem::event("Spring Fair", "mitegreens")]);

        let hits = map.search("main");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region_id, "mainblock");

        let hits = map.search("fair");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region_id, "mitegreens");

        assert!(map.search("   ").is_empty());
    }

    #[test]
    fn touching_the_map_interrupts_a_focus_transition() {
        let mut map = campus();
        map.focus_region("store");
        map.frame(0);
        map.frame(200);
        let grabbed_at = map.viewport().transform();

        map.pointer_down(pid(1), Point::new(2000.0, 2000.0));
        assert_eq!(map.viewport().phase(), ViewPhase::UserDriven);
        assert!(!map.frame(400));
        assert_eq!(map.viewport().transform(), grabbed_at);
        map.pointer_cancel(pid(1));
        assert_eq!(map.viewport().phase(), ViewPhase::Idle);
    }
}
