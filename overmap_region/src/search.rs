// Copyright 2025 the Overmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search filtering over regions and externally supplied entries.
//!
//! The external search UI builds one [`SearchIndex`] after the map surface
//! is ready: every region contributes a [`SearchKind::Place`] entry, and the
//! host may mix in its own entries (events, stalls, ...) tagged with the
//! region they belong to. Queries are case-insensitive substring matches
//! over the entry labels; a blank query matches nothing, and "no matches"
//! is simply the empty result slice.

use alloc::string::String;
use alloc::vec::Vec;

use crate::RegionRegistry;

/// What a search entry points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// A region of the map itself.
    Place,
    /// An externally supplied item hosted within a region.
    Event,
}

/// One searchable entry, resolvable to a region identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchItem {
    /// Entry kind, shown as a tag next to the label.
    pub kind: SearchKind,
    /// Label the query is matched against.
    pub label: String,
    /// Identifier of the region this entry focuses.
    pub region_id: String,
}

impl SearchItem {
    /// Creates an externally supplied entry tied to a region.
    pub fn event(label: impl Into<String>, region_id: impl Into<String>) -> Self {
        Self {
            kind: SearchKind::Event,
            label: label.into(),
            region_id: region_id.into(),
        }
    }
}

/// Immutable search index over regions plus external entries.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
}

impl SearchIndex {
    /// Builds the index: one `Place` entry per region in document order,
    /// followed by the supplied external entries.
    #[must_use]
    pub fn build(
        registry: &RegionRegistry,
        extra: impl IntoIterator<Item = SearchItem>,
    ) -> Self {
        let mut items: Vec<SearchItem> = registry
            .list()
            .iter()
            .map(|region| SearchItem {
                kind: SearchKind::Place,
                label: String::from(region.title()),
                region_id: String::from(region.id()),
            })
            .collect();
        items.extend(extra);
        Self { items }
    }

    /// All entries, regions first, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Returns entries whose label contains the trimmed query,
    /// case-insensitively. A blank query returns no results.
    #[must_use]
    pub fn query(&self, query: &str) -> Vec<&SearchItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Region;
    use alloc::vec;
    use kurbo::Rect;

    fn index() -> SearchIndex {
        let registry = RegionRegistry::new(vec![
            Region::new("a", "Alpha", "", Rect::new(0.0, 0.0, 1.0, 1.0)),
            Region::new("b", "Beta", "", Rect::new(1.0, 1.0, 2.0, 2.0)),
        ]);
        SearchIndex::build(
            &registry,
            [SearchItem::event("Night Market", "b")],
        )
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let idx = index();
        let hits = idx.query("al");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region_id, "a");

        let upper = idx.query("ALPHA");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].region_id, "a");
    }

    #[test]
    fn blank_query_returns_nothing() {
        let idx = index();
        assert!(idx.query("").is_empty());
        assert!(idx.query("   ").is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let idx = index();
        let hits = idx.query("  beta ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region_id, "b");
    }

    #[test]
    fn no_matches_is_the_empty_slice() {
        let idx = index();
        assert!(idx.query("zzz").is_empty());
    }

    #[test]
    fn external_entries_resolve_to_their_region() {
        let idx = index();
        let hits = idx.query("market");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, SearchKind::Event);
        assert_eq!(hits[0].region_id, "b");
    }

    #[test]
    fn regions_come_before_external_entries() {
        let idx = index();
        assert_eq!(idx.items().len(), 3);
        assert_eq!(idx.items()[0].kind, SearchKind::Place);
        assert_eq!(idx.items()[2].kind, SearchKind::Event);
    }
}
